pub mod browser;
pub mod console_style;
pub mod error_reporter;
pub mod notice;
pub mod prompt_loop;
pub mod render_table;
pub mod selection;

pub use browser::{BrowserLauncher, SystemBrowser};
pub use console_style::{ColoredStyle, ConsoleStyle, PlainStyle};
pub use error_reporter::report_error;
pub use notice::{render_reduced_notice, table_heading};
pub use prompt_loop::{Presenter, PromptOutcome};
pub use render_table::{render_table, TableLayout};
pub use selection::{parse_selection, SelectionError};
