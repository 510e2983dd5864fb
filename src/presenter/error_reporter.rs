use std::io::{self, Write};

use crate::presenter::console_style::ConsoleStyle;

/// Writes `label` followed by `detail` as one line in the error style.
pub fn report_error<W: Write + ?Sized, S: ConsoleStyle + ?Sized>(
    out: &mut W,
    style: &S,
    label: &str,
    detail: Option<&str>,
) -> io::Result<()> {
    let line = format!("{}{}", label, detail.unwrap_or_default());
    writeln!(out, "{}", style.error(&line))?;
    out.flush()
}
