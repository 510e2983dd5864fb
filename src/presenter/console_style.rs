use colored::Colorize;

/// Terminal styling used by the presenter. Swapped for `PlainStyle` in tests.
pub trait ConsoleStyle {
    /// Wraps `text` in the error style; the returned string ends with a reset.
    fn error(&self, text: &str) -> String;

    fn notice(&self, text: &str) -> String;

    /// Control sequence that clears the screen, or empty when unsupported.
    fn clear_screen(&self) -> &'static str;
}

pub struct ColoredStyle;

impl ConsoleStyle for ColoredStyle {
    fn error(&self, text: &str) -> String {
        text.red().to_string()
    }

    fn notice(&self, text: &str) -> String {
        text.green().to_string()
    }

    fn clear_screen(&self) -> &'static str {
        "\x1B[2J\x1B[1;1H"
    }
}

pub struct PlainStyle;

impl ConsoleStyle for PlainStyle {
    fn error(&self, text: &str) -> String {
        text.to_string()
    }

    fn notice(&self, text: &str) -> String {
        text.to_string()
    }

    fn clear_screen(&self) -> &'static str {
        ""
    }
}
