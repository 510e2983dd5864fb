use std::io::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayConfig;
use crate::scraping::ranked_item::RankedItem;

/// Column widths of the ranked table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub rank_width: usize,
    pub name_width: usize,
    pub price_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for TableLayout {
    fn from(display: &DisplayConfig) -> Self {
        Self {
            rank_width: display.rank_width,
            name_width: display.name_width,
            price_width: display.price_width,
        }
    }
}

/// Columns are sized by terminal display width, so double-width titles keep
/// the price column aligned.
pub fn format_row(item: &RankedItem, layout: &TableLayout) -> String {
    format!(
        "{}. {} Price - {}",
        pad_end(&fit(&item.rank().to_string(), layout.rank_width), layout.rank_width),
        pad_end(&fit(item.name(), layout.name_width), layout.name_width),
        pad_start(item.price(), layout.price_width),
    )
}

pub fn render_table<W: Write + ?Sized>(
    out: &mut W,
    items: &[RankedItem],
    layout: &TableLayout,
) -> io::Result<()> {
    for item in items {
        writeln!(out, "{}", format_row(item, layout))?;
    }
    Ok(())
}

/// Cuts `text` to `width` display columns, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        fitted.push(c);
        used += w;
    }
    fitted.push('…');
    fitted
}

fn pad_end(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text.width())))
}

fn pad_start(text: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(text.width())), text)
}
