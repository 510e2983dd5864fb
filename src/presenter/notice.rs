use std::io::{self, Write};

use crate::presenter::console_style::ConsoleStyle;
use crate::scraping::ranked_item::TopSellers;

/// Heading shown above the table, e.g. `Top-10 best sellers on Steam (RU):`.
pub fn table_heading(list: &TopSellers, region_label: &str) -> String {
    format!(
        "Top-{} best sellers on Steam ({}):",
        list.effective_count(),
        region_label
    )
}

/// Tells the user the page had fewer items than requested. Writes nothing
/// when the full count was extracted.
pub fn render_reduced_notice<W, S>(out: &mut W, style: &S, list: &TopSellers) -> io::Result<()>
where
    W: Write + ?Sized,
    S: ConsoleStyle + ?Sized,
{
    if !list.is_reduced() {
        return Ok(());
    }

    let effective = list.effective_count();
    let notice = format!(
        "The page lists {} items, fewer than the requested {}. Showing Top-{}.",
        effective,
        list.requested(),
        effective
    );
    writeln!(out, "{}", style.notice(&notice))?;
    out.flush()
}
