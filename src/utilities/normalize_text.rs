/// Trims `text` and collapses inner whitespace runs (non-breaking spaces
/// included) into single spaces.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
