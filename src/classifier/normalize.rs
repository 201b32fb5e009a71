//! Text normalization

/// Trim and collapse every whitespace run (newlines, tabs included) to one space.
/// Case is preserved.
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
