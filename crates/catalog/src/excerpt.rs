pub const CARD_EXCERPT_BUDGET: usize = 150;

const ELLIPSIS: &str = "...";

/// Cuts `text` after `budget` characters and appends an ellipsis. The cut
/// ignores word boundaries. Text that already fits is returned unchanged.
pub fn truncate_excerpt(text: &str, budget: usize) -> String {
    match text.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
