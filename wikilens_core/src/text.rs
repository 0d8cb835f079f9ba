//! Grapheme-aware length and truncation helpers.
//!
//! Budgets are counted in grapheme clusters rather than bytes so the limits
//! hold for CJK and combining sequences the same way they do for ASCII.

use unicode_segmentation::UnicodeSegmentation;

/// Marker appended to text that was cut at a budget.
pub const ELLIPSIS: &str = "…";

/// Number of grapheme clusters in `text`.
#[must_use]
pub fn character_length(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Cut `text` down to at most `max_len` grapheme clusters.
///
/// Text within the budget is returned unchanged. Text over the budget is
/// cut so that, with the ellipsis marker appended, the result is exactly
/// `max_len` clusters long.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    if character_length(text) <= max_len {
        return text.to_string();
    }

    let keep = max_len.saturating_sub(character_length(ELLIPSIS));
    let mut cut: String = text.graphemes(true).take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_to_exact_budget() {
        let long = "a".repeat(300);
        let cut = truncate(&long, 256);
        assert_eq!(character_length(&cut), 256);
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        // Ten kanji are thirty bytes but ten clusters.
        let text = "東".repeat(10);
        assert_eq!(character_length(&text), 10);
        assert_eq!(truncate(&text, 10), text);

        let cut = truncate(&text, 5);
        assert_eq!(character_length(&cut), 5);
        assert_eq!(cut, format!("{}{ELLIPSIS}", "東".repeat(4)));
    }

    #[test]
    fn combining_sequences_count_as_one() {
        // e + combining acute accent is a single cluster.
        let text = "e\u{301}abc";
        assert_eq!(character_length(text), 4);
    }

    #[test]
    fn boundary_is_inclusive() {
        let exact = "x".repeat(256);
        assert_eq!(truncate(&exact, 256), exact);

        let over = "x".repeat(257);
        assert_eq!(character_length(&truncate(&over, 256)), 256);
    }
}
