//! Reply card types.
//!
//! One resolved term becomes one named field; a message that resolved at
//! least one term gets exactly one card back.

/// Budget for a field name, in grapheme clusters.
pub const TITLE_LIMIT: usize = 256;

/// Budget for a rendered field value (snippet, newline and source address
/// included), in grapheme clusters.
pub const VALUE_LIMIT: usize = 1024;

/// Title and body snippet extracted from one reference page.
///
/// The resolver guarantees `title` fits [`TITLE_LIMIT`] and that
/// `snippet` plus the newline-joined `url` fits [`VALUE_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

/// A single named field on a reply card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
}

impl CardField {
    /// Build a field from a page summary: the title names the field and the
    /// value carries the snippet with the source address on its last line.
    #[must_use]
    pub fn from_summary(summary: PageSummary) -> Self {
        Self {
            name: summary.title,
            value: format!("{}\n{}", summary.snippet, summary.url),
        }
    }
}

/// Ordered fields for one outgoing reply.
///
/// Never constructed empty; a message with no resolvable terms gets no
/// reply at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyCard {
    pub fields: Vec<CardField>,
}

impl ReplyCard {
    /// Render the card as a single plain-text message, one field per block.
    #[must_use]
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|field| format!("{}\n{}", field.name, field.value))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
