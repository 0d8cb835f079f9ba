//! Page summary extraction from fetched HTML.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use wikilens_core::{PageSummary, TITLE_LIMIT, VALUE_LIMIT, character_length, truncate};

static TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").unwrap_or_else(|e| panic!("invalid title selector: {e}"))
});

/// Third paragraph under the first division of the main content container;
/// on Wikipedia article markup this is the lead body paragraph.
static LEAD_PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#mw-content-text > div:nth-of-type(1) > p:nth-of-type(3)")
        .unwrap_or_else(|e| panic!("invalid lead paragraph selector: {e}"))
});

/// Extract a budgeted title and snippet from a fetched document.
///
/// A document without a title node is unusable and yields `None`. A missing
/// lead paragraph yields an empty snippet, not a failure. The snippet budget
/// reserves room for the newline and source address the card builder appends,
/// so the rendered field value never exceeds [`VALUE_LIMIT`].
#[must_use]
pub fn parse_summary(html: &str, url: &str) -> Option<PageSummary> {
    let document = Html::parse_document(html);

    let title_text = document
        .select(&TITLE)
        .next()?
        .text()
        .collect::<String>();

    let snippet_text = document
        .select(&LEAD_PARAGRAPH)
        .next()
        .map(|p| p.text().collect::<String>())
        .unwrap_or_default();

    let snippet_budget = VALUE_LIMIT.saturating_sub(character_length(&format!("\n{url}")));

    Some(PageSummary {
        title: truncate(&title_text, TITLE_LIMIT),
        snippet: truncate(&snippet_text, snippet_budget),
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://wikipedia.org/wiki/Tokyo";

    fn article(title: &str, paragraphs: &[&str]) -> String {
        let body = paragraphs
            .iter()
            .map(|p| format!("<p>{p}</p>"))
            .collect::<String>();
        format!(
            "<html><head><title>{title}</title></head><body>\
             <div id=\"mw-content-text\"><div class=\"mw-parser-output\">{body}</div></div>\
             </body></html>"
        )
    }

    #[test]
    fn extracts_title_and_third_paragraph() {
        let html = article(
            "Tokyo - Wikipedia",
            &["coordinates", "pronunciation", "Tokyo is the capital of Japan."],
        );

        let Some(summary) = parse_summary(&html, URL) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.title, "Tokyo - Wikipedia");
        assert_eq!(summary.snippet, "Tokyo is the capital of Japan.");
        assert_eq!(summary.url, URL);
    }

    #[test]
    fn missing_third_paragraph_is_empty_snippet() {
        let html = article("Stub - Wikipedia", &["only", "two"]);

        let Some(summary) = parse_summary(&html, URL) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.snippet, "");
    }

    #[test]
    fn missing_title_is_no_result() {
        let html = "<html><body><p>bare fragment</p></body></html>";
        assert!(parse_summary(html, URL).is_none());
    }

    #[test]
    fn long_title_is_cut_to_limit() {
        let html = article(&"t".repeat(400), &[]);

        let Some(summary) = parse_summary(&html, URL) else {
            panic!("expected a summary");
        };
        assert_eq!(character_length(&summary.title), TITLE_LIMIT);
        assert!(summary.title.ends_with('…'));
    }

    #[test]
    fn snippet_budget_reserves_room_for_address() {
        let html = article(
            "Long - Wikipedia",
            &["a", "b", &"x".repeat(2000)],
        );

        let Some(summary) = parse_summary(&html, URL) else {
            panic!("expected a summary");
        };
        let appended = format!("\n{URL}");
        assert!(
            character_length(&summary.snippet) + character_length(&appended) <= VALUE_LIMIT
        );
        assert_eq!(
            character_length(&summary.snippet) + character_length(&appended),
            VALUE_LIMIT
        );
        assert!(summary.snippet.ends_with('…'));
    }

    #[test]
    fn nested_markup_inside_paragraph_flattens_to_text() {
        let html = article(
            "Tokyo - Wikipedia",
            &["a", "b", "Tokyo is the <b>capital</b> of <a href=\"/wiki/Japan\">Japan</a>."],
        );

        let Some(summary) = parse_summary(&html, URL) else {
            panic!("expected a summary");
        };
        assert_eq!(summary.snippet, "Tokyo is the capital of Japan.");
    }
}
