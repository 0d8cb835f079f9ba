//! The message-to-card pipeline.

use async_trait::async_trait;

use crate::card::{CardField, PageSummary, ReplyCard};
use crate::extract::raw_terms;
use crate::sanitize::lookup_key;
use crate::script::Script;

/// Seam between the pipeline and whatever resolves terms to page summaries.
///
/// A failed lookup is `None`, never an error: unresolvable terms are
/// silently left off the card.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Resolve one sanitized lookup key to a page summary, or `None` when
    /// the page is unreachable or unusable.
    async fn resolve(&self, script: Script, term: &str) -> Option<PageSummary>;
}

/// Turn one message body into at most one reply card.
///
/// Terms are resolved sequentially, Japanese-script terms first, each
/// script's terms in extraction order, so field order is deterministic.
/// No resolvable term means no card and therefore no reply.
pub async fn build_reply(text: &str, provider: &dyn SummaryProvider) -> Option<ReplyCard> {
    let mut fields = Vec::new();

    for script in Script::ALL {
        for raw in raw_terms(script, text) {
            let key = lookup_key(script, &raw.text);
            if let Some(summary) = provider.resolve(script, &key).await {
                fields.push(CardField::from_summary(summary));
            }
        }
    }

    if fields.is_empty() {
        None
    } else {
        Some(ReplyCard { fields })
    }
}
