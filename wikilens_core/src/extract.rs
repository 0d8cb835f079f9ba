//! Bracket-delimited term extraction.
//!
//! A message can carry lookup terms in two delimiter conventions; each
//! pattern matches the shortest non-empty span between its delimiters, so
//! a match always ends at the first closing delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::script::Script;

static JA_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("｛([^｛｝]+)｝").unwrap_or_else(|e| panic!("invalid ja term pattern: {e}"))
});

static EN_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("\"([^\"]+)\"").unwrap_or_else(|e| panic!("invalid en term pattern: {e}"))
});

/// A term captured between delimiters, tagged with its script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTerm {
    pub script: Script,
    pub text: String,
}

/// Extract every raw term of one script from a message body.
///
/// Terms are returned in order of first appearance, duplicates included.
/// No match yields an empty vec; that is not an error.
#[must_use]
pub fn raw_terms(script: Script, text: &str) -> Vec<RawTerm> {
    let pattern = match script {
        Script::Ja => &JA_TERM,
        Script::En => &EN_TERM,
    };

    pattern
        .captures_iter(text)
        .map(|caps| RawTerm {
            script,
            text: caps[1].to_string(),
        })
        .collect()
}
