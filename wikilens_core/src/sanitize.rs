//! Whitespace normalization for lookup terms.

use crate::script::Script;

const HALFWIDTH_SPACE: char = ' ';
const FULLWIDTH_SPACE: char = '　';

/// Joiner substituted for interior whitespace in page names.
const JOINER: &str = "_";

/// Normalize a raw term into a lookup-safe token.
///
/// One pass only: a single leading and/or trailing half-width space is
/// stripped, then a single leading and/or trailing full-width space, and
/// every space of either width that survives becomes the joiner. This is
/// deliberately not a trim-to-fixpoint; doubled boundary spaces turn into
/// joiners, matching the page-name convention of the lookup targets.
#[must_use]
pub fn sanitize(raw: &str) -> String {
    let s = raw.strip_prefix(HALFWIDTH_SPACE).unwrap_or(raw);
    let s = s.strip_suffix(HALFWIDTH_SPACE).unwrap_or(s);
    let s = s.strip_prefix(FULLWIDTH_SPACE).unwrap_or(s);
    let s = s.strip_suffix(FULLWIDTH_SPACE).unwrap_or(s);

    s.replace([HALFWIDTH_SPACE, FULLWIDTH_SPACE], JOINER)
}

/// Produce the address-path segment for a raw term.
///
/// Japanese-script terms are percent-encoded; quote-script terms are used
/// verbatim, matching the two downstream address schemes.
#[must_use]
pub fn lookup_key(script: Script, raw: &str) -> String {
    let clean = sanitize(raw);
    match script {
        Script::Ja => urlencoding::encode(&clean).into_owned(),
        Script::En => clean,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_boundary_halfwidth_spaces() {
        assert_eq!(sanitize(" foo "), "foo");
    }

    #[test]
    fn replaces_interior_spaces_with_joiner() {
        assert_eq!(sanitize("foo bar"), "foo_bar");
        assert_eq!(sanitize(" foo bar "), "foo_bar");
    }

    #[test]
    fn strips_boundary_fullwidth_spaces() {
        assert_eq!(sanitize("　東京　"), "東京");
        assert_eq!(sanitize("東　京"), "東_京");
    }

    #[test]
    fn single_pass_boundary_trim_only() {
        // Doubled boundary spaces: one is trimmed, the survivor joins.
        assert_eq!(sanitize("  foo"), "_foo");
        assert_eq!(sanitize("foo  "), "foo_");
    }

    #[test]
    fn halfwidth_trim_happens_before_fullwidth_trim() {
        // The leading full-width space goes, the now-leading half-width
        // space was not at the boundary during its own pass and joins.
        assert_eq!(sanitize("　 foo"), "_foo");
    }

    #[test]
    fn idempotent_on_boundary_clean_input() {
        for input in ["foo", "foo_bar", "東京", "a b"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn ja_terms_are_percent_encoded() {
        assert_eq!(lookup_key(Script::Ja, "東京"), "%E6%9D%B1%E4%BA%AC");
    }

    #[test]
    fn en_terms_are_not_percent_encoded() {
        assert_eq!(lookup_key(Script::En, "New York"), "New_York");
    }

    #[test]
    fn ja_spaces_become_joiners_before_encoding() {
        // The joiner survives encoding untouched, so the two escape styles
        // can never disagree about whitespace.
        assert_eq!(lookup_key(Script::Ja, "東 京"), "%E6%9D%B1_%E4%BA%AC");
    }
}
