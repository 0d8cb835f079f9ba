use std::fmt;

/// The two bracket conventions a message can carry.
///
/// Each script maps to its own reference-page address scheme; the
/// full-width-brace script is resolved against Japanese Wikipedia and the
/// quote script against English Wikipedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Terms wrapped in full-width braces: `｛東京｝`
    Ja,
    /// Terms wrapped in double quotes: `"Tokyo"`
    En,
}

impl Script {
    /// Both scripts, in the order their results appear on a reply card.
    pub const ALL: [Self; 2] = [Self::Ja, Self::En];

    /// Default base address for this script's reference pages.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Ja => "https://ja.wikipedia.org/wiki/",
            Self::En => "https://wikipedia.org/wiki/",
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ja => write!(f, "ja"),
            Self::En => write!(f, "en"),
        }
    }
}
