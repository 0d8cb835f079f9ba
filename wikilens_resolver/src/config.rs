use serde::{Deserialize, Serialize};
use wikilens_core::Script;

/// Lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Base address for Japanese-script page lookups
    #[serde(default = "LookupConfig::default_ja_base_url")]
    pub ja_base_url: String,

    /// Base address for quote-script page lookups
    #[serde(default = "LookupConfig::default_en_base_url")]
    pub en_base_url: String,

    /// Request timeout (seconds)
    #[serde(default = "LookupConfig::default_timeout")]
    pub timeout: u64,

    /// User-Agent header
    #[serde(default = "LookupConfig::default_user_agent")]
    pub user_agent: String,

    /// Maximum response size (bytes)
    #[serde(default = "LookupConfig::default_max_size")]
    pub max_size: usize,
}

impl LookupConfig {
    fn default_ja_base_url() -> String {
        Script::Ja.default_base_url().to_string()
    }

    fn default_en_base_url() -> String {
        Script::En.default_base_url().to_string()
    }

    const fn default_timeout() -> u64 {
        10
    }

    fn default_user_agent() -> String {
        "Mozilla/5.0 (compatible; wikilens/1.0)".to_string()
    }

    const fn default_max_size() -> usize {
        5_000_000 // 5MB, encyclopedia pages run large
    }

    /// Base address for one script's pages.
    #[must_use]
    pub fn base_url(&self, script: Script) -> &str {
        match script {
            Script::Ja => &self.ja_base_url,
            Script::En => &self.en_base_url,
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            ja_base_url: Self::default_ja_base_url(),
            en_base_url: Self::default_en_base_url(),
            timeout: Self::default_timeout(),
            user_agent: Self::default_user_agent(),
            max_size: Self::default_max_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_wikipedia() {
        let config = LookupConfig::default();
        assert_eq!(config.base_url(Script::Ja), "https://ja.wikipedia.org/wiki/");
        assert_eq!(config.base_url(Script::En), "https://wikipedia.org/wiki/");
        assert_eq!(config.timeout, 10);
        assert!(config.user_agent.contains("wikilens"));
    }
}
