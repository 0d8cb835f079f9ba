use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

// Import LookupConfig from wikilens_resolver to avoid duplication
use wikilens_resolver::LookupConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TelegramConfig {
    /// Bot token; the environment variable takes precedence when set.
    #[serde(default)]
    pub token: String,
    /// Chat IDs allowed to use the bot; empty means all chats.
    #[serde(default)]
    pub allow_from: Vec<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when it does not
    /// exist. The bot token can come entirely from the environment, so a
    /// missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("wikilens");

        Ok(config_dir.join("config.json"))
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("wikilens");

        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "telegram": {
    "token": "",
    "allow_from": []
  },
  "lookup": {
    "ja_base_url": "https://ja.wikipedia.org/wiki/",
    "en_base_url": "https://wikipedia.org/wiki/",
    "timeout": 10,
    "user_agent": "Mozilla/5.0 (compatible; wikilens/1.0)",
    "max_size": 5000000
  }
}"#;

        std::fs::write(&config_path, config_template)?;

        println!("Created config file at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Put your bot token in \"telegram.token\", or export WIKILENS_BOT_TOKEN");
        println!("   2. Optionally restrict chats via \"telegram.allow_from\"");
        println!("   3. Run 'wikilens bot' to start the bot");
        println!();
        Ok(())
    }
}
