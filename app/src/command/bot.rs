use crate::command::CommandStrategy;
use tracing::info;
use wikilens_config::Config;
use wikilens_resolver::WikipediaResolver;
use wikilens_telegram::TelegramBot;

/// Environment variable the bot token is read from when no CLI flag is
/// given and the config file carries no token.
const TOKEN_ENV_VAR: &str = "WIKILENS_BOT_TOKEN";

/// Input for the Telegram bot command.
pub struct BotInput {
    /// Optional bot token (overrides environment and config)
    pub token: Option<String>,
    /// Optional allowed chat IDs (overrides config)
    pub allow_from: Option<Vec<String>>,
}

/// Strategy for running the Telegram bot.
pub struct BotStrategy;

impl CommandStrategy for BotStrategy {
    type Input = BotInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        // Token resolution: CLI flag, then environment, then config
        let token = if let Some(t) = input.token {
            t
        } else if let Ok(t) = std::env::var(TOKEN_ENV_VAR) {
            t
        } else if !config.telegram.token.is_empty() {
            config.telegram.token.clone()
        } else {
            anyhow::bail!(
                "Telegram bot token not configured. Set {TOKEN_ENV_VAR} or \"telegram.token\" in config"
            );
        };

        // Get allowed chats from input or config
        let allow_from = input
            .allow_from
            .unwrap_or_else(|| config.telegram.allow_from.clone());

        info!("Starting Telegram bot...");

        let resolver = WikipediaResolver::new(config.lookup.clone())?;
        let bot = TelegramBot::new(token, resolver, &allow_from)?;

        info!("Telegram bot is running. Press Ctrl+C to stop.");
        bot.run().await?;

        Ok(())
    }
}
