use crate::{Command, Error, Result};
use std::time::Duration;
use teloxide::prelude::*;
use tokio::time::sleep;
use tracing::{info, warn};
use wikilens_resolver::WikipediaResolver;

/// Telegram bot that answers bracket-delimited lookup terms with
/// encyclopedia summary cards.
#[derive(Clone)]
pub struct TelegramBot {
    /// Teloxide bot instance
    pub bot: Bot,
    /// Page resolver shared by every message event
    resolver: WikipediaResolver,
    /// Allowed chat IDs; empty means all chats
    allowed_chats: Vec<i64>,
}

impl TelegramBot {
    /// Create a new Telegram bot
    pub fn new(token: String, resolver: WikipediaResolver, allowed_chats: &[String]) -> Result<Self> {
        if token.is_empty() {
            return Err(Error::Config("Bot token is empty".to_string()));
        }

        // Parse allowed chat IDs
        let allowed_chats = allowed_chats
            .iter()
            .filter_map(|s| s.parse::<i64>().ok())
            .collect();

        let bot = Bot::new(token);

        Ok(Self {
            bot,
            resolver,
            allowed_chats,
        })
    }

    /// Check if a chat is allowed
    #[must_use]
    pub fn is_allowed(&self, chat_id: i64) -> bool {
        self.allowed_chats.is_empty() || self.allowed_chats.contains(&chat_id)
    }

    /// Page resolver for the message handler.
    #[must_use]
    pub const fn resolver(&self) -> &WikipediaResolver {
        &self.resolver
    }

    /// Test connection to Telegram API with linear backoff retry.
    /// Starts at 2s, increases by 2s each attempt, max 10s delay.
    /// Retries indefinitely until connection succeeds.
    async fn test_connection(&self) -> Result<()> {
        const INITIAL_DELAY_SECS: u64 = 2;
        const MAX_DELAY_SECS: u64 = 10;

        let mut attempt = 1u64;
        loop {
            match self.bot.get_me().await {
                Ok(bot_user) => {
                    info!(
                        "Connected to Telegram API: @{} (id: {})",
                        bot_user
                            .user
                            .username
                            .unwrap_or_else(|| "no username".to_string()),
                        bot_user.user.id
                    );
                    return Ok(());
                }
                Err(e) => {
                    let delay_secs = (INITIAL_DELAY_SECS * attempt).min(MAX_DELAY_SECS);
                    let delay = Duration::from_secs(delay_secs);

                    warn!("Connection attempt {attempt} failed: {e}. Retrying in {delay_secs}s...");

                    // Only show detailed help on first failure
                    if attempt == 1 {
                        warn!("This may be due to:");
                        warn!("  - Network connectivity issues");
                        warn!("  - Firewall blocking api.telegram.org");
                        warn!("  - Invalid bot token");
                        warn!("  - Telegram API being temporarily unavailable");
                    }

                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Run the bot
    pub async fn run(self) -> Result<()> {
        use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
        use teloxide::dptree;
        use teloxide::types::Update;

        // Test connection with backoff retry before starting dispatcher
        self.test_connection().await?;

        self.bot.set_my_commands(Command::bot_commands()).await?;

        let bot = self.bot.clone();

        let schema = dptree::entry().branch(Update::filter_message().endpoint({
            let bot_clone = self.clone();
            move |_bot: Bot, msg: teloxide::types::Message| {
                let bot_clone = bot_clone.clone();
                async move { crate::handler::handle_message(bot_clone, msg).await }
            }
        }));

        Dispatcher::builder(bot, schema)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wikilens_resolver::LookupConfig;

    fn resolver() -> WikipediaResolver {
        let Ok(resolver) = WikipediaResolver::new(LookupConfig::default()) else {
            panic!("failed to build resolver");
        };
        resolver
    }

    #[test]
    fn empty_token_is_rejected() {
        let result = TelegramBot::new(String::new(), resolver(), &[]);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_allow_list_allows_every_chat() {
        let Ok(bot) = TelegramBot::new("123:abc".to_string(), resolver(), &[]) else {
            panic!("failed to build bot");
        };
        assert!(bot.is_allowed(1));
        assert!(bot.is_allowed(-42));
    }

    #[test]
    fn allow_list_filters_chats() {
        let allow = ["42".to_string(), "not-a-number".to_string()];
        let Ok(bot) = TelegramBot::new("123:abc".to_string(), resolver(), &allow) else {
            panic!("failed to build bot");
        };
        assert!(bot.is_allowed(42));
        assert!(!bot.is_allowed(7));
    }
}
