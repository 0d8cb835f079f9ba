use teloxide::types::BotCommand;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

impl Command {
    fn all() -> Vec<BotCommand> {
        vec![
            BotCommand {
                command: "start".to_string(),
                description: "What this bot does".to_string(),
            },
            BotCommand {
                command: "help".to_string(),
                description: "Show lookup syntax".to_string(),
            },
        ]
    }

    #[must_use]
    pub fn bot_commands() -> Vec<BotCommand> {
        Self::all()
    }

    #[must_use]
    pub fn parse_from_text(text: &str) -> Option<Self> {
        let text = text.trim().to_lowercase();

        // Remove bot mention if present (e.g., "/help@my_bot")
        let text = text.split('@').next().unwrap_or(&text).to_string();

        match text.as_str() {
            "/start" => Some(Self::Start),
            "/help" => Some(Self::Help),
            _ => None,
        }
    }

    #[must_use]
    pub const fn help_text() -> &'static str {
        r#"
Wrap a term to look it up:

｛東京｝  - full-width braces, Japanese Wikipedia
"Tokyo"  - double quotes, English Wikipedia

Several terms in one message each get their own card field.
Terms that resolve to no page are silently skipped.
"#
    }

    #[must_use]
    pub const fn welcome_text() -> &'static str {
        r#"
wikilens looks up encyclopedia pages for terms mentioned in chat.

Write ｛東京｝ or "Tokyo" anywhere in a message and the bot replies
with the page title, a snippet and a link for each term it can find.

Send /help for the full syntax.
"#
    }
}
