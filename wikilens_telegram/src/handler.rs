use crate::{Command, Result, TelegramBot};
use teloxide::{requests::Requester, types::Message};
use tracing::info;
use wikilens_core::build_reply;

/// Handle bot commands
pub async fn handle_command(bot: TelegramBot, msg: Message, cmd: Command) -> Result<()> {
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    match cmd {
        Command::Start => {
            info!("[@{username}] Command: /start");
            bot.bot
                .send_message(msg.chat.id, Command::welcome_text())
                .await?;
        }
        Command::Help => {
            info!("[@{username}] Command: /help");
            bot.bot
                .send_message(msg.chat.id, Command::help_text())
                .await?;
        }
    }

    Ok(())
}

/// Handle any message (commands or regular text)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;

    // Non-text messages carry no lookup terms
    let Some(text) = msg.text() else {
        return Ok(());
    };

    if !bot.is_allowed(chat_id) {
        return Ok(());
    }

    // Check if this is a command
    if let Some(cmd) = Command::parse_from_text(text) {
        return handle_command(bot, msg, cmd).await;
    }

    // One reply per message that yields at least one resolvable term;
    // anything else stays silent.
    if let Some(card) = build_reply(text, bot.resolver()).await {
        let username = msg
            .from
            .as_ref()
            .and_then(|u| u.username.as_deref())
            .unwrap_or("unknown");
        info!(
            "[@{username}] Resolved {} term(s), replying",
            card.fields.len()
        );

        bot.bot.send_message(msg.chat.id, card.render()).await?;
    }

    Ok(())
}
