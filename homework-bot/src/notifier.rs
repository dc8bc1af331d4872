//! Sends relay messages to the single configured chat.

use std::sync::Arc;

use hwbot_core::{Bot, BotError};
use tracing::info;

/// The notification channel: one bot, one destination chat.
#[derive(Clone)]
pub struct Notifier {
    bot: Arc<dyn Bot>,
    chat_id: String,
}

impl Notifier {
    pub fn new(bot: Arc<dyn Bot>, chat_id: String) -> Self {
        Self { bot, chat_id }
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Sends `message`. Transport failures come back as [`BotError::Telegram`], anything else as
    /// [`BotError::Unexpected`]; either way the channel should not be used again this cycle.
    pub async fn notify(&self, message: &str) -> Result<(), BotError> {
        self.bot.send_message(&self.chat_id, message).await?;
        info!(chat_id = %self.chat_id, message = %message, "Bot sent message");
        Ok(())
    }
}
