//! Bot abstraction for delivering notifications.
//!
//! [`Bot`] trait is transport-agnostic; [`TelegramBot`] implements it via teloxide.

use crate::error::{BotError, Result};
use async_trait::async_trait;
use teloxide::{prelude::*, types::Recipient, RequestError};
use tracing::warn;

/// Abstraction for sending plain-text messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat (numeric id or `@channel` username).
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()>;
}

/// Teloxide-based implementation of [`Bot`].
pub struct TelegramBot {
    bot: teloxide::Bot,
}

/// Parses a configured chat id into a teloxide recipient.
pub fn parse_recipient(s: &str) -> Result<Recipient> {
    let s = s.trim();
    if let Ok(id) = s.parse::<i64>() {
        return Ok(Recipient::Id(ChatId(id)));
    }
    if s.len() > 1 && s.starts_with('@') {
        return Ok(Recipient::ChannelUsername(s.to_string()));
    }
    Err(BotError::Unexpected(format!("invalid chat id: {:?}", s)))
}

/// Splits teloxide failures into transport-reported ones and everything else.
fn classify(e: RequestError) -> BotError {
    match e {
        RequestError::InvalidJson { .. } | RequestError::Io(_) => {
            BotError::Unexpected(e.to_string())
        }
        other => BotError::Telegram(other.to_string()),
    }
}

impl TelegramBot {
    /// Creates a bot using the given Telegram bot token.
    pub fn new(token: String) -> Self {
        Self {
            bot: teloxide::Bot::new(token),
        }
    }

    /// Points the bot at a custom Bot API server (TELEGRAM_API_URL).
    pub fn with_api_url(self, api_url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(api_url).map_err(|e| {
            BotError::Config(format!("TELEGRAM_API_URL is not a valid URL: {}: {}", api_url, e))
        })?;
        Ok(Self {
            bot: self.bot.set_api_url(url),
        })
    }
}

#[async_trait]
impl Bot for TelegramBot {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let recipient = parse_recipient(chat_id)?;
        self.bot
            .send_message(recipient, text.to_string())
            .await
            .map_err(|e| {
                warn!(chat_id = %chat_id, error = %e, "Telegram sendMessage failed");
                classify(e)
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_telegram_bot_new() {
        let _bot = TelegramBot::new("dummy_token".to_string());
    }

    #[test]
    fn test_with_api_url_invalid() {
        let bot = TelegramBot::new("dummy_token".to_string());
        assert!(matches!(
            bot.with_api_url("not-a-valid-url"),
            Err(BotError::Config(_))
        ));
    }

    #[test]
    fn test_parse_recipient_valid() {
        assert_eq!(
            parse_recipient("123456").unwrap(),
            Recipient::Id(ChatId(123456))
        );
        assert_eq!(
            parse_recipient("-1001234").unwrap(),
            Recipient::Id(ChatId(-1001234))
        );
        assert_eq!(
            parse_recipient("@reviews").unwrap(),
            Recipient::ChannelUsername("@reviews".to_string())
        );
    }

    #[test]
    fn test_parse_recipient_invalid() {
        assert!(parse_recipient("").is_err());
        assert!(parse_recipient("@").is_err());
        assert!(matches!(
            parse_recipient("abc"),
            Err(BotError::Unexpected(_))
        ));
    }
}
