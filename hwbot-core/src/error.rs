use thiserror::Error;

/// Failure while delivering a message through the notification channel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// The transport itself reported the failure (API error, network, rate limit).
    #[error("Telegram send failed: {0}")]
    Telegram(String),

    /// Anything else that went wrong while sending.
    #[error("Telegram message not sent: {0}")]
    Unexpected(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_cause() {
        let err = BotError::Telegram("Bad Request: chat not found".to_string());
        assert_eq!(
            err.to_string(),
            "Telegram send failed: Bad Request: chat not found"
        );

        let err = BotError::Unexpected("invalid chat id: abc".to_string());
        assert_eq!(err.to_string(), "Telegram message not sent: invalid chat id: abc");
    }
}
