//! Mock implementation of [`homework_bot::Bot`] for integration tests.
//!
//! Records every delivered message so tests can assert on what reached the chat
//! without hitting Telegram; can be switched into a failing mode.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use homework_bot::{Bot, BotError};

/// One recorded `send_message(chat_id, text)` call that succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub chat_id: String,
    pub text: String,
}

/// Mock Bot that records sends. While a failure is set, every send returns it and nothing is recorded.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    attempts: Mutex<usize>,
    failure: Mutex<Option<BotError>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every following send fail with `error`.
    pub fn fail_with(&self, error: BotError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Texts of successfully delivered messages, oldest first.
    pub fn texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.text.clone())
            .collect()
    }

    pub fn records(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Number of send attempts, failed ones included.
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        *self.attempts.lock().unwrap() += 1;
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.sent.lock().unwrap().push(SentRecord {
            chat_id: chat_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
