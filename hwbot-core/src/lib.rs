//! # hwbot-core
//!
//! Notification transport for the homework relay: the [`Bot`] trait, its teloxide
//! implementation [`TelegramBot`], transport errors and tracing initialization.
//! Knows nothing about the review API; used by homework-bot.

pub mod bot;
pub mod error;
pub mod logger;

pub use bot::{parse_recipient, Bot, TelegramBot};
pub use error::{BotError, Result};
pub use logger::{init_tracing, LogConfig};
