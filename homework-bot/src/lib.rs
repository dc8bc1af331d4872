//! # homework-bot
//!
//! Polls the homework review API on a fixed interval and relays the latest submission's
//! review status to a Telegram chat. Pipeline per iteration:
//! [`ApiClient::fetch`] → [`extract`] → [`format_status`] → [`Notifier::notify`],
//! orchestrated by [`PollLoop`].

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod notifier;
pub mod runner;
pub mod status;
pub mod validator;

pub use api::ApiClient;
pub use cli::{load_config, Cli, Commands, Overrides};
pub use config::Config;
pub use error::{PollError, StartupError};
pub use notifier::Notifier;
pub use runner::{run_bot, PollLoop, PollState, RunMode, START_MESSAGE};
pub use status::{format_status, HomeworkRecord, HomeworkStatus};
pub use validator::{current_date, extract};

// Re-export transport (from hwbot-core)
pub use hwbot_core::{init_tracing, Bot, BotError, LogConfig, TelegramBot};
