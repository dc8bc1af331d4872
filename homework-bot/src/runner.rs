//! Poll loop: startup checks, one fetch → extract → format → notify pass per interval, error relay.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use hwbot_core::{init_tracing, Bot, TelegramBot};
use tracing::{debug, error, info, instrument};

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::{PollError, StartupError};
use crate::notifier::Notifier;
use crate::status::format_status;
use crate::validator::{current_date, extract};

/// First message sent at startup; proves the notification channel works.
pub const START_MESSAGE: &str = "Start!";

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Everything the loop remembers between iterations. Not persisted; a restart starts from now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` cursor for the next fetch.
    pub last_seen_timestamp: i64,
    /// Last error text relayed to the chat.
    pub last_sent_message: String,
    /// Status message produced by the last successful iteration.
    pub last_status_message: String,
    /// Error text of the most recent failed iteration.
    pub current_error: String,
    /// Whether `current_error` may be relayed.
    pub channel_enabled: bool,
}

impl PollState {
    pub fn new(now: i64) -> Self {
        Self {
            last_seen_timestamp: now,
            last_sent_message: String::new(),
            last_status_message: String::new(),
            current_error: String::new(),
            channel_enabled: true,
        }
    }

    /// Whether `status_message` differs from the previous iteration's. Only logged: the status
    /// message is sent every iteration regardless.
    pub fn is_new_status(&self, status_message: &str) -> bool {
        self.last_status_message != status_message
    }

    /// Whether the current error should be relayed: text changed since the last relay and the
    /// channel has not just failed.
    pub fn should_report(&self) -> bool {
        self.channel_enabled && self.current_error != self.last_sent_message
    }
}

/// How long [`run_bot`] keeps polling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Forever,
    Once,
}

/// The relay. Owns the API client, the notification channel and all loop state.
pub struct PollLoop {
    api: ApiClient,
    notifier: Notifier,
    interval: Duration,
    state: PollState,
}

impl PollLoop {
    /// Checks required config, then sends [`START_MESSAGE`]. Any failure here is fatal.
    #[instrument(skip(config, bot))]
    pub async fn start(config: &Config, bot: Arc<dyn Bot>) -> Result<Self, StartupError> {
        let missing = config.missing_tokens();
        if !missing.is_empty() {
            return Err(StartupError::MissingTokens(missing));
        }

        let api =
            ApiClient::from_config(config).map_err(|e| StartupError::Client(e.to_string()))?;
        let notifier = Notifier::new(bot, config.telegram_chat_id.clone());
        notifier
            .notify(START_MESSAGE)
            .await
            .map_err(StartupError::Channel)?;

        Ok(Self {
            api,
            notifier,
            interval: config.retry_interval(),
            state: PollState::new(now()),
        })
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PollState {
        &mut self.state
    }

    async fn poll_once(&mut self) -> Result<String, PollError> {
        let response = self.api.fetch(self.state.last_seen_timestamp).await?;
        let homeworks = extract(&response)?;
        let status_message = format_status(&homeworks[0])?;
        self.notifier.notify(&status_message).await?;
        self.state.last_seen_timestamp = current_date(&response).unwrap_or_else(now);
        Ok(status_message)
    }

    /// One iteration. Never fails: errors are logged and, when new, relayed to the chat.
    pub async fn tick(&mut self) {
        match self.poll_once().await {
            Ok(status_message) => {
                if !self.state.is_new_status(&status_message) {
                    debug!("No new statuses in the response");
                }
                self.state.last_status_message = status_message;
            }
            Err(e) => {
                let message = e.to_string();
                error!(error = %message, "Poll iteration failed");
                self.state.channel_enabled = e.channel_usable();
                self.state.current_error = message;
            }
        }

        if self.state.should_report() {
            self.state.last_sent_message = self.state.current_error.clone();
            if let Err(e) = self.notifier.notify(&self.state.current_error).await {
                error!(error = %e, "Failed to relay error to chat");
            }
        }
    }

    /// Polls until the process is killed.
    pub async fn run(mut self) {
        info!(
            interval_secs = self.interval.as_secs(),
            endpoint = %self.api.endpoint(),
            chat_id = %self.notifier.chat_id(),
            "Poll loop started"
        );
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }
}

/// Main entry: init logging, validate config, build the Telegram transport, start and run the loop.
/// A failed startup is logged as fatal and returns `Ok(())`.
#[instrument(skip(config))]
pub async fn run_bot(config: Config, mode: RunMode) -> Result<()> {
    let _log_guard = init_tracing(&config.log)?;
    config.validate()?;

    let mut telegram = TelegramBot::new(config.telegram_token.clone());
    if let Some(ref url) = config.telegram_api_url {
        telegram = telegram.with_api_url(url)?;
    }
    let bot: Arc<dyn Bot> = Arc::new(telegram);

    let mut poll = match PollLoop::start(&config, bot).await {
        Ok(poll) => poll,
        Err(e) => {
            error!(fatal = true, error = %e, "Startup failed");
            return Ok(());
        }
    };
    info!(message = START_MESSAGE, "Bot started");

    match mode {
        RunMode::Forever => poll.run().await,
        RunMode::Once => poll.tick().await,
    }
    Ok(())
}
