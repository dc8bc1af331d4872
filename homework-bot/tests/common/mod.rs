//! Shared helpers for homework-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Once;

use homework_bot::{Config, LogConfig};
use tracing_subscriber::{fmt, EnvFilter};

pub const PRACTICUM_TOKEN: &str = "practicum-test-token";
pub const CHAT_ID: &str = "123456789";
pub const STATUS_PATH: &str = "/api/user_api/homework_statuses/";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once per test process; `RUST_LOG` controls the level.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("debug,homework_bot=debug"));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_test_writer()
            .try_init();
    });
}

/// Config pointing the API client at `server_url` (a mockito server); never read from env.
pub fn test_config(server_url: &str) -> Config {
    Config {
        practicum_token: PRACTICUM_TOKEN.to_string(),
        telegram_token: "telegram-test-token".to_string(),
        telegram_chat_id: CHAT_ID.to_string(),
        endpoint: format!("{}{}", server_url, STATUS_PATH),
        retry_time_secs: 1,
        http_timeout_secs: 5,
        telegram_api_url: None,
        log: LogConfig::default(),
    }
}
