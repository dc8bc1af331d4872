//! Relay config: review API access, Telegram destination, polling interval, logging. Loaded from env.

use anyhow::Result;
use hwbot_core::LogConfig;
use std::env;
use std::path::PathBuf;
use std::time::Duration;


pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// PRACTICUM_TOKEN
    pub practicum_token: String,
    /// TELEGRAM_TOKEN
    pub telegram_token: String,
    /// TELEGRAM_CHAT_ID (numeric id or @channel)
    pub telegram_chat_id: String,
    /// PRACTICUM_ENDPOINT
    pub endpoint: String,
    /// RETRY_TIME_SECS: sleep between poll iterations
    pub retry_time_secs: u64,
    /// HTTP_TIMEOUT_SECS: per-request timeout for the review API
    pub http_timeout_secs: u64,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_DIR, LOG_FILE, LOG_MAX_BYTES, LOG_MAX_FILES
    pub log: LogConfig,
}

fn env_or_empty(key: &str) -> String {
    env::var(key).unwrap_or_default().trim().to_string()
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load from environment variables. Required values default to empty; see [`Config::missing_tokens`].
    pub fn load() -> Result<Self> {
        let defaults = LogConfig::default();
        let log = LogConfig {
            dir: env::var("LOG_DIR").map(PathBuf::from).unwrap_or(defaults.dir),
            file_name: env::var("LOG_FILE").unwrap_or(defaults.file_name),
            max_bytes: env_parse("LOG_MAX_BYTES", defaults.max_bytes),
            max_files: env_parse("LOG_MAX_FILES", defaults.max_files),
        };

        Ok(Self {
            practicum_token: env_or_empty("PRACTICUM_TOKEN"),
            telegram_token: env_or_empty("TELEGRAM_TOKEN"),
            telegram_chat_id: env_or_empty("TELEGRAM_CHAT_ID"),
            endpoint: env::var("PRACTICUM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            retry_time_secs: env_parse("RETRY_TIME_SECS", DEFAULT_RETRY_TIME_SECS),
            http_timeout_secs: env_parse("HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS),
            telegram_api_url: env::var("TELEGRAM_API_URL")
                .or_else(|_| env::var("TELOXIDE_API_URL"))
                .ok(),
            log,
        })
    }

    /// Names of required variables that are empty or unset.
    pub fn missing_tokens(&self) -> Vec<&'static str> {
        [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Validate config (URLs must parse, interval and timeout must be positive).
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.endpoint).is_err() {
            anyhow::bail!("PRACTICUM_ENDPOINT is not a valid URL: {}", self.endpoint);
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.retry_time_secs == 0 {
            anyhow::bail!("RETRY_TIME_SECS must be greater than zero");
        }
        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }

    pub fn retry_interval(&self) -> Duration {
        Duration::from_secs(self.retry_time_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
