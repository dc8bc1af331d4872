use hwbot_core::BotError;
use thiserror::Error;

/// Failure of one poll iteration. Rendered text is what gets logged and reported to the chat.
#[derive(Error, Debug)]
pub enum PollError {
    /// `cause` is the transport error with its whole source chain, e.g. `...: Connection refused`.
    #[error("API request to {endpoint} failed: {cause}")]
    Connection { endpoint: String, cause: String },

    #[error(
        "Request to endpoint {endpoint} with timestamp {timestamp}: server sent content-type {content_type}, \
         API status code {status}. Endpoint with url {url} is unavailable!"
    )]
    StatusCode {
        endpoint: String,
        timestamp: i64,
        content_type: String,
        status: u16,
        url: String,
    },

    #[error("Response does not contain key: '{0}'")]
    MissingKey(String),

    #[error("API response homeworks is not a list")]
    NotList,

    #[error("Homework list is empty!")]
    EmptyList,

    #[error("Undocumented homework status: status is empty")]
    NotStatus,

    #[error("Unrecognized homework status: {0:?}")]
    UnknownStatus(String),

    #[error("Program failure: {0}")]
    Decode(String),

    #[error(transparent)]
    Notify(#[from] BotError),
}

impl PollError {
    /// Whether this cycle's error may still be reported through the notification channel.
    /// False when the channel just failed or the failure was unexpected.
    pub fn channel_usable(&self) -> bool {
        !matches!(self, PollError::Notify(_) | PollError::Decode(_))
    }
}

/// Fatal failure before the poll loop starts.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(
        "Program stopped! Missing required environment variables: {}",
        .0.join(", ")
    )]
    MissingTokens(Vec<&'static str>),

    #[error("Program stopped! Failed to build API client: {0}")]
    Client(String),

    #[error("Program stopped! Notification channel unavailable: {0}")]
    Channel(#[source] BotError),
}
