//! Logging initialization: `YYYY-MM-DD HH:MM:SS - LEVEL message key=value ...` to console and a size-rotated file.

use std::io;
use std::path::PathBuf;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the log file and its rotated backups.
    pub dir: PathBuf,
    /// Active log file name; backups get `.1`, `.2`, ... suffixes.
    pub file_name: String,
    /// Size at which the active file is rotated.
    pub max_bytes: u64,
    /// Number of rotated backups kept on disk.
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_name: "homework-bot.log".to_string(),
            max_bytes: 50_000_000,
            max_files: 5,
        }
    }
}

/// Local time followed by ` -` so lines read `time - LEVEL message`.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} -", t)
    }
}

/// Builds the rotating file appender: rolls over at `max_bytes`, keeps `max_files` backups.
pub fn rolling_appender(config: &LogConfig) -> anyhow::Result<BasicRollingFileAppender> {
    std::fs::create_dir_all(&config.dir)?;
    let appender = BasicRollingFileAppender::new(
        config.dir.join(&config.file_name),
        RollingConditionBasic::new().max_size(config.max_bytes.max(1)),
        config.max_files.max(1),
    )?;
    Ok(appender)
}

/// Initializes the global tracing subscriber.
///
/// Teed to stdout and the rotating log file. No ANSI codes so the log file is plain text.
/// Log level from `RUST_LOG` (e.g. `info`, `debug`); default `info`. Load `.env` before calling.
/// The returned guard flushes the file writer on drop; hold it for the life of the process.
pub fn init_tracing(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let (file, guard) = tracing_appender::non_blocking(rolling_appender(config)?);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let writer = io::stdout.and(file);

    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(false)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(guard)
}
