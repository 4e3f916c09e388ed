//! Tracing setup. Logs go to stderr, stdout carries command output.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "DEVCLI_LOG_FORMAT";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

pub fn init_tracing(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match log_format_from_env() {
        LogFormat::Json => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .json()
                .with_writer(std::io::stderr)
                .finish(),
        ),
        LogFormat::Text => Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .finish(),
        ),
    };

    // Already installed, e.g. by a test harness.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn log_format_from_env() -> LogFormat {
    parse_log_format(std::env::var(LOG_FORMAT_ENV).ok().as_deref())
}

fn parse_log_format(value: Option<&str>) -> LogFormat {
    match value.map(str::trim).map(str::to_lowercase).as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Text,
    }
}
