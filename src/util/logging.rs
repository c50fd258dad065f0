//! Structured logging setup for syskit
//!
//! Every filesystem operation emits a `tracing` event: the real adapters log
//! at `debug`, the in-memory fakes at `trace`. This module wires those events
//! to a `tracing-subscriber` output for binaries and test harnesses that do
//! not install their own subscriber.
//!
//! # Example
//!
//! ```no_run
//! use syskit::util::logging;
//!
//! // With environment: SYSKIT_LOG_LEVEL=debug
//! logging::init_from_env();
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

static INIT: Once = Once::new();

pub const LOG_LEVEL_ENV: &str = "SYSKIT_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "SYSKIT_LOG_JSON";

const TARGET: &str = "syskit";

/// How syskit's own events are filtered and printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Level applied to the `syskit` target unless `RUST_LOG` names it
    pub level: Level,

    /// One JSON object per event instead of the human-readable format
    pub json: bool,

    /// Attach source file and line to each event
    pub with_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::with_level(Level::INFO)
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            json: false,
            with_location: false,
        }
    }

    /// Debug level, which shows every call made through `RealFileSystem`.
    pub fn development() -> Self {
        Self {
            with_location: true,
            ..Self::with_level(Level::DEBUG)
        }
    }

    /// Reads `SYSKIT_LOG_LEVEL` and `SYSKIT_LOG_JSON`. Unset or unparseable
    /// values keep the defaults.
    pub fn from_env() -> Self {
        let level = env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| parse_level(&v))
            .unwrap_or(Level::INFO);

        let json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            json,
            ..Self::with_level(level)
        }
    }

    /// Filter directives for this config layered under `rust_log`.
    ///
    /// The `syskit=<level>` default is appended only when `rust_log` does
    /// not already carry a directive for the `syskit` target.
    pub fn directives(&self, rust_log: Option<&str>) -> String {
        let default = format!("{}={}", TARGET, self.level.to_string().to_lowercase());
        match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
            None => default,
            Some(spec) if names_target(spec) => spec.to_string(),
            Some(spec) => format!("{},{}", spec, default),
        }
    }
}

fn names_target(spec: &str) -> bool {
    spec.split(',').any(|directive| {
        let target = directive.split(|c: char| c == '=' || c == '[').next().unwrap_or("").trim();
        target == TARGET || target.starts_with("syskit::")
    })
}

/// Parses `trace`, `debug`, `info`, `warn` or `error` in any case.
///
/// ```
/// use syskit::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("Debug"), Some(Level::DEBUG));
/// assert_eq!(parse_level("loud"), None);
/// ```
pub fn parse_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

/// Installs the global subscriber. Only the first call has any effect, and
/// a subscriber installed by someone else is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
        let directives = config.directives(rust_log.as_deref());
        let filter = EnvFilter::try_new(&directives)
            .unwrap_or_else(|_| EnvFilter::new(config.directives(None)));

        let output = fmt::layer()
            .with_file(config.with_location)
            .with_line_number(config.with_location);
        let output: Box<dyn Layer<Registry> + Send + Sync> = if config.json {
            output.json().boxed()
        } else {
            output.boxed()
        };

        if let Err(e) = tracing_subscriber::registry()
            .with(output)
            .with(filter)
            .try_init()
        {
            tracing::debug!(error = %e, "keeping existing subscriber");
        }
    });
}

pub fn init_default() {
    init_logging(LoggingConfig::default());
}

pub fn init_from_env() {
    init_logging(LoggingConfig::from_env());
}
