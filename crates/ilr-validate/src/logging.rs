//! Logging setup on `tracing` and `tracing-subscriber`.
//!
//! Validation code only emits events. The process embedding the validator
//! calls [`init_logging`] once to decide where they go; events from other
//! crates are held at `warn` unless `RUST_LOG` says otherwise.
//!
//! | level   | events                                  |
//! |---------|-----------------------------------------|
//! | `warn`  | suspicious reference data               |
//! | `info`  | submission totals                       |
//! | `debug` | per-learner progress, config loading    |
//! | `trace` | per-rule invocations, each error raised |
//!
//! Learner references identify people. Unless [`LogConfig::log_data`] is set
//! they are written as [`REDACTED_VALUE`].
//!
//! ```no_run
//! use ilr_validate::logging::{LogConfig, LogFormat, init_logging};
//! use tracing::Level;
//!
//! let config = LogConfig::at(Level::DEBUG).with_format(LogFormat::Json);
//! init_logging(&config).expect("no other subscriber installed");
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, Layer, Registry};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder logged in place of learner identifiers.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Crates whose events follow the configured level.
const VALIDATION_CRATES: [&str; 3] = ["ilr_model", "ilr_core", "ilr_validate"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Relaxed)
}

/// The value itself when learner data may be logged, otherwise a placeholder.
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable events.
    #[default]
    Pretty,
    /// One line per event.
    Compact,
    /// One JSON object per event, for log shippers.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for the validation crates.
    pub level: Level,
    pub format: LogFormat,
    pub with_timestamps: bool,
    /// Include the module path of each event.
    pub with_target: bool,
    /// Emit an event as each learner span closes (JSON only).
    pub with_spans: bool,
    /// Allow learner identifiers in log output.
    pub log_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::at(Level::INFO)
    }
}

impl LogConfig {
    pub fn at(level: Level) -> Self {
        Self {
            level,
            format: LogFormat::default(),
            with_timestamps: true,
            with_target: false,
            with_spans: false,
            log_data: false,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, enable: bool) -> Self {
        self.with_timestamps = enable;
        self
    }

    #[must_use]
    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    #[must_use]
    pub fn with_spans(mut self, enable: bool) -> Self {
        self.with_spans = enable;
        self
    }

    #[must_use]
    pub fn with_log_data(mut self, enable: bool) -> Self {
        self.log_data = enable;
        self
    }
}

/// Install a global subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Install a global subscriber writing to `writer`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(event_layer(config, writer))
        .with(build_env_filter(config.level))
        .try_init()?;
    LOG_DATA_ENABLED.store(config.log_data, Ordering::Relaxed);
    Ok(())
}

fn event_layer<W>(config: &LogConfig, writer: W) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(config.with_target);

    match (config.format, config.with_timestamps) {
        (LogFormat::Json, _) => {
            let spans = if config.with_spans {
                FmtSpan::CLOSE
            } else {
                FmtSpan::NONE
            };
            layer.json().with_span_events(spans).boxed()
        }
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
    }
}

/// `RUST_LOG` wins when set; otherwise validation crates log at `level` and
/// everything else at warn.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

fn default_directives(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    VALIDATION_CRATES
        .iter()
        .fold(String::from("warn"), |directives, target| {
            format!("{directives},{target}={level}")
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_scope_level_to_validation_crates() {
        assert_eq!(
            default_directives(Level::DEBUG),
            "warn,ilr_model=debug,ilr_core=debug,ilr_validate=debug"
        );
    }

    #[test]
    fn default_config_logs_at_info_without_learner_data() {
        let config = LogConfig::default();
        assert_eq!(config.level, Level::INFO);
        assert!(!config.log_data);
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn learner_data_is_redacted_by_default() {
        assert_eq!(redact_value("LRN0001"), REDACTED_VALUE);
    }
}
