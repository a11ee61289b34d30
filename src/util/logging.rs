//! Structured logging setup
//!
//! Both binaries reserve stdout for their functional output, so logs always go
//! to stderr with ANSI colors off. The default level is `warn`, which keeps a
//! normal run silent; raise it to see probe results and stream lifecycle.
//!
//! # Environment
//!
//! - `RESOURCE_PROBE_LOG_LEVEL` - trace, debug, info, warn, error (default: warn)
//! - `RESOURCE_PROBE_LOG_JSON` - emit JSON lines (true/false, default: false)
//! - `RUST_LOG` - standard filter directives, applied on top
//!
//! # Example
//!
//! ```no_run
//! use resource_probe::util::logging;
//!
//! logging::init_from_env();
//! tracing::debug!(path = "files/new.csv", "Probing");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

const LEVEL_ENV: &str = "RESOURCE_PROBE_LOG_LEVEL";
const JSON_ENV: &str = "RESOURCE_PROBE_LOG_JSON";

/// Configuration for logging initialization
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum log level to display
    pub level: Level,

    /// Use JSON output format
    pub use_json: bool,

    /// Include the module target (e.g., resource_probe::reader) in logs
    pub include_target: bool,

    /// Include file and line number information
    pub include_location: bool,

    /// Include thread ID and name in logs
    pub include_thread_ids: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_json: false,
            include_target: true,
            include_location: false,
            include_thread_ids: false,
        }
    }
}

impl LoggingConfig {
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Builds a configuration from level and JSON settings given as strings,
    /// falling back to defaults for anything missing or unparseable
    pub fn from_values(level: Option<&str>, json: Option<&str>) -> Self {
        let level = level.map(parse_level).unwrap_or(Level::WARN);
        let use_json = json
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self {
            level,
            use_json,
            ..Default::default()
        }
    }
}

/// Parses a log level from a string
///
/// Unknown values fall back to `WARN` with a note on stderr.
///
/// ```
/// use resource_probe::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("bogus"), Level::WARN);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}

/// Initializes the logging system; later calls are ignored
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = match format!("resource_probe={}", config.level).parse::<Directive>() {
            Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
            Err(_) => EnvFilter::from_default_env(),
        };

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(config.include_target)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_thread_ids(config.include_thread_ids)
            .with_thread_names(config.include_thread_ids);

        // try_init: an embedding application may already own the global subscriber
        if config.use_json {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer.json())
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(layer)
                .try_init();
        }
    });
}

/// Initializes logging from `RESOURCE_PROBE_LOG_LEVEL` and `RESOURCE_PROBE_LOG_JSON`
pub fn init_from_env() {
    let level = env::var(LEVEL_ENV).ok();
    let json = env::var(JSON_ENV).ok();
    init_logging(LoggingConfig::from_values(level.as_deref(), json.as_deref()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level("info"), Level::INFO);
        assert_eq!(parse_level("warn"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
    }

    #[test]
    fn test_parse_level_case_insensitive() {
        assert_eq!(parse_level("TRACE"), Level::TRACE);
        assert_eq!(parse_level("Debug"), Level::DEBUG);
        assert_eq!(parse_level(" info "), Level::INFO);
    }

    #[test]
    fn test_parse_level_invalid() {
        assert_eq!(parse_level("invalid"), Level::WARN);
        assert_eq!(parse_level(""), Level::WARN);
    }

    #[test]
    fn test_default_config_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, Level::WARN);
        assert!(!config.use_json);
        assert!(config.include_target);
        assert!(!config.include_location);
    }

    #[test]
    fn test_from_values() {
        let config = LoggingConfig::from_values(Some("debug"), Some("true"));
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.use_json);

        let config = LoggingConfig::from_values(None, Some("yes"));
        assert_eq!(config.level, Level::WARN);
        assert!(!config.use_json);
    }

    #[test]
    fn test_with_level() {
        let config = LoggingConfig::with_level(Level::TRACE);
        assert_eq!(config.level, Level::TRACE);
        assert!(!config.use_json);
    }
}
