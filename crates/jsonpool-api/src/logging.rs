//! Logging configuration for jsonpool
//!
//! Built on the `tracing` framework. The store emits `debug!` for
//! lifecycle events (pool initialized, database saved) and `warn!` for
//! rejected mutations and failed saves; initializing a subscriber here
//! makes them visible.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output destination
#[derive(Debug, Clone)]
pub enum LogOutput {
    /// Output to stdout
    Stdout,
    /// Output to a daily-rotated file
    File(std::path::PathBuf),
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level filter
    pub level: String,
    /// Output destination
    pub output: LogOutput,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: LogOutput::Stdout,
        }
    }
}

impl LogConfig {
    /// Config with info level and stdout output
    pub fn info() -> Self {
        Self::default()
    }

    /// Config with debug level, showing store lifecycle events
    pub fn debug() -> Self {
        Self {
            level: "debug".to_string(),
            ..Default::default()
        }
    }

    /// Config matching a database's `verbose` option: debug level when
    /// verbose, warnings only otherwise
    pub fn from_verbose(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "warn" }.to_string(),
            ..Default::default()
        }
    }

    /// Set log output to a daily-rotated file
    pub fn with_file<P: Into<std::path::PathBuf>>(mut self, path: P) -> Self {
        self.output = LogOutput::File(path.into());
        self
    }

    /// Set the log level filter
    pub fn with_level<S: Into<String>>(mut self, level: S) -> Self {
        self.level = level.into();
        self
    }

    /// Initialize global logging with this configuration.
    ///
    /// Returns a guard that must be kept alive while logging to a file;
    /// dropping it shuts the logging worker thread down.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use jsonpool::logging::LogConfig;
    ///
    /// let _guard = LogConfig::debug().init();
    /// ```
    pub fn init(self) -> Option<WorkerGuard> {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        match self.output {
            LogOutput::Stdout => {
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().compact())
                    .init();
                None
            }
            LogOutput::File(path) => {
                let file_appender = tracing_appender::rolling::daily(
                    path.parent().unwrap_or_else(|| std::path::Path::new(".")),
                    path.file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("jsonpool.log"),
                );
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(non_blocking).compact())
                    .init();
                Some(guard)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert!(matches!(config.output, LogOutput::Stdout));
    }

    #[test]
    fn test_verbose_mapping() {
        assert_eq!(LogConfig::from_verbose(true).level, "debug");
        assert_eq!(LogConfig::from_verbose(false).level, "warn");
    }

    #[test]
    fn test_log_config_builders() {
        let config = LogConfig::debug().with_file("/tmp/jsonpool.log");
        assert_eq!(config.level, "debug");
        assert!(matches!(config.output, LogOutput::File(_)));
    }
}
