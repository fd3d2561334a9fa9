///
/// Logging setup
///
/// Runtime logs go to stderr so they never interleave with program output
/// on stdout. `MINIPY_LOG` takes precedence over the config file filter.
///

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

pub const LOG_ENV: &str = "MINIPY_LOG";

fn filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. A subscriber installed earlier wins.
pub fn install(config: &LogConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(config))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
