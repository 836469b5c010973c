//! Logger setup driven by the resolved configuration.
use env_logger::Env;

use crate::domain::LogLevel;

/// Install `env_logger` with `level` as the default filter.
///
/// `RUST_LOG` still takes precedence when set. Calling this again after a
/// logger is installed does nothing.
pub fn init_logger(level: LogLevel) {
    let env = Env::default().default_filter_or(level.as_str());
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
