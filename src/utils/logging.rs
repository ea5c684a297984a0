//! Logger bootstrap.
//!
//! Everything logs through the `log` facade. `RUST_LOG` takes precedence
//! over the filter coming from the configuration file.

use env_logger::{Builder, Env};

/// Filter used when neither `RUST_LOG` nor the config provide one.
pub const DEFAULT_FILTER: &str = "warn";

pub fn init(filter: &str) {
    let filter = if filter.trim().is_empty() {
        DEFAULT_FILTER
    } else {
        filter
    };

    let env = Env::default().default_filter_or(filter);

    // A second init (tests, relaunch) keeps the first logger.
    if Builder::from_env(env)
        .format_timestamp_secs()
        .try_init()
        .is_err()
    {
        log::debug!("Logger already initialized");
    }
}
