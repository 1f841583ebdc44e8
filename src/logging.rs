//! Logger setup for the binary

use log::LevelFilter;

/// Level used when `RUST_LOG` is unset
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Initialize `env_logger`; `RUST_LOG` overrides the default level
///
/// Calling this more than once is harmless.
pub fn init(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_level(verbose).as_str());
    // A logger may already be installed (tests, embedding); keep it
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
