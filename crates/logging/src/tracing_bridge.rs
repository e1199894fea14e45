//! crates/logging/src/tracing_bridge.rs
//! Installation of the process-wide tracing subscriber.
//!
//! Events are written to standard error by a `fmt` layer. Filtering comes from
//! the `RMD5_LOG` environment variable when it holds a valid directive, and
//! from the [`VerbosityConfig`] otherwise.

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::config::VerbosityConfig;

/// Environment variable holding an `EnvFilter` directive that overrides the
/// command-line verbosity.
pub const LOG_ENV_VAR: &str = "RMD5_LOG";

/// Build the filter for `config`, honouring [`LOG_ENV_VAR`] when set.
pub fn build_filter(config: &VerbosityConfig) -> EnvFilter {
    filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref(), config)
}

fn filter_from(env_directive: Option<&str>, config: &VerbosityConfig) -> EnvFilter {
    env_directive
        .map(str::trim)
        .filter(|directive| !directive.is_empty())
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(config.filter_directives()))
}

/// Initialize tracing for the process.
///
/// Returns `false` when a global subscriber was already installed, which
/// happens when the front-end runs more than once in the same process.
///
/// ```rust,ignore
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(&VerbosityConfig::from_verbose_level(1));
/// tracing::info!(target: "rmd5::input", path = "notes.txt", "reading file");
/// ```
pub fn init_tracing(config: &VerbosityConfig) -> bool {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(io::stderr().is_terminal())
        .without_time();

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .is_ok()
}
