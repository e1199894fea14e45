#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` maps the `rmd5` verbosity switches onto the [`tracing`]
//! ecosystem. Callers emit events with the standard macros under the targets
//! named by [`DebugFlag::target`]; [`init_tracing`] installs a subscriber that
//! filters those targets according to a [`VerbosityConfig`].
//!
//! # Design
//!
//! - [`VerbosityConfig::from_verbose_level`] turns a `-v` count into per-flag
//!   levels, and [`VerbosityConfig::apply_debug_flag`] refines individual
//!   flags from `--debug=FLAG[LEVEL]` tokens.
//! - [`VerbosityConfig::filter_directives`] renders the configuration as an
//!   `EnvFilter` directive; the `RMD5_LOG` variable replaces it wholesale.
//!
//! # Examples
//!
//! ```
//! use logging::VerbosityConfig;
//!
//! let mut config = VerbosityConfig::from_verbose_level(1);
//! config.apply_debug_flag("batch2").unwrap();
//! assert!(config.filter_directives().contains("rmd5::batch=debug"));
//! ```

mod config;
mod levels;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels};
pub use tracing_bridge::{LOG_ENV_VAR, build_filter, init_tracing};
