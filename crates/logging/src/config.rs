//! crates/logging/src/config.rs
//! Verbosity configuration and its translation into tracing filter directives.

use super::levels::{DebugFlag, DebugLevels};

/// Combined verbosity configuration.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Suppress everything below errors.
    pub quiet: bool,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (0-3).
    /// Levels above 3 behave like 3.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        match level {
            0 => {}
            1 => {
                config.debug.input = 1;
                config.debug.digest = 1;
            }
            2 => {
                config.debug.input = 2;
                config.debug.digest = 2;
                config.debug.batch = 1;
            }
            _ => {
                config.debug.input = 3;
                config.debug.digest = 3;
                config.debug.batch = 3;
            }
        }

        config
    }

    /// Configuration that only reports errors.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            debug: DebugLevels::default(),
        }
    }

    /// Apply a single debug flag token (e.g., "input2", "digest").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;
        let flag =
            DebugFlag::from_name(name).ok_or_else(|| format!("unknown debug flag: {name}"))?;
        self.debug.set(flag, level);
        Ok(())
    }

    /// Render the configuration as an `EnvFilter` directive string.
    ///
    /// The base directive is `warn` (or `error` when quiet); each enabled flag
    /// adds a per-target directive.
    pub fn filter_directives(&self) -> String {
        let mut directives = String::from(if self.quiet { "error" } else { "warn" });
        if self.quiet {
            return directives;
        }

        for flag in DebugFlag::ALL {
            if let Some(level) = level_name(self.debug.get(flag)) {
                directives.push(',');
                directives.push_str(flag.target());
                directives.push('=');
                directives.push_str(level);
            }
        }
        directives
    }
}

fn level_name(level: u8) -> Option<&'static str> {
    match level {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse a flag token like "input2" into ("input", 2) or "digest" into ("digest", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    match token.find(|c: char| c.is_ascii_digit()) {
        Some(0) => Err(format!("missing flag name in: {token}")),
        Some(pos) => {
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((&token[..pos], level))
        }
        None => Ok((token, 1)),
    }
}
