//! Error type for the command-line front-end.

use std::io;
use std::path::PathBuf;

/// Exit status when every input was digested.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status when at least one input could not be read.
pub const EXIT_READ_FAILURE: i32 = 1;

/// Exit status when writing the digest lines fails. Any I/O failure, read or
/// write, exits with the same status.
pub const EXIT_IO_FAILURE: i32 = EXIT_READ_FAILURE;

/// Exit status for invalid command-line usage.
pub const EXIT_USAGE: i32 = 2;

/// Errors surfaced by the front-end.
///
/// The digest engine itself is infallible; everything here comes from reading
/// inputs or from the command line.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A file operand could not be read.
    #[error("{}: {source}", path.display())]
    Read {
        /// The operand that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read.
    #[error("-: {0}")]
    Stdin(#[source] io::Error),

    /// A `--debug` token named an unknown flag or carried a bad level.
    #[error("invalid --debug value: {0}")]
    DebugFlag(String),

    /// Argument parsing failed, or help/version output was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),
}

impl CliError {
    /// Creates a read error with path context.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Exit status associated with this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Stdin(_) => EXIT_READ_FAILURE,
            Self::DebugFlag(_) | Self::Usage(_) => EXIT_USAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let error = CliError::read(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(error.to_string(), "missing.txt: No such file or directory");
        assert_eq!(error.exit_code(), EXIT_READ_FAILURE);
    }

    #[test]
    fn debug_flag_error_is_a_usage_error() {
        let error = CliError::DebugFlag("unknown debug flag: nope".to_string());
        assert_eq!(error.exit_code(), EXIT_USAGE);
        assert!(error.to_string().contains("nope"));
    }
}
