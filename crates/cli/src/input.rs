//! Resolution of command-line operands into byte buffers.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use logging::DebugFlag;
use md5_engine::Digest;

use crate::error::CliError;

/// One thing to digest, in command-line order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum InputSource {
    /// Literal text from `--string`.
    Text(String),
    /// A file operand.
    File(PathBuf),
    /// Standard input, named `-`.
    Stdin,
}

impl InputSource {
    /// Classifies a file operand; `-` denotes standard input.
    pub(crate) fn from_operand(operand: OsString) -> Self {
        if operand.as_os_str() == OsStr::new("-") {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(operand))
        }
    }

    /// Name printed next to the digest, with file names kept byte for byte.
    pub(crate) fn display_name(&self) -> OsString {
        match self {
            Self::Text(text) => format!("\"{text}\"").into(),
            Self::File(path) => path.clone().into_os_string(),
            Self::Stdin => OsString::from("-"),
        }
    }

    /// Reads the bytes to digest.
    pub(crate) fn read<R: Read>(&self, stdin: &mut R) -> Result<Vec<u8>, CliError> {
        let data = match self {
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::File(path) => fs::read(path).map_err(|e| CliError::read(path, e))?,
            Self::Stdin => {
                let mut data = Vec::new();
                stdin.read_to_end(&mut data).map_err(CliError::Stdin)?;
                data
            }
        };

        let name = self.display_name();
        tracing::debug!(
            target: DebugFlag::Input.target(),
            input = %name.display(),
            bytes = data.len(),
            "read input"
        );
        Ok(data)
    }

    /// Reads standard input for `-`. Other sources yield `None` and are read
    /// later by [`InputSource::digest`], on whichever thread digests them.
    pub(crate) fn capture_stdin<R: Read>(&self, stdin: &mut R) -> Captured {
        matches!(self, Self::Stdin).then(|| self.read(stdin))
    }

    /// Reads and digests this source, releasing its buffer before returning.
    pub(crate) fn digest(&self, captured: Captured) -> Result<Digested, CliError> {
        let data = match captured {
            Some(outcome) => outcome?,
            None => self.read(&mut io::empty())?,
        };
        Ok(Digested {
            bytes: data.len(),
            digest: md5_engine::digest(&data),
        })
    }
}

/// Standard input contents read ahead of the digest pass.
pub(crate) type Captured = Option<Result<Vec<u8>, CliError>>;

/// Digest of one input together with its length in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Digested {
    pub(crate) bytes: usize,
    pub(crate) digest: Digest,
}

/// Orders the sources: strings first, then file operands, falling back to
/// standard input when neither was given.
pub(crate) fn collect_sources(strings: Vec<String>, files: Vec<OsString>) -> Vec<InputSource> {
    if strings.is_empty() && files.is_empty() {
        return vec![InputSource::Stdin];
    }

    strings
        .into_iter()
        .map(InputSource::Text)
        .chain(files.into_iter().map(InputSource::from_operand))
        .collect()
}
