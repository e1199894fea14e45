#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the thin command-line front-end for the `rmd5` binary. It
//! recognises `--string`/`-s`, `--tag`, `--verbose`/`-v`, `--quiet`/`-q`,
//! `--debug`, `--help` and `--version`, treats the remaining operands as files
//! (`-` for standard input), and prints one digest line per input.
//!
//! # Design
//!
//! [`run`] accepts an iterator of arguments together with handles for
//! standard output and error, so the whole front-end can be exercised from
//! tests without spawning a process. A [`clap`] command definition parses the
//! arguments. Standard input is read up front; every other input is read and
//! digested inside its own task on the rayon pool (when the `parallel` feature
//! is enabled), so a buffer lives only while its digest is computed. Lines are
//! written back in command-line order.
//!
//! # Invariants
//!
//! - `run` never panics; I/O failures surface as non-zero exit codes.
//! - A failed input does not stop the remaining inputs from being digested.
//! - Output follows operand order, with `--string` values ahead of files.
//!
//! # Errors
//!
//! Unreadable inputs produce a diagnostic on standard error and exit code
//! [`EXIT_READ_FAILURE`]; a failure to write the output exits with
//! [`EXIT_IO_FAILURE`], and argument errors exit with [`EXIT_USAGE`].
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["rmd5", "--string", "abc"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert_eq!(
//!     String::from_utf8(stdout).unwrap(),
//!     "900150983cd24fb0d6963f7d28e17f72  \"abc\"\n"
//! );
//! ```

mod arguments;
mod error;
mod input;
mod output;

use std::ffi::OsString;
use std::io::{self, Read, Write};

use clap::error::ErrorKind;
use logging::DebugFlag;
use md5_engine::{BLOCK_LEN, padded_len};

use arguments::{PROGRAM_NAME, ParsedArgs, parse_args};
use input::{Captured, Digested, InputSource, collect_sources};
use output::{LineStyle, write_line};

pub use error::{CliError, EXIT_IO_FAILURE, EXIT_READ_FAILURE, EXIT_SUCCESS, EXIT_USAGE};

/// Largest exit status the front-end reports.
const MAX_EXIT_CODE: i32 = 255;

/// Runs the front-end, reading standard input from the process.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    let stdin = io::stdin();
    let mut stdin = stdin.lock();
    run_with_stdin(arguments, &mut stdin, stdout, stderr)
}

/// Runs the front-end with an explicit standard input handle.
pub fn run_with_stdin<I, S, In, Out, Err>(
    arguments: I,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    In: Read,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdin, stdout, stderr),
        Err(CliError::Usage(error))
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            if write!(stdout, "{error}").is_err() {
                return EXIT_IO_FAILURE;
            }
            EXIT_SUCCESS
        }
        Err(CliError::Usage(error)) => {
            let _ = write!(stderr, "{error}");
            EXIT_USAGE
        }
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            error.exit_code()
        }
    }
}

fn execute<In, Out, Err>(
    parsed: ParsedArgs,
    stdin: &mut In,
    stdout: &mut Out,
    stderr: &mut Err,
) -> i32
where
    In: Read,
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        strings,
        files,
        tag,
        verbosity,
    } = parsed;

    logging::init_tracing(&verbosity);

    let style = if tag { LineStyle::Tag } else { LineStyle::Gnu };
    let sources = collect_sources(strings, files);
    let captured: Vec<Captured> = sources
        .iter()
        .map(|source| source.capture_stdin(stdin))
        .collect();
    let outcomes = digest_sources(&sources, captured);

    let mut status = EXIT_SUCCESS;
    for (source, outcome) in sources.iter().zip(outcomes) {
        let name = source.display_name();
        match outcome {
            Ok(Digested { bytes, digest }) => {
                tracing::info!(
                    target: DebugFlag::Digest.target(),
                    input = %name.display(),
                    bytes,
                    blocks = padded_len(bytes) / BLOCK_LEN,
                    digest = %md5_engine::to_hex(&digest),
                    "digested input"
                );
                if let Err(error) = write_line(stdout, style, &name, &digest) {
                    let _ = writeln!(stderr, "{PROGRAM_NAME}: write error: {error}");
                    return EXIT_IO_FAILURE;
                }
            }
            Err(error) => {
                tracing::debug!(
                    target: DebugFlag::Input.target(),
                    input = %name.display(),
                    "skipping unreadable input"
                );
                let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
                status = status.max(error.exit_code());
            }
        }
    }

    if stdout.flush().is_err() {
        return EXIT_IO_FAILURE;
    }
    status
}

#[cfg(feature = "parallel")]
fn digest_sources(
    sources: &[InputSource],
    captured: Vec<Captured>,
) -> Vec<Result<Digested, CliError>> {
    use rayon::prelude::*;

    tracing::debug!(
        target: DebugFlag::Batch.target(),
        inputs = sources.len(),
        threads = rayon::current_num_threads(),
        "dispatching batch"
    );
    sources
        .par_iter()
        .zip(captured)
        .map(|(source, captured)| source.digest(captured))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn digest_sources(
    sources: &[InputSource],
    captured: Vec<Captured>,
) -> Vec<Result<Digested, CliError>> {
    tracing::debug!(
        target: DebugFlag::Batch.target(),
        inputs = sources.len(),
        "digesting sequentially"
    );
    sources
        .iter()
        .zip(captured)
        .map(|(source, captured)| source.digest(captured))
        .collect()
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    std::process::ExitCode::from(clamp_status(status))
}

fn clamp_status(status: i32) -> u8 {
    status.clamp(0, MAX_EXIT_CODE) as u8
}

#[cfg(test)]
mod tests;
