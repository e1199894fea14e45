use std::ffi::OsString;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use logging::VerbosityConfig;

use crate::error::CliError;

pub(crate) const PROGRAM_NAME: &str = "rmd5";

/// Arguments recognised by the front-end.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ParsedArgs {
    pub(crate) strings: Vec<String>,
    pub(crate) files: Vec<OsString>,
    pub(crate) tag: bool,
    pub(crate) verbosity: VerbosityConfig,
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print RFC 1321 MD5 digests of files, standard input, or strings.")
        .after_help("With no FILE and no --string, or when FILE is -, read standard input.")
        .arg(
            Arg::new("string")
                .long("string")
                .short('s')
                .value_name("TEXT")
                .help("Digest TEXT, encoded as UTF-8.")
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .help("Emit BSD-style lines: MD5 (NAME) = DIGEST.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic output; repeat for more detail.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only report errors.")
                .conflicts_with_all(["verbose", "debug"])
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .value_name("FLAGS")
                .help("Enable debug categories: input, digest, batch (optional level suffix).")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("files")
                .value_name("FILE")
                .num_args(0..)
                .value_parser(OsStringValueParser::new())
                .action(ArgAction::Append),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let tag = matches.get_flag("tag");
    let quiet = matches.get_flag("quiet");
    let verbose = matches.get_count("verbose");

    let strings = matches
        .remove_many::<String>("string")
        .map(Iterator::collect)
        .unwrap_or_default();
    let files = matches
        .remove_many::<OsString>("files")
        .map(Iterator::collect)
        .unwrap_or_default();
    let debug_tokens: Vec<String> = matches
        .remove_many::<String>("debug")
        .map(Iterator::collect)
        .unwrap_or_default();

    let mut verbosity = if quiet {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(verbose)
    };
    for token in &debug_tokens {
        verbosity
            .apply_debug_flag(token)
            .map_err(CliError::DebugFlag)?;
    }

    Ok(ParsedArgs {
        strings,
        files,
        tag,
        verbosity,
    })
}
