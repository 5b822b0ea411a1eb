//! crates/cli/src/args.rs
//! Argument parsing and verbosity resolution for `vecho`.

use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use verbose::Level;

use crate::error::CliError;

/// Program name used in help, version and diagnostics.
pub const PROGRAM_NAME: &str = "vecho";

/// Parsed command produced by [`parse_args`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParsedArgs {
    /// `--help` was requested.
    pub show_help: bool,
    /// `--version` was requested.
    pub show_version: bool,
    /// Threshold resolved from `-v` and `--log-level`.
    pub level: Level,
    /// Tier the words are emitted at.
    pub tier: Level,
    /// Tag output with its tier.
    pub prefix: bool,
    /// Use the formatted shape instead of the line shape.
    pub no_newline: bool,
    /// Words to print.
    pub words: Vec<String>,
}

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .about("Print words through a leveled writer.")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set verbosity by name or number; overrides -v.")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("tier")
                .long("tier")
                .short('t')
                .value_name("TIER")
                .help("Emit the words at TIER: verbose, debug or trace.")
                .value_parser(value_parser!(String))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("prefix")
                .long("prefix")
                .short('p')
                .help("Tag output with its bracketed tier name.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-newline")
                .long("no-newline")
                .short('n')
                .help("Do not append a trailing newline.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("words")
                .value_name("WORD")
                .num_args(0..)
                .value_parser(value_parser!(String))
                .action(ArgAction::Append),
        )
}

/// Parses `arguments` (program name first) into [`ParsedArgs`].
pub fn parse_args<I, T>(arguments: I) -> Result<ParsedArgs, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = clap_command()
        .try_get_matches_from(arguments)
        .map_err(|error| CliError::from_clap(&error))?;

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        level: resolve_level(&matches)?,
        tier: resolve_tier(&matches)?,
        prefix: matches.get_flag("prefix"),
        no_newline: matches.get_flag("no-newline"),
        words: matches
            .get_many::<String>("words")
            .map(|words| words.cloned().collect())
            .unwrap_or_default(),
    })
}

fn resolve_level(matches: &ArgMatches) -> Result<Level, CliError> {
    if let Some(value) = matches.get_one::<String>("log-level") {
        return value
            .parse()
            .map_err(|error: verbose::ParseLevelError| CliError::Usage(error.to_string()));
    }
    Ok(Level::from_verbose_count(matches.get_count("verbose")))
}

fn resolve_tier(matches: &ArgMatches) -> Result<Level, CliError> {
    let Some(value) = matches.get_one::<String>("tier") else {
        return Ok(Level::Verbose);
    };

    let tier = Level::EMISSION_TIERS
        .into_iter()
        .find(|tier| value.trim().eq_ignore_ascii_case(tier.name()));
    tier.ok_or_else(|| {
        CliError::Usage(format!(
            "invalid tier '{value}'; expected verbose, debug or trace"
        ))
    })
}

/// Renders the help text.
pub(crate) fn render_help() -> String {
    clap_command().render_help().to_string()
}

/// Renders the version banner.
pub(crate) fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}
