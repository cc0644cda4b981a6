//! Command-line front end for the line sorter.
//!
//! Sorts lines from one file or stdin under a single comparison mode, with
//! optional column selection, reverse order, deduplication and a check mode.

use std::process;

use clap::{Arg, ArgAction, Command};

use lsort::{
    config::{SortConfig, SortConfigBuilder, SortMode},
    error::{SortError, SortResult},
    sort,
};

fn main() {
    match run() {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("lsort: {e}");
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    sort(&config)
}

fn build_cli() -> Command {
    Command::new("lsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("lsort [OPTION]... [FILE]")
        .about("Sort lines of text")
        .long_about(
            "Sort lines from FILE (or stdin when FILE is '-' or absent) and write the \
             result to stdout.\n\nExactly one comparison mode is active per run: the \
             default lexicographic order, or one of -n, -h, -M.",
        )
        .disable_help_flag(true) // -h is human-numeric-sort
        .arg(
            Arg::new("file")
                .help("Input file to sort (use '-' or omit for stdin)")
                .num_args(0..)
                .value_name("FILE"),
        )
        // Sort modes (mutually exclusive)
        .arg(
            Arg::new("numeric-sort")
                .short('n')
                .long("numeric-sort")
                .help("Compare according to string numerical value")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("human-numeric-sort")
                .short('h')
                .long("human-numeric-sort")
                .help("Compare human readable numbers (e.g., 2K 1G)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("month-sort")
                .short('M')
                .long("month-sort")
                .help("Compare by three-letter month names")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Sort according to WORD: human-numeric -h, month -M, numeric -n")
                .value_name("WORD"),
        )
        // Sort modifiers
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .help("Sort by column N (1-based, default whole line)")
                .value_name("N")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("field-separator")
                .short('t')
                .long("field-separator")
                .help("Use SEP instead of TAB for column extraction")
                .value_name("SEP"),
        )
        .arg(
            Arg::new("reverse")
                .short('r')
                .long("reverse")
                .help("Reverse the result of comparisons")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("unique")
                .short('u')
                .long("unique")
                .help("Output only the first of an equal run")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ignore-trailing-blanks")
                .short('b')
                .long("ignore-trailing-blanks")
                .help("Strip trailing blanks from the sort key")
                .action(ArgAction::SetTrue),
        )
        // Operation modes
        .arg(
            Arg::new("check")
                .short('c')
                .long("check")
                .help("Check for sorted input; do not sort")
                .action(ArgAction::SetTrue),
        )
        // I/O options
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        // Explicit help since the automatic -h is taken
        .arg(
            Arg::new("help")
                .long("help")
                .help("Display this help and exit")
                .action(ArgAction::Help),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new().mode(resolve_mode(matches)?);

    let mut files = matches
        .get_many::<String>("file")
        .unwrap_or_default()
        .cloned();
    if let Some(file) = files.next() {
        builder = builder.input(file);
    }
    if let Some(extra) = files.next() {
        return Err(SortError::extra_operand(&extra));
    }

    if let Some(column) = matches.get_one::<usize>("key") {
        builder = builder.column(*column);
    }
    if let Some(sep) = matches.get_one::<String>("field-separator") {
        let mut chars = sep.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => builder = builder.field_separator(c),
            _ => return Err(SortError::invalid_field_separator(sep)),
        }
    }
    if matches.get_flag("reverse") {
        builder = builder.reverse();
    }
    if matches.get_flag("unique") {
        builder = builder.unique();
    }
    if matches.get_flag("ignore-trailing-blanks") {
        builder = builder.ignore_trailing_blanks();
    }
    if matches.get_flag("check") {
        builder = builder.check();
    }
    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output(output.clone());
    }

    builder.build()
}

/// Determine the comparison mode; at most one mode selector may be given.
fn resolve_mode(matches: &clap::ArgMatches) -> SortResult<SortMode> {
    let mut modes = Vec::new();
    if matches.get_flag("numeric-sort") {
        modes.push(SortMode::Numeric);
    }
    if matches.get_flag("human-numeric-sort") {
        modes.push(SortMode::HumanNumeric);
    }
    if matches.get_flag("month-sort") {
        modes.push(SortMode::Month);
    }
    if let Some(word) = matches.get_one::<String>("sort") {
        modes.push(word.parse()?);
    }

    match modes.as_slice() {
        [] => Ok(SortMode::Lexicographic),
        [mode] => Ok(*mode),
        _ => Err(SortError::conflicting_options(
            "options -n, -h, -M and --sort are mutually exclusive",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> SortResult<SortConfig> {
        let matches = build_cli()
            .try_get_matches_from(args)
            .expect("Failed to parse test arguments");
        parse_config_from_matches(&matches)
    }

    #[test]
    fn test_parse_basic_config() {
        let config = config_for(&["lsort", "-n", "-r"]).expect("Failed to parse test config");
        assert_eq!(config.mode, SortMode::Numeric);
        assert!(config.reverse);
        assert!(config.reading_from_stdin());
    }

    #[test]
    fn test_parse_full_config() {
        let config = config_for(&[
            "lsort", "-k", "2", "-t", ":", "-u", "-b", "-o", "out.txt", "input.txt",
        ])
        .expect("Failed to parse test config");

        assert_eq!(config.column, 2);
        assert_eq!(config.field_separator, ':');
        assert!(config.unique);
        assert!(config.ignore_trailing_blanks);
        assert_eq!(config.output.as_deref(), Some("out.txt"));
        assert_eq!(config.input.as_deref(), Some("input.txt"));
    }

    #[test]
    fn test_mode_flags() {
        assert_eq!(
            config_for(&["lsort", "-h"]).expect("parse -h").mode,
            SortMode::HumanNumeric
        );
        assert_eq!(
            config_for(&["lsort", "-M"]).expect("parse -M").mode,
            SortMode::Month
        );
        assert_eq!(
            config_for(&["lsort"]).expect("parse default").mode,
            SortMode::Lexicographic
        );
    }

    #[test]
    fn test_sort_word() {
        assert_eq!(
            config_for(&["lsort", "--sort", "month"])
                .expect("parse --sort month")
                .mode,
            SortMode::Month
        );
        assert!(matches!(
            config_for(&["lsort", "--sort", "bogus"]),
            Err(SortError::UnknownSortMode { .. })
        ));
    }

    #[test]
    fn test_conflicting_modes() {
        assert!(matches!(
            config_for(&["lsort", "-n", "-M"]),
            Err(SortError::ConflictingOptions { .. })
        ));
        assert!(matches!(
            config_for(&["lsort", "-n", "-h"]),
            Err(SortError::ConflictingOptions { .. })
        ));
        assert!(matches!(
            config_for(&["lsort", "-h", "-M"]),
            Err(SortError::ConflictingOptions { .. })
        ));
        assert!(matches!(
            config_for(&["lsort", "-n", "--sort", "month"]),
            Err(SortError::ConflictingOptions { .. })
        ));
    }

    #[test]
    fn test_too_many_operands() {
        assert!(matches!(
            config_for(&["lsort", "a.txt", "b.txt"]),
            Err(SortError::ExtraOperand { .. })
        ));
    }

    #[test]
    fn test_multichar_separator_rejected() {
        assert!(matches!(
            config_for(&["lsort", "-t", "::"]),
            Err(SortError::InvalidFieldSeparator { .. })
        ));
    }

    #[test]
    fn test_check_with_output_rejected() {
        assert!(matches!(
            config_for(&["lsort", "-c", "-o", "out.txt"]),
            Err(SortError::ConflictingOptions { .. })
        ));
    }
}
