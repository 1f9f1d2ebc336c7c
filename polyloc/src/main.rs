//! # polyloc
//!
//! A CLI tool for counting blank, comment and code lines across many
//! programming languages.
//!
//! ## Overview
//!
//! polyloc is built on top of polyloclib. It walks the given paths, decides
//! the language of every file from its name, shebang or content, and prints
//! per-language (or per-file) counts.
//!
//! ## Usage
//!
//! ```bash
//! # Count LOC in current directory
//! polyloc
//!
//! # Per-file breakdown, sorted by comment lines
//! polyloc src tests --by-file --sort comments
//!
//! # Only Go and Python, as JSON
//! polyloc . --include-lang Go,Python --output json
//!
//! # Skip generated code
//! polyloc . --exclude "**/generated/**" --not-match-d vendor
//!
//! # List known languages
//! polyloc --show-lang
//! ```

mod render;

use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use polyloclib::{analyze, AnalyzeOptions, FilterConfig, LanguageCatalog};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::SortBy;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("polyloc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Count blank, comment and code lines in many languages")
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .num_args(1..)
                .default_value(".")
                .help("Files or directories to analyze"),
        )
        .arg(
            Arg::new("by-file")
                .short('f')
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Report results for every counted file"),
        )
        .arg(
            Arg::new("sort")
                .short('s')
                .long("sort")
                .value_parser(SortBy::NAMES)
                .default_value("codes")
                .help("Sort rows by a column"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("include-ext")
                .long("include-ext")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Only count these file extensions (comma-separated)"),
        )
        .arg(
            Arg::new("exclude-ext")
                .long("exclude-ext")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Skip these file extensions (comma-separated)"),
        )
        .arg(
            Arg::new("include-lang")
                .long("include-lang")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Only count these languages (comma-separated)"),
        )
        .arg(
            Arg::new("exclude-lang")
                .long("exclude-lang")
                .value_delimiter(',')
                .action(ArgAction::Append)
                .help("Skip these languages (comma-separated)"),
        )
        .arg(
            Arg::new("match")
                .long("match")
                .help("Only count file names matching this regex"),
        )
        .arg(
            Arg::new("not-match")
                .long("not-match")
                .help("Skip file names matching this regex"),
        )
        .arg(
            Arg::new("match-d")
                .long("match-d")
                .help("Only count files in directories matching this regex"),
        )
        .arg(
            Arg::new("not-match-d")
                .long("not-match-d")
                .help("Skip files in directories matching this regex"),
        )
        .arg(
            Arg::new("include")
                .short('i')
                .long("include")
                .action(ArgAction::Append)
                .help("Include files matching glob pattern"),
        )
        .arg(
            Arg::new("exclude")
                .short('e')
                .long("exclude")
                .action(ArgAction::Append)
                .help("Exclude files matching glob pattern"),
        )
        .arg(
            Arg::new("keep-duplicates")
                .long("keep-duplicates")
                .action(ArgAction::SetTrue)
                .help("Count files with identical content more than once"),
        )
        .arg(
            Arg::new("max-line-length")
                .long("max-line-length")
                .value_parser(clap::value_parser!(usize))
                .help("Stop counting a file at a line longer than this many bytes"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_parser(clap::value_parser!(usize))
                .help("Number of worker threads"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log every classified line to stderr"),
        )
        .arg(
            Arg::new("show-lang")
                .long("show-lang")
                .action(ArgAction::SetTrue)
                .help("List supported languages and their extensions"),
        )
}

/// Install the stderr subscriber; `--debug` raises the default level.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.filter(|s| !s.is_empty()).cloned().collect())
        .unwrap_or_default()
}

/// Build filter config from matches
fn build_filter(matches: &ArgMatches) -> anyhow::Result<FilterConfig> {
    let mut filter = FilterConfig::new();

    for pattern in strings(matches, "include") {
        filter = filter.include(&pattern)?;
    }
    for pattern in strings(matches, "exclude") {
        filter = filter.exclude(&pattern)?;
    }

    if let Some(re) = matches.get_one::<String>("match") {
        filter = filter.match_file(re)?;
    }
    if let Some(re) = matches.get_one::<String>("not-match") {
        filter = filter.not_match_file(re)?;
    }
    if let Some(re) = matches.get_one::<String>("match-d") {
        filter = filter.match_dir(re)?;
    }
    if let Some(re) = matches.get_one::<String>("not-match-d") {
        filter = filter.not_match_dir(re)?;
    }

    Ok(filter)
}

fn build_options(matches: &ArgMatches) -> anyhow::Result<AnalyzeOptions> {
    let mut options = AnalyzeOptions::new()
        .filter(build_filter(matches)?)
        .include_exts(strings(matches, "include-ext"))
        .exclude_exts(strings(matches, "exclude-ext"))
        .include_langs(strings(matches, "include-lang"))
        .exclude_langs(strings(matches, "exclude-lang"))
        .skip_duplicates(!matches.get_flag("keep-duplicates"))
        .debug(matches.get_flag("debug"));

    if let Some(&max) = matches.get_one::<usize>("max-line-length") {
        if max == 0 {
            bail!("--max-line-length must be greater than zero");
        }
        options = options.max_line_length(max);
    }
    if let Some(&threads) = matches.get_one::<usize>("threads") {
        options = options.threads(threads);
    }

    Ok(options)
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    if matches.get_flag("show-lang") {
        print!("{}", render::render_language_list(LanguageCatalog::builtin()));
        return Ok(());
    }

    let by_file = matches.get_flag("by-file");
    let sort = matches
        .get_one::<String>("sort")
        .and_then(|s| SortBy::from_name(s))
        .unwrap_or(SortBy::Codes);
    if by_file && sort == SortBy::Files {
        bail!("--sort files cannot be used with --by-file");
    }
    let json = matches.get_one::<String>("output").map(String::as_str) == Some("json");

    let paths = strings(matches, "paths");
    let options = build_options(matches)?;
    debug!(?paths, ?options, "starting analysis");
    let result = analyze(&paths, options).context("analysis failed")?;

    let output = if by_file {
        let rows = render::file_rows(&result, sort);
        if json {
            render::render_files_json(&rows, &result.total)? + "\n"
        } else {
            render::render_files_table(&rows, &result.total, result.max_path_length)
        }
    } else {
        let rows = render::language_rows(&result, sort);
        if json {
            render::render_languages_json(&rows, &result.total)? + "\n"
        } else {
            render::render_languages_table(&rows, &result.total)
        }
    };
    print!("{output}");

    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("debug"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["polyloc"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_valid() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let matches = parse(&[]);

        assert_eq!(strings(&matches, "paths"), ["."]);
        assert_eq!(matches.get_one::<String>("sort").unwrap(), "codes");
        assert_eq!(matches.get_one::<String>("output").unwrap(), "table");
        assert!(!matches.get_flag("by-file"));
    }

    #[test]
    fn test_comma_separated_lists() {
        let matches = parse(&["--include-lang", "Go,Python", "--include-lang", "Rust"]);

        assert_eq!(strings(&matches, "include-lang"), ["Go", "Python", "Rust"]);
    }

    #[test]
    fn test_invalid_sort_rejected() {
        let result = build_command().try_get_matches_from(["polyloc", "--sort", "lines"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_options() {
        let matches = parse(&[
            "--exclude-ext",
            "md,txt",
            "--keep-duplicates",
            "--threads",
            "2",
            "--max-line-length",
            "80",
        ]);
        let options = build_options(&matches).unwrap();

        assert!(options.exclude_exts.contains("md"));
        assert!(options.exclude_exts.contains("txt"));
        assert!(!options.skip_duplicates);
        assert_eq!(options.threads, Some(2));
        assert_eq!(options.max_line_length, 80);
    }

    #[test]
    fn test_invalid_regex_is_an_error() {
        let matches = parse(&["--match", "(unclosed"]);
        assert!(build_filter(&matches).is_err());
    }
}
