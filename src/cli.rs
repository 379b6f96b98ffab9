//! Command-line argument handling.
//!
//! Flags are resolved by a direct match over recognized tokens into one
//! immutable [RenderConfig] plus a list of input files; there is no dispatch
//! table and no ambient mutable state. Parsing stops at `--` (consumed) or
//! at the first token that does not start with `-` (kept as the first
//! filename). A `-`-prefixed token that is not a recognized flag is a fatal
//! configuration error.

use crate::render::{FrequencyPosition, RenderConfig, StructureStyle};
use std::path::PathBuf;
use thiserror::Error;

/// Usage text, printed to stderr on `-h` or on an invalid invocation.
pub const USAGE: &str = "\
NAME
  stree - build and display a prefix trie from a list of strings

SYNOPSIS
  stree [-a] [-s] [-p] [-b] [-g] [-f] [-F] [file...]
  stree -h

DESCRIPTION
  stree builds a prefix trie from strings read from the given files, or from
  stdin if no file is given, one string per line. Strings are grouped by
  their common prefixes and the resulting tree is written to stdout in a
  configurable notation.

OPTIONS
  -a
      Sort output alphabetically. This is the default, unless one of -f/-F
      is given.

  -s
      If multiple strings share a prefix but continue differently, each
      continuation is written on its own line with the common prefix
      repeated, e.g. \"foo\", \"bar\" and \"baz\" give:
          foo
          ba
          bar
          baz
      With -s, the repeated prefix is replaced by spaces:
          foo
          ba
            r
            z
      The other notations never repeat the prefix, so -s has no effect there.

  -p
      Use nested parentheses to reveal structure, e.g. turning \"foo\",
      \"bar\", \"baz\" into ((ba(r)(z))(foo))

  -b
      Use shell brace-expansion notation, e.g. turning \"foo\", \"bar\",
      \"baz\" into {ba{r,z},foo}

  -g
      Create a representation suitable for graphviz, e.g. turning \"foo\",
      \"bar\", \"baz\" into digraph {ba -> {r;z};foo}

  -f
      Prepend the frequency to each node of the output. Also sorts by
      frequency, unless -a is given as well.

  -F
      Just as -f, but append the frequency rather than prepending it. This
      can be useful together with -s when viewing the output in an editor
      that folds by indent.

  -h  Print this help and exit
";

// =#========================================================================#=
// CLI ERROR
// =#========================================================================#=
/// Fatal configuration error raised while parsing arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// A `-`-prefixed token that is not a recognized flag.
    #[error("unrecognized option '{0}'")]
    UnknownFlag(String),
}

// =#========================================================================#=
// CLI OPTIONS
// =#========================================================================#=
/// Fully-resolved invocation: rendering configuration plus input sources.
#[derive(Debug, Default)]
pub struct CliOptions {
    /// Rendering configuration assembled from the flags.
    pub config: RenderConfig,

    /// Files to read, in order; stdin is used when empty.
    pub files: Vec<PathBuf>,

    /// `-h` was given: print usage and exit non-zero without rendering.
    pub show_help: bool,
}

/// Parses command-line tokens (without the program name) into [CliOptions].
///
/// `-h` short-circuits: flags seen so far are kept but nothing further is
/// parsed. Later style or frequency flags override earlier ones.
///
/// # Errors
/// Returns [CliError::UnknownFlag] for a `-`-prefixed token that is not a
/// recognized flag and not `--`.
///
/// # Example
/// ```
/// use stree::cli::parse_args;
/// use stree::render::StructureStyle;
///
/// let args = ["-g", "-s", "words.txt"].map(String::from);
/// let options = parse_args(args).unwrap();
/// assert_eq!(options.config.style, StructureStyle::Graph);
/// assert!(!options.config.repeat_prefix);
/// assert_eq!(options.files.len(), 1);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliOptions, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = RenderConfig::default();
    let mut files = Vec::new();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" => {
                files.extend(args.map(PathBuf::from));
                break;
            }
            "-h" => return Ok(CliOptions { config, files, show_help: true }),
            "-a" => config.force_alphabetical = true,
            "-s" => config.repeat_prefix = false,
            "-p" => config.style = StructureStyle::Parenthesized,
            "-b" => config.style = StructureStyle::BraceExpansion,
            "-g" => config.style = StructureStyle::Graph,
            "-f" => config.frequency = FrequencyPosition::Prepend,
            "-F" => config.frequency = FrequencyPosition::Append,
            flag if flag.starts_with('-') => {
                return Err(CliError::UnknownFlag(flag.to_string()));
            }
            file => {
                // First plain token ends flag parsing.
                files.push(PathBuf::from(file));
                files.extend(args.map(PathBuf::from));
                break;
            }
        }
    }

    Ok(CliOptions { config, files, show_help: false })
}
