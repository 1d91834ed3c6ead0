//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing, option clamping and the
//! handling of parse failures.

mod args;
mod enums;
mod options;

pub use args::{parse_count, Args};
pub use enums::FormatArg;
pub use options::EditorOptions;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;

/// Parse a full argument list (program name first) into editor options.
///
/// # Errors
/// Returns the clap error for help/version requests and for invalid
/// arguments; pass it to [`report_parse_error`].
pub fn parse_from<I, T>(args: I) -> Result<EditorOptions, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(args)?;
    Ok(EditorOptions::from(&args))
}

/// Full usage text.
pub fn usage() -> String {
    Args::command().render_help().to_string()
}

/// Report a parse failure the way the tool always has: help and version go
/// to stdout; anything else gets a one-line diagnostic on stderr followed by
/// the usage on stdout.
pub fn report_parse_error(err: &clap::Error) {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
        }
        _ => {
            eprintln!("{}", diagnostic(err));
            print!("{}", usage());
        }
    }
}

/// First line of a clap error, e.g. `error: unexpected argument '-x' found`.
pub fn diagnostic(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::OutputFormat;

    #[test]
    fn test_parse_from_defaults() {
        let opts = parse_from(["glyphgen"]).unwrap();
        assert_eq!(opts.dimensions.cols(), 5);
        assert_eq!(opts.dimensions.rows(), 8);
        assert_eq!(opts.format, OutputFormat::Bin);
    }

    #[test]
    fn test_parse_from_help() {
        let err = parse_from(["glyphgen", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_parse_from_unknown_flag() {
        let err = parse_from(["glyphgen", "-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert!(diagnostic(&err).contains("-x"));
    }

    #[test]
    fn test_parse_from_missing_value() {
        let err = parse_from(["glyphgen", "-c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_parse_from_bad_format() {
        let err = parse_from(["glyphgen", "-f", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_diagnostic_is_single_line() {
        let err = parse_from(["glyphgen", "--bogus"]).unwrap_err();
        let line = diagnostic(&err);
        assert!(line.starts_with("error:"));
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_usage_lists_flags() {
        let text = usage();
        assert!(text.contains("Usage:"));
        for flag in ["-c", "-r", "-f", "-h"] {
            assert!(text.contains(flag), "usage missing {}", flag);
        }
    }

    #[test]
    fn test_usage_ends_with_one_newline() {
        let text = usage();
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
}
