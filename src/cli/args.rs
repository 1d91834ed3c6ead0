//! CLI argument parsing with clap.

use clap::Parser;

use super::enums::FormatArg;
use crate::glyph::{DEFAULT_COLS, DEFAULT_ROWS};

#[derive(Parser, Debug)]
#[command(name = "glyphgen")]
#[command(version, about = "Hand-design LCD character glyphs in the terminal")]
#[command(allow_negative_numbers = true)]
pub struct Args {
    /// Number of columns (clamped to 1-5)
    #[arg(short = 'c', long = "cols", value_name = "COLS", default_value_t = DEFAULT_COLS as i64, value_parser = parse_count)]
    pub cols: i64,

    /// Number of rows (clamped to 1-10)
    #[arg(short = 'r', long = "rows", value_name = "ROWS", default_value_t = DEFAULT_ROWS as i64, value_parser = parse_count)]
    pub rows: i64,

    /// Output format: b (binary) or h (hex)
    #[arg(short = 'f', long = "format", value_name = "FMT", default_value = "b")]
    pub format: FormatArg,
}

/// Parse a cell count the way C's `atoi` does: optional sign, then leading
/// digits; anything unparsable counts as 0. Clamping happens later.
///
/// # Errors
/// Never fails; the `Result` is what clap's value parser expects.
pub fn parse_count(s: &str) -> Result<i64, String> {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });
    Ok(if negative { -magnitude } else { magnitude })
}
