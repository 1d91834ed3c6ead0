//! Row-by-row textual encoding of a finished glyph.
//!
//! Each row becomes one literal, column 0 being the most significant bit:
//!
//! ```text
//! Glyph (3 x 2)
//! Format: hex
//!   0x6
//!   0x0
//! ```

use std::fmt::{self, Write as _};
use std::io;

use crate::glyph::{GlyphSnapshot, Pixel};

/// Output encoding for glyph rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `0b` followed by one digit per column.
    #[default]
    Bin,
    /// `0x` followed by the unpadded lowercase row value.
    Hex,
}

impl OutputFormat {
    /// Name shown in the report header.
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Bin => "bin",
            OutputFormat::Hex => "hex",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer value of a row, column 0 as the most significant bit.
///
/// Rows are at most five pixels wide, so the value always fits in a `u8`.
pub fn row_value(row: &[Pixel]) -> u8 {
    row.iter()
        .fold(0u8, |acc, pixel| (acc << 1) | u8::from(pixel.is_lit()))
}

/// Encode a single row as a `0b`/`0x` literal.
pub fn encode_row(row: &[Pixel], format: OutputFormat) -> String {
    match format {
        OutputFormat::Bin => {
            let digits: String = row
                .iter()
                .map(|p| if p.is_lit() { '1' } else { '0' })
                .collect();
            format!("0b{}", digits)
        }
        OutputFormat::Hex => format!("0x{:x}", row_value(row)),
    }
}

/// Render the full report: two header lines, then one indented line per row.
pub fn encode(snapshot: &GlyphSnapshot, format: OutputFormat) -> String {
    let dims = snapshot.dimensions();
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "Glyph ({} x {})", dims.cols(), dims.rows());
    let _ = writeln!(out, "Format: {}", format);
    for row in snapshot.rows() {
        let _ = writeln!(out, "  {}", encode_row(row, format));
    }
    out
}

/// Write the report to `writer` and flush it.
///
/// # Errors
/// Returns an error if writing or flushing fails.
pub fn write_glyph<W: io::Write>(
    writer: &mut W,
    snapshot: &GlyphSnapshot,
    format: OutputFormat,
) -> io::Result<()> {
    writer.write_all(encode(snapshot, format).as_bytes())?;
    writer.flush()
}
