//! Validated editor settings derived from the command line.

use super::args::Args;
use crate::encoder::OutputFormat;
use crate::glyph::Dimensions;

/// Everything the editor and encoder need, already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorOptions {
    pub dimensions: Dimensions,
    pub format: OutputFormat,
}

impl From<&Args> for EditorOptions {
    fn from(args: &Args) -> Self {
        Self {
            dimensions: Dimensions::clamped(args.cols, args.rows),
            format: args.format.into(),
        }
    }
}
