//! Glyph bitmap model: the on/off matrix and the logical editing cursor.
//!
//! The model knows nothing about the terminal. It owns the cell matrix
//! (indexed `cells[row][col]`) and the cell currently under editing focus.
//! Screen coordinates are derived elsewhere, see [`crate::editor::layout`].

mod bitmap;
mod dimensions;

pub use bitmap::{Cell, Direction, Glyph, GlyphSnapshot, Pixel};
pub use dimensions::{Dimensions, DEFAULT_COLS, DEFAULT_ROWS, MAX_COLS, MAX_ROWS};
