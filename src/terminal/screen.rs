//! The character-cell screen abstraction the editor draws through.

use std::io;

use crate::glyph::Pixel;

/// Glyph drawn for a lit cell (U+25A0 BLACK SQUARE).
pub const LIT_SYMBOL: char = '\u{25A0}';

/// Glyph drawn for a dark cell (U+25A1 WHITE SQUARE).
pub const DARK_SYMBOL: char = '\u{25A1}';

/// Map a pixel to the character that represents it on screen.
pub fn pixel_symbol(pixel: Pixel) -> char {
    match pixel {
        Pixel::Lit => LIT_SYMBOL,
        Pixel::Dark => DARK_SYMBOL,
    }
}

/// A single key press as seen by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable ASCII character.
    Char(char),
    Up,
    Down,
    Left,
    Right,
    /// Ctrl-C in raw mode, or a termination signal delivered to the process.
    Interrupt,
    /// Any key the editor has no binding for.
    Other,
}

/// Character-cell terminal the editor renders into.
///
/// Coordinates are zero-based `(row, column)` screen positions. Drawing
/// calls may be buffered until [`Screen::refresh`].
pub trait Screen {
    /// Place an ASCII string starting at `(y, x)`.
    fn draw_text(&mut self, y: u16, x: u16, text: &str) -> io::Result<()>;

    /// Place the symbol for `pixel` at `(y, x)`. The cursor ends up one
    /// column to the right of the symbol.
    fn draw_pixel(&mut self, y: u16, x: u16, pixel: Pixel) -> io::Result<()>;

    /// Move the cursor without drawing.
    fn set_cursor(&mut self, y: u16, x: u16) -> io::Result<()>;

    /// Commit pending output to the display.
    fn refresh(&mut self) -> io::Result<()>;

    /// Block until a key is available.
    fn read_key(&mut self) -> io::Result<Key>;
}
