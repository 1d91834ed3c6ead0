//! In-memory [`Screen`] that replays scripted keys and records drawing.
//!
//! Used to exercise the editor without a terminal. It keeps a virtual
//! character grid and a virtual cursor that advances after every draw, the
//! way a real terminal does.

use std::collections::{HashMap, VecDeque};
use std::io;

use super::screen::{pixel_symbol, Key, Screen};
use crate::glyph::Pixel;

/// One recorded call on the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOp {
    Text { y: u16, x: u16, text: String },
    Pixel { y: u16, x: u16, pixel: Pixel },
    Cursor { y: u16, x: u16 },
    Refresh,
    ReadKey(Key),
}

/// Scripted, recording screen.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    keys: VecDeque<Key>,
    ops: Vec<ScreenOp>,
    /// Committed characters, keyed by `(y, x)`
    visible: HashMap<(u16, u16), char>,
    /// Characters drawn since the last refresh
    pending: HashMap<(u16, u16), char>,
    cursor: (u16, u16),
    visible_cursor: (u16, u16),
    /// Keys read while drawing output was still uncommitted
    stale_reads: usize,
}

impl RecordingScreen {
    /// Create a screen that will deliver `keys` in order.
    ///
    /// Once the script is exhausted every read returns `q`, so an editor
    /// driven by it always terminates.
    pub fn new<I: IntoIterator<Item = Key>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Build a screen from a whitespace-separated keystroke script.
    ///
    /// Single characters map to [`Key::Char`]; `UP`, `DOWN`, `LEFT`,
    /// `RIGHT`, `^C` and `OTHER` map to the corresponding special keys.
    ///
    /// ```
    /// use glyphgen::terminal::RecordingScreen;
    ///
    /// let screen = RecordingScreen::from_script("f RIGHT f q");
    /// assert_eq!(screen.pending_keys(), 4);
    /// ```
    pub fn from_script(script: &str) -> Self {
        Self::new(script.split_whitespace().map(parse_token))
    }

    /// Every call made so far, in order.
    pub fn ops(&self) -> &[ScreenOp] {
        &self.ops
    }

    /// Drain the recorded calls.
    pub fn take_ops(&mut self) -> Vec<ScreenOp> {
        std::mem::take(&mut self.ops)
    }

    /// Number of scripted keys not yet read.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }

    /// Character shown at `(y, x)` as of the last refresh.
    pub fn char_at(&self, y: u16, x: u16) -> Option<char> {
        self.visible.get(&(y, x)).copied()
    }

    /// Pixel shown at `(y, x)` as of the last refresh, if a pixel symbol is
    /// there.
    pub fn pixel_at(&self, y: u16, x: u16) -> Option<Pixel> {
        match self.char_at(y, x)? {
            c if c == pixel_symbol(Pixel::Lit) => Some(Pixel::Lit),
            c if c == pixel_symbol(Pixel::Dark) => Some(Pixel::Dark),
            _ => None,
        }
    }

    /// The visible text of row `y` starting at column `x`, up to the first
    /// gap.
    pub fn text_at(&self, y: u16, x: u16) -> String {
        (x..)
            .map_while(|col| self.char_at(y, col))
            .collect()
    }

    /// Terminal cursor `(y, x)` as of the last refresh.
    pub fn visible_cursor(&self) -> (u16, u16) {
        self.visible_cursor
    }

    /// Number of refresh calls.
    pub fn refresh_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, ScreenOp::Refresh))
            .count()
    }

    /// Keys that were read while drawn output had not been refreshed yet.
    pub fn stale_reads(&self) -> usize {
        self.stale_reads
    }

    fn put(&mut self, y: u16, x: u16, text: impl Iterator<Item = char>) {
        let mut col = x;
        for ch in text {
            self.pending.insert((y, col), ch);
            col = col.saturating_add(1);
        }
        self.cursor = (y, col);
    }

    fn is_dirty(&self) -> bool {
        !self.pending.is_empty() || self.cursor != self.visible_cursor
    }
}

impl Screen for RecordingScreen {
    fn draw_text(&mut self, y: u16, x: u16, text: &str) -> io::Result<()> {
        self.ops.push(ScreenOp::Text {
            y,
            x,
            text: text.to_string(),
        });
        self.put(y, x, text.chars());
        Ok(())
    }

    fn draw_pixel(&mut self, y: u16, x: u16, pixel: Pixel) -> io::Result<()> {
        self.ops.push(ScreenOp::Pixel { y, x, pixel });
        self.put(y, x, std::iter::once(pixel_symbol(pixel)));
        Ok(())
    }

    fn set_cursor(&mut self, y: u16, x: u16) -> io::Result<()> {
        self.ops.push(ScreenOp::Cursor { y, x });
        self.cursor = (y, x);
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.ops.push(ScreenOp::Refresh);
        self.visible.extend(self.pending.drain());
        self.visible_cursor = self.cursor;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<Key> {
        if self.is_dirty() {
            self.stale_reads += 1;
        }
        let key = self.keys.pop_front().unwrap_or(Key::Char('q'));
        self.ops.push(ScreenOp::ReadKey(key));
        Ok(key)
    }
}

fn parse_token(token: &str) -> Key {
    match token {
        "UP" => Key::Up,
        "DOWN" => Key::Down,
        "LEFT" => Key::Left,
        "RIGHT" => Key::Right,
        "^C" => Key::Interrupt,
        "OTHER" => Key::Other,
        _ => {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => Key::Other,
            }
        }
    }
}
