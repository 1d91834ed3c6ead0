//! Interactive glyph editor loop.
//!
//! The editor owns the [`Glyph`] and a [`Screen`]. Each key read from the
//! screen is bound to a [`Command`], applied to the glyph, and mirrored on
//! the screen. After every key the display matches the bitmap and the
//! terminal cursor sits on the projection of the logical cursor.
//!
//! The loop is single-threaded; [`Screen::read_key`] is its only blocking
//! call, and all output for one key is refreshed before the next is read.

pub mod layout;

use std::io;

use crate::glyph::{Cell, Dimensions, Glyph, Pixel};
use crate::input::{command_for, Command};
use crate::terminal::{Key, Screen};
use layout::{Projection, BANNER, LEGEND};

/// Why editing stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `q` was pressed; the glyph should be printed
    Quit,
    /// Ctrl-C or a termination signal; nothing is printed
    Interrupted,
}

impl ExitReason {
    /// Process exit status: 0 after `q`, 130 (128 + SIGINT) after an interrupt.
    pub fn exit_code(self) -> u8 {
        match self {
            ExitReason::Quit => 0,
            ExitReason::Interrupted => 130,
        }
    }
}

/// Editor state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Exiting(ExitReason),
}

/// Glyph editor bound to a screen.
pub struct Editor<S: Screen> {
    screen: S,
    glyph: Glyph,
    projection: Projection,
    state: EditorState,
}

impl<S: Screen> Editor<S> {
    /// Create an editor for an all-dark glyph of the given size.
    pub fn new(screen: S, dims: Dimensions) -> Self {
        Self {
            screen,
            glyph: Glyph::new(dims),
            projection: Projection::default(),
            state: EditorState::Editing,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn glyph(&self) -> &Glyph {
        &self.glyph
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Hand back the screen (for shutdown) and the finished glyph.
    pub fn into_parts(self) -> (S, Glyph) {
        (self.screen, self.glyph)
    }

    /// Draw the banner, legend and empty grid, and seat the cursor at the
    /// first cell.
    ///
    /// # Errors
    /// Returns an error if drawing fails.
    pub fn start(&mut self) -> io::Result<()> {
        let banner = self.projection.banner();
        self.screen.draw_text(banner.y, banner.x, BANNER)?;
        let legend = self.projection.legend();
        self.screen.draw_text(legend.y, legend.x, LEGEND)?;
        self.draw_grid()?;
        self.seat_cursor()?;
        self.screen.refresh()
    }

    /// Run until `q` or an interrupt.
    ///
    /// # Returns
    /// The reason editing stopped.
    ///
    /// # Errors
    /// Returns an error if the screen fails; the glyph keeps whatever was
    /// painted so far.
    pub fn run(&mut self) -> io::Result<ExitReason> {
        self.start()?;
        loop {
            if let EditorState::Exiting(reason) = self.step()? {
                log::info!("Editor exiting: {:?}", reason);
                return Ok(reason);
            }
        }
    }

    /// Read one key and handle it.
    ///
    /// # Errors
    /// Returns an error if reading or drawing fails.
    pub fn step(&mut self) -> io::Result<EditorState> {
        let key = self.screen.read_key()?;
        self.handle_key(key)
    }

    /// Apply one key to the glyph and the screen.
    ///
    /// Keys arriving after the editor has started exiting are ignored.
    ///
    /// # Errors
    /// Returns an error if drawing fails.
    pub fn handle_key(&mut self, key: Key) -> io::Result<EditorState> {
        if self.state != EditorState::Editing {
            return Ok(self.state);
        }

        let command = command_for(key);
        log::debug!("Key {:?} -> {:?}", key, command);

        let before = self.glyph.cursor();
        // Drawing leaves the terminal cursor after the last symbol
        let drew = match command {
            Command::Move(dir) => {
                self.glyph.move_cursor(dir);
                false
            }
            Command::Paint(pixel) => {
                self.glyph.paint(pixel);
                self.draw_cell(before, pixel)?;
                true
            }
            Command::ClearAll => {
                self.glyph.clear_all();
                self.draw_grid()?;
                true
            }
            Command::Quit => {
                self.state = EditorState::Exiting(ExitReason::Quit);
                false
            }
            Command::Abort => {
                self.state = EditorState::Exiting(ExitReason::Interrupted);
                false
            }
            Command::Ignore => false,
        };

        if drew || self.glyph.cursor() != before {
            self.seat_cursor()?;
            self.screen.refresh()?;
        }
        Ok(self.state)
    }

    fn draw_cell(&mut self, cell: Cell, pixel: Pixel) -> io::Result<()> {
        let pos = self.projection.project(cell);
        self.screen.draw_pixel(pos.y, pos.x, pixel)
    }

    /// Draw every cell from the bitmap.
    fn draw_grid(&mut self) -> io::Result<()> {
        let dims = self.glyph.dimensions();
        for row in 0..dims.rows() {
            for col in 0..dims.cols() {
                let cell = Cell::new(row, col);
                let pixel = self.glyph.get(cell).unwrap_or_default();
                self.draw_cell(cell, pixel)?;
            }
        }
        Ok(())
    }

    /// Put the terminal cursor on the logical cursor's cell.
    fn seat_cursor(&mut self) -> io::Result<()> {
        let pos = self.projection.project(self.glyph.cursor());
        self.screen.set_cursor(pos.y, pos.x)
    }
}
