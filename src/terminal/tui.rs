//! crossterm-backed [`Screen`] that owns the terminal for the editor's
//! lifetime.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use std::io::{self, Stdout, Write};
use std::sync::atomic::Ordering;
use std::time::Duration;

use super::interrupt;
use super::raw_mode::{install_panic_hook, RAW_MODE_ACTIVE};
use super::screen::{pixel_symbol, Key, Screen};
use crate::glyph::Pixel;
use crate::input::key_from_event;

/// How long `read_key` waits for input before re-checking the interrupt flag.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Full-screen terminal session on stdout.
///
/// This struct handles:
/// - Entering raw mode and alternate screen on creation
/// - Restoring terminal state on [`CrosstermScreen::shutdown`] or drop
/// - Panic recovery (terminal is restored even if the app panics)
///
/// # Example
///
/// ```ignore
/// let mut screen = CrosstermScreen::init()?;
/// screen.draw_text(1, 3, "hello")?;
/// screen.refresh()?;
/// let key = screen.read_key()?;
/// screen.shutdown()?;
/// ```
pub struct CrosstermScreen {
    out: Stdout,
    /// Whether this screen is responsible for cleanup
    active: bool,
}

impl CrosstermScreen {
    /// Take over the terminal.
    ///
    /// This will:
    /// 1. Install a panic hook (if not already installed)
    /// 2. Enable raw mode (no line buffering, no echo)
    /// 3. Enter the alternate screen and clear it
    ///
    /// # Errors
    /// Returns an error if raw mode or the alternate screen cannot be
    /// entered. Whatever was already changed is undone before returning.
    pub fn init() -> io::Result<Self> {
        install_panic_hook();

        enable_raw_mode()?;
        RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);

        // From here on, an early return drops the screen and restores raw mode
        let mut screen = Self {
            out: io::stdout(),
            active: true,
        };
        crossterm::execute!(
            screen.out,
            crossterm::terminal::EnterAlternateScreen,
            Clear(ClearType::All),
        )?;

        log::debug!("Terminal initialized");
        Ok(screen)
    }

    /// Restore the terminal to its original state.
    ///
    /// After calling this, drop is a no-op and further calls return `Ok`.
    ///
    /// # Errors
    /// Returns an error if any cleanup step fails.
    pub fn shutdown(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            crossterm::execute!(
                self.out,
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show,
            )?;
            disable_raw_mode()?;
            log::debug!("Terminal restored");
        }
        Ok(())
    }

    /// Check if the screen still owns the terminal.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Screen for CrosstermScreen {
    fn draw_text(&mut self, y: u16, x: u16, text: &str) -> io::Result<()> {
        crossterm::queue!(self.out, MoveTo(x, y), Print(text))
    }

    fn draw_pixel(&mut self, y: u16, x: u16, pixel: Pixel) -> io::Result<()> {
        crossterm::queue!(self.out, MoveTo(x, y), Print(pixel_symbol(pixel)))
    }

    fn set_cursor(&mut self, y: u16, x: u16) -> io::Result<()> {
        crossterm::queue!(self.out, MoveTo(x, y))
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if interrupt::interrupted() {
                return Ok(Key::Interrupt);
            }
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = key_from_event(key_event) {
                    return Ok(key);
                }
            }
        }
    }
}

impl Drop for CrosstermScreen {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            RAW_MODE_ACTIVE.store(false, Ordering::SeqCst);

            // Best-effort cleanup - ignore errors during drop
            let _ = crossterm::execute!(
                self.out,
                crossterm::terminal::LeaveAlternateScreen,
                crossterm::cursor::Show,
            );
            let _ = disable_raw_mode();
        }
    }
}
