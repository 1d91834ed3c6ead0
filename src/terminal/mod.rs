//! Terminal driver: the `Screen` seam, its crossterm backend, raw-mode
//! cleanup, interrupt and locale handling, and a recording stub for tests.

pub mod interrupt;
pub mod locale;
mod raw_mode;
mod recorder;
mod screen;
mod tui;

pub use recorder::{RecordingScreen, ScreenOp};
pub use screen::{pixel_symbol, Key, Screen, DARK_SYMBOL, LIT_SYMBOL};
pub use tui::CrosstermScreen;
