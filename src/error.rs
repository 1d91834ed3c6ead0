//! Crate-level error type.

use std::io;

/// Errors that end a glyphgen session.
#[derive(Debug, thiserror::Error)]
pub enum GlyphgenError {
    /// The terminal could not be put into full-screen mode
    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),

    /// Drawing, reading keys or restoring the terminal failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[source] io::Error),

    /// The SIGINT/SIGTERM handler could not be installed
    #[error("Failed to install interrupt handler: {0}")]
    InterruptHandler(#[from] ctrlc::Error),

    /// The glyph report could not be written
    #[error("Failed to write glyph: {0}")]
    Output(#[source] io::Error),
}
