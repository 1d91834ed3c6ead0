//! One editing session from first frame to printed glyph.
//!
//! The screen is always shut down before anything is written to `out`, and
//! even when editing fails. The glyph report is written only after `q`.

use std::io::{self, Write};

use crate::cli::EditorOptions;
use crate::editor::{Editor, ExitReason};
use crate::encoder::write_glyph;
use crate::terminal::Screen;
use crate::GlyphgenError;

/// Run the editor on `screen`, release the screen with `shutdown`, then
/// print the glyph to `out` if the user quit normally.
///
/// # Arguments
/// * `screen` - An initialized screen
/// * `options` - Grid size and output format
/// * `shutdown` - Restores the terminal; runs exactly once
/// * `out` - Destination of the glyph report
///
/// # Returns
/// Why editing stopped.
///
/// # Errors
/// Returns [`GlyphgenError::Terminal`] if editing or shutdown fails and
/// [`GlyphgenError::Output`] if the report cannot be written.
pub fn run_session<S, F, W>(
    screen: S,
    options: EditorOptions,
    shutdown: F,
    out: &mut W,
) -> Result<ExitReason, GlyphgenError>
where
    S: Screen,
    F: FnOnce(&mut S) -> io::Result<()>,
    W: Write,
{
    let mut editor = Editor::new(screen, options.dimensions);
    let outcome = editor.run();

    let (mut screen, glyph) = editor.into_parts();
    shutdown(&mut screen).map_err(GlyphgenError::Terminal)?;
    let reason = outcome.map_err(GlyphgenError::Terminal)?;

    if reason == ExitReason::Quit {
        write_glyph(out, &glyph.snapshot(), options.format).map_err(GlyphgenError::Output)?;
    }
    Ok(reason)
}
