use std::io;
use std::process::ExitCode;

use glyphgen::cli::{self, EditorOptions};
use glyphgen::editor::ExitReason;
use glyphgen::session::run_session;
use glyphgen::terminal::{interrupt, locale, CrosstermScreen};
use glyphgen::GlyphgenError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match cli::parse_from(std::env::args_os()) {
        Ok(options) => options,
        Err(e) => {
            cli::report_parse_error(&e);
            return ExitCode::SUCCESS;
        }
    };
    log::debug!("Options: {:?}", options);

    match run(options) {
        Ok(reason) => ExitCode::from(reason.exit_code()),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Edit a glyph full-screen, then print it once the terminal is restored.
fn run(options: EditorOptions) -> Result<ExitReason, GlyphgenError> {
    if let Err(e) = interrupt::setup_interrupt_handler().map_err(GlyphgenError::from) {
        log::warn!("{}", e);
    }
    locale::check_utf8_locale();

    let screen = CrosstermScreen::init().map_err(GlyphgenError::TerminalInit)?;
    run_session(screen, options, CrosstermScreen::shutdown, &mut io::stdout().lock())
}
