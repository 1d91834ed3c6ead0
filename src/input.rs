//! Keyboard input handling.
//!
//! This module handles:
//! - Converting crossterm KeyEvents to editor [`Key`]s
//! - Binding keys to editor [`Command`]s (vi-style letters and arrows)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::glyph::{Direction, Pixel};
use crate::terminal::Key;

/// What the editor should do in response to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the cursor one cell
    Move(Direction),
    /// Set the cell under the cursor
    Paint(Pixel),
    /// Darken the whole grid and return to the origin
    ClearAll,
    /// Finish editing and print the glyph
    Quit,
    /// Stop without printing
    Abort,
    /// Key has no binding
    Ignore,
}

/// Key bindings:
/// - `k`/Up, `j`/Down, `h`/Left, `l`/Right: move
/// - `f`: fill, `d`: delete, `c`: clear all
/// - `q`: quit, interrupt: abort
pub fn command_for(key: Key) -> Command {
    match key {
        Key::Char('k') | Key::Up => Command::Move(Direction::Up),
        Key::Char('j') | Key::Down => Command::Move(Direction::Down),
        Key::Char('h') | Key::Left => Command::Move(Direction::Left),
        Key::Char('l') | Key::Right => Command::Move(Direction::Right),
        Key::Char('f') => Command::Paint(Pixel::Lit),
        Key::Char('d') => Command::Paint(Pixel::Dark),
        Key::Char('c') => Command::ClearAll,
        Key::Char('q') => Command::Quit,
        Key::Interrupt => Command::Abort,
        Key::Char(_) | Key::Other => Command::Ignore,
    }
}

/// Convert a crossterm KeyEvent to an editor key.
///
/// Returns `None` for key release events, which carry no new input.
pub fn key_from_event(event: KeyEvent) -> Option<Key> {
    let KeyEvent {
        code,
        modifiers,
        kind,
        ..
    } = event;

    if kind == KeyEventKind::Release {
        return None;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if modifiers.contains(KeyModifiers::CONTROL) {
        return Some(match code {
            KeyCode::Char('c') | KeyCode::Char('C') => Key::Interrupt,
            _ => Key::Other,
        });
    }

    let key = match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Char(c) if c.is_ascii() && !modifiers.contains(KeyModifiers::ALT) => Key::Char(c),
        _ => Key::Other,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    // ==================== Binding Tests ====================

    #[test]
    fn test_vi_and_arrow_keys_move() {
        assert_eq!(command_for(Key::Char('k')), Command::Move(Direction::Up));
        assert_eq!(command_for(Key::Up), Command::Move(Direction::Up));
        assert_eq!(command_for(Key::Char('j')), Command::Move(Direction::Down));
        assert_eq!(command_for(Key::Down), Command::Move(Direction::Down));
        assert_eq!(command_for(Key::Char('h')), Command::Move(Direction::Left));
        assert_eq!(command_for(Key::Left), Command::Move(Direction::Left));
        assert_eq!(command_for(Key::Char('l')), Command::Move(Direction::Right));
        assert_eq!(command_for(Key::Right), Command::Move(Direction::Right));
    }

    #[test]
    fn test_paint_clear_quit() {
        assert_eq!(command_for(Key::Char('f')), Command::Paint(Pixel::Lit));
        assert_eq!(command_for(Key::Char('d')), Command::Paint(Pixel::Dark));
        assert_eq!(command_for(Key::Char('c')), Command::ClearAll);
        assert_eq!(command_for(Key::Char('q')), Command::Quit);
        assert_eq!(command_for(Key::Interrupt), Command::Abort);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(command_for(Key::Char('x')), Command::Ignore);
        // Bindings are case sensitive
        assert_eq!(command_for(Key::Char('Q')), Command::Ignore);
        assert_eq!(command_for(Key::Char('F')), Command::Ignore);
        assert_eq!(command_for(Key::Other), Command::Ignore);
    }

    // ==================== Event Conversion Tests ====================

    #[test]
    fn test_arrow_events() {
        assert_eq!(key_from_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(key_from_event(press(KeyCode::Down)), Some(Key::Down));
        assert_eq!(key_from_event(press(KeyCode::Left)), Some(Key::Left));
        assert_eq!(key_from_event(press(KeyCode::Right)), Some(Key::Right));
    }

    #[test]
    fn test_char_events() {
        assert_eq!(key_from_event(press(KeyCode::Char('f'))), Some(Key::Char('f')));
        assert_eq!(key_from_event(press(KeyCode::Char('é'))), Some(Key::Other));
        assert_eq!(key_from_event(press(KeyCode::Enter)), Some(Key::Other));
        assert_eq!(key_from_event(press(KeyCode::F(1))), Some(Key::Other));
    }

    #[test]
    fn test_ctrl_c_is_interrupt() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(event), Some(Key::Interrupt));
    }

    #[test]
    fn test_other_ctrl_and_alt_combinations_ignored() {
        let ctrl_f = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(ctrl_f), Some(Key::Other));

        let alt_q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(key_from_event(alt_q), Some(Key::Other));
    }

    #[test]
    fn test_release_events_dropped() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('f'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(key_from_event(release), None);
    }
}
