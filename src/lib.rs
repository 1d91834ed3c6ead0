//! glyphgen library crate.
//!
//! This module exposes the internal components for integration testing.

pub mod cli;
pub mod editor;
pub mod encoder;
pub mod error;
pub mod glyph;
pub mod input;
pub mod session;
pub mod terminal;

pub use error::GlyphgenError;
