//! Models module for the glyph script engine
//!
//! This module contains the data models shared by every stage of the
//! pipeline: phonetic tokens, glyph groups and resolved layouts.

pub mod elements;
pub mod glyph;

// Re-export commonly used types
pub use elements::*;
pub use glyph::*;
