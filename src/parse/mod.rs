//! Parsing module for the glyph script engine
//!
//! This module contains the logic for converting raw text into the
//! canonical phonetic stream and splitting it into glyph groups.

pub mod normalize;
pub mod segment;
pub mod tokens;

// Re-export commonly used types
pub use normalize::normalize;
pub use segment::segment;
pub use tokens::{CharClass, TokenRecognizer};
