//! Glyph Script WASM API
//!
//! This module provides the JavaScript-facing API for the glyph script engine.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and error handling
//! - `core`: Exported functions and the `GlyphRenderer` class

pub mod helpers;
pub mod core;

// Re-export all public functions from modules to maintain the current public API
pub use self::core::*;
