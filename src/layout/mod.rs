//! Layout module for the glyph script engine
//!
//! This module resolves glyph groups into grid positions, rotations,
//! cap/connector decorations and diacritic offsets. It performs no imaging.

pub mod resolver;
pub mod tables;

// Re-export commonly used types
pub use resolver::{AfterTemplateSelector, LayoutConfig, LayoutResolver};
pub use tables::{body_angle, end_angle, grid_position, start_angle, Edge, TemplateKind};
