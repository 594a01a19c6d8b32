//! Renderers module for glyph script output
//!
//! This module turns resolved layouts into pixels: the display list holds
//! placement instructions, symbol sources supply images, the compositor
//! folds the list onto a canvas, and the finished canvas is encoded as PNG.

pub mod display_list;
pub mod symbols;
pub mod compositor;
pub mod data_url;

// Re-export commonly used types
pub use display_list::{DisplayList, Sprite, Layer, Stamp, RenderConfig, canvas_size};
pub use symbols::{SymbolSource, MemorySymbols, DirectorySymbols, decode_symbol};
pub use compositor::{Renderer, AlphaRenderer, Compositor, Composition, rotate_quarter_turns};
pub use data_url::{encode_png, encode_data_url, DATA_URL_PREFIX};
