//! Glyph Script WASM Module
//!
//! Lays out text in a consonant-anchored glyph script and composites it into
//! an image. The pipeline runs normalize, segment, resolve layout, build the
//! display list, composite and encode.

pub mod models;
pub mod parse;
pub mod layout;
pub mod renderers;
pub mod errors;
pub mod config;
pub mod pipeline;
pub mod api;

// Re-export commonly used types
pub use models::elements::*;
pub use models::glyph::*;
pub use errors::*;
pub use config::EngineConfig;
pub use parse::{normalize, segment};
pub use layout::{LayoutConfig, LayoutResolver};
pub use renderers::{DisplayList, RenderConfig, SymbolSource, MemorySymbols, DirectorySymbols, Compositor};
pub use pipeline::{layout_phrase, display_list_for, render_phrase, render_data_url};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            log::warn!("logger already initialized: {}", e);
        }
    }

    log::info!("Glyph Script WASM module initialized");
}
