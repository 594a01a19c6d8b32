//! WASM API for the glyph script pipeline
//!
//! Stateless functions for normalization and layout, plus `GlyphRenderer`,
//! which owns the registered symbol images and the engine configuration.

use wasm_bindgen::prelude::*;
use crate::config::EngineConfig;
use crate::layout::LayoutConfig;
use crate::parse::normalize;
use crate::pipeline::{display_list_for, layout_phrase, render_data_url};
use crate::renderers::MemorySymbols;
use super::helpers::{deserialize_or_default, serialize, to_js_error};

/// Normalize raw text into its canonical form
#[wasm_bindgen(js_name = normalizePhrase)]
pub fn normalize_phrase(text: &str) -> String {
    normalize(text)
}

/// Lay out a phrase; returns the resolved glyph groups
///
/// `config` is an optional layout configuration object.
#[wasm_bindgen(js_name = layoutPhrase)]
pub fn layout_phrase_js(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config: LayoutConfig = deserialize_or_default(config, "Invalid layout config")?;
    let resolved = layout_phrase(text, &config).map_err(|e| to_js_error("Layout failed", e))?;
    serialize(&resolved, "Serialization error")
}

/// Renders phrases with symbol images supplied by JavaScript
#[wasm_bindgen]
pub struct GlyphRenderer {
    config: EngineConfig,
    symbols: MemorySymbols,
}

#[wasm_bindgen]
impl GlyphRenderer {
    /// Create a renderer; `config` is an optional engine configuration object
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<GlyphRenderer, JsValue> {
        let config: EngineConfig = deserialize_or_default(config, "Invalid engine config")?;
        log::info!("GlyphRenderer created (glyph size {}px)", config.render.glyph_size);
        Ok(GlyphRenderer {
            config,
            symbols: MemorySymbols::new(),
        })
    }

    /// Register an encoded (PNG) symbol image under `name`
    #[wasm_bindgen(js_name = addSymbol)]
    pub fn add_symbol(&mut self, name: &str, bytes: &[u8]) -> Result<(), JsValue> {
        self.symbols
            .insert_encoded(name, bytes)
            .map_err(|e| to_js_error("Invalid symbol image", e))
    }

    #[wasm_bindgen(js_name = hasSymbol)]
    pub fn has_symbol(&self, name: &str) -> bool {
        self.symbols.contains(name)
    }

    #[wasm_bindgen(getter, js_name = symbolCount)]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Placement instructions for a phrase, without compositing
    #[wasm_bindgen(js_name = displayList)]
    pub fn display_list(&self, text: &str) -> Result<JsValue, JsValue> {
        let list = display_list_for(text, &self.config).map_err(|e| to_js_error("Layout failed", e))?;
        serialize(&list, "Serialization error")
    }

    /// Render a phrase to a `data:image/png;base64,` URL
    #[wasm_bindgen(js_name = renderDataUrl)]
    pub fn render_data_url(&self, text: &str) -> Result<String, JsValue> {
        render_data_url(text, &self.config, &self.symbols).map_err(|e| to_js_error("Render failed", e))
    }
}
