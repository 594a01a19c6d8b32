//! End-to-end pipeline: text in, image out
//!
//! normalize -> segment -> resolve -> display list -> composite -> encode.
//! Every stage is a pure function of its input; only the symbol source is
//! shared between calls.

use image::RgbaImage;
use crate::config::EngineConfig;
use crate::errors::ScriptError;
use crate::layout::{LayoutConfig, LayoutResolver};
use crate::models::ResolvedGroup;
use crate::parse::{normalize, segment};
use crate::renderers::{encode_data_url, Compositor, DisplayList, SymbolSource};

/// Normalize, segment and lay out a phrase
pub fn layout_phrase(text: &str, config: &LayoutConfig) -> Result<Vec<ResolvedGroup>, ScriptError> {
    let normalized = normalize(text);
    let groups = segment(&normalized)?;
    let resolved = LayoutResolver::new(config.clone()).resolve(&groups)?;
    Ok(resolved)
}

/// Build the display list for a phrase without touching any images
pub fn display_list_for(text: &str, config: &EngineConfig) -> Result<DisplayList, ScriptError> {
    let resolved = layout_phrase(text, &config.layout)?;
    Ok(DisplayList::build(&resolved, &config.render))
}

/// Render a phrase to an RGBA canvas
pub fn render_phrase<S: SymbolSource + ?Sized>(
    text: &str,
    config: &EngineConfig,
    symbols: &S,
) -> Result<RgbaImage, ScriptError> {
    let list = display_list_for(text, config)?;
    let composition = Compositor::new(symbols).render(&list);
    log::info!(
        "rendered {} glyph group(s) on {}x{} canvas",
        list.sprites.len(),
        list.width,
        list.height
    );
    Ok(composition.image)
}

/// Render a phrase to a `data:image/png;base64,` URL
pub fn render_data_url<S: SymbolSource + ?Sized>(
    text: &str,
    config: &EngineConfig,
    symbols: &S,
) -> Result<String, ScriptError> {
    let image = render_phrase(text, config, symbols)?;
    Ok(encode_data_url(&image)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SegmentError;
    use crate::renderers::MemorySymbols;

    #[test]
    fn test_empty_text_is_rejected_before_rendering() {
        let symbols = MemorySymbols::new();
        let err = render_phrase("   ", &EngineConfig::default(), &symbols).unwrap_err();
        assert!(matches!(err, ScriptError::Segment(SegmentError::EmptyInput)));
    }

    #[test]
    fn test_render_without_symbols_still_sizes_canvas() {
        let symbols = MemorySymbols::new();
        let image = render_phrase("tala", &EngineConfig::default(), &symbols).unwrap();
        assert_eq!(image.dimensions(), (525, 315));
    }

    #[test]
    fn test_layout_phrase_counts_groups() {
        let resolved = layout_phrase("Hello world.", &LayoutConfig::default()).unwrap();
        assert!(resolved.len() >= 4);
        assert_eq!(resolved.last().unwrap().body_symbol(), "stop");
    }
}
