//! Compositor - folds a DisplayList into a raster image
//!
//! Each sprite is assembled in its own frame (body plus caps and connectors),
//! rotated, and alpha-composited onto the canvas; diacritics are stamped
//! afterwards. A missing or broken symbol only drops that one decoration.

use image::{imageops, RgbaImage};
use std::sync::Arc;
use super::display_list::{DisplayList, Sprite};
use super::symbols::SymbolSource;

/// Alpha-compositing primitive
pub trait Renderer {
    /// Draw `image`, rotated counter-clockwise by `quarter_turns`, with its top-left at (x, y)
    fn compose(&self, canvas: &mut RgbaImage, image: &RgbaImage, quarter_turns: u8, x: i64, y: i64);
}

/// Source-over compositing via `image::imageops::overlay`
#[derive(Clone, Copy, Debug, Default)]
pub struct AlphaRenderer;

impl Renderer for AlphaRenderer {
    fn compose(&self, canvas: &mut RgbaImage, image: &RgbaImage, quarter_turns: u8, x: i64, y: i64) {
        if quarter_turns % 4 == 0 {
            imageops::overlay(canvas, image, x, y);
        } else {
            imageops::overlay(canvas, &rotate_quarter_turns(image, quarter_turns), x, y);
        }
    }
}

/// Rotate counter-clockwise by whole quarter turns
pub fn rotate_quarter_turns(image: &RgbaImage, quarter_turns: u8) -> RgbaImage {
    match quarter_turns % 4 {
        1 => imageops::rotate270(image),
        2 => imageops::rotate180(image),
        3 => imageops::rotate90(image),
        _ => image.clone(),
    }
}

/// Result of compositing a display list
#[derive(Debug, Clone)]
pub struct Composition {
    pub image: RgbaImage,

    /// Symbols that could not be loaded and were skipped
    pub skipped: Vec<String>,
}

/// Stateless compositing step over a display list
pub struct Compositor<'a, S: SymbolSource + ?Sized, R: Renderer = AlphaRenderer> {
    symbols: &'a S,
    renderer: R,
}

impl<'a, S: SymbolSource + ?Sized> Compositor<'a, S, AlphaRenderer> {
    pub fn new(symbols: &'a S) -> Self {
        Self::with_renderer(symbols, AlphaRenderer)
    }
}

impl<'a, S: SymbolSource + ?Sized, R: Renderer> Compositor<'a, S, R> {
    pub fn with_renderer(symbols: &'a S, renderer: R) -> Self {
        Self { symbols, renderer }
    }

    /// Composite every sprite onto a transparent canvas
    pub fn render(&self, list: &DisplayList) -> Composition {
        let start = Composition {
            image: RgbaImage::new(list.width, list.height),
            skipped: Vec::new(),
        };

        let composition = list.sprites.iter().fold(start, |mut acc, sprite| {
            self.draw_sprite(&mut acc, sprite);
            acc
        });

        if !composition.skipped.is_empty() {
            log::warn!(
                "rendered {}x{} canvas with {} missing symbol(s): {}",
                list.width,
                list.height,
                composition.skipped.len(),
                composition.skipped.join(", ")
            );
        }
        composition
    }

    fn draw_sprite(&self, acc: &mut Composition, sprite: &Sprite) {
        if let Some(body) = self.assemble_body(acc, sprite) {
            self.renderer
                .compose(&mut acc.image, &body, sprite.quarter_turns, sprite.x, sprite.y);
        }

        for stamp in &sprite.diacritics {
            if let Some(image) = self.load(acc, &stamp.symbol) {
                self.renderer.compose(&mut acc.image, &image, 0, stamp.x, stamp.y);
            }
        }
    }

    /// Body with its caps and connectors, still unrotated
    fn assemble_body(&self, acc: &mut Composition, sprite: &Sprite) -> Option<RgbaImage> {
        let mut body = self.load(acc, &sprite.body)?.as_ref().clone();

        for layer in &sprite.overlays {
            if let Some(image) = self.load(acc, &layer.symbol) {
                self.renderer.compose(&mut body, &image, layer.quarter_turns, 0, 0);
            }
        }
        Some(body)
    }

    fn load(&self, acc: &mut Composition, name: &str) -> Option<Arc<RgbaImage>> {
        match self.symbols.load_symbol(name) {
            Ok(image) => Some(image),
            Err(err) => {
                log::warn!("skipping symbol: {}", err);
                acc.skipped.push(name.to_string());
                None
            }
        }
    }
}
