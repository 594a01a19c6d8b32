//! Display List for glyph compositing
//!
//! This module defines the immutable placement instructions derived from a
//! resolved layout. The DisplayList contains canvas dimensions and, for each
//! glyph group, every symbol to draw with its rotation and pixel offset, so
//! the compositor only has to fold over it.

use serde::{Serialize, Deserialize};
use crate::models::elements::{CAP_SYMBOL, CONNECT_SYMBOL};
use crate::models::*;

/// Configuration for pixel geometry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of one grid cell (and of a body symbol) in pixels
    pub glyph_size: u32,

    /// Pixel size of one diacritic unit
    pub diacritic_unit: u32,

    /// Fraction of a cell between the cell corner and the body
    pub body_inset: f32,

    /// Extra cells added to each canvas dimension for caps
    pub canvas_margin: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glyph_size: 210,
            diacritic_unit: 42,
            body_inset: 0.25,
            canvas_margin: 0.5,
        }
    }
}

/// Complete set of placement instructions for one phrase
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Canvas width in pixels
    pub width: u32,

    /// Canvas height in pixels
    pub height: u32,

    /// One sprite per glyph group, in stream order
    pub sprites: Vec<Sprite>,
}

/// A glyph body with its decorations and diacritics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sprite {
    pub group_index: usize,

    /// Symbol name of the body
    pub body: String,

    /// Rotation applied to the assembled body (caps and connectors included)
    pub quarter_turns: u8,

    /// Canvas position of the body's top-left corner
    pub x: i64,
    pub y: i64,

    /// Caps and connectors drawn onto the body before it is rotated
    pub overlays: Vec<Layer>,

    /// Diacritics drawn directly onto the canvas
    pub diacritics: Vec<Stamp>,
}

/// A symbol drawn onto the body, in the body's own frame
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub symbol: String,
    pub quarter_turns: u8,
}

/// An unrotated symbol at an absolute canvas position
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Stamp {
    pub symbol: String,
    pub x: i64,
    pub y: i64,
}

impl DisplayList {
    /// Build the display list for a resolved layout
    pub fn build(groups: &[ResolvedGroup], config: &RenderConfig) -> Self {
        let (width, height) = canvas_size(groups, config);
        let sprites = groups.iter().map(|g| build_sprite(g, config)).collect();
        DisplayList { width, height, sprites }
    }

    /// Every symbol name the list refers to, in drawing order
    pub fn symbols(&self) -> Vec<&str> {
        self.sprites
            .iter()
            .flat_map(|s| {
                std::iter::once(s.body.as_str())
                    .chain(s.overlays.iter().map(|l| l.symbol.as_str()))
                    .chain(s.diacritics.iter().map(|d| d.symbol.as_str()))
            })
            .collect()
    }
}

/// Canvas size from the largest row and column, plus the cap margin
pub fn canvas_size(groups: &[ResolvedGroup], config: &RenderConfig) -> (u32, u32) {
    let max_row = groups.iter().map(|g| g.row).max().unwrap_or(0);
    let max_column = groups.iter().map(|g| g.column).max().unwrap_or(0);
    let size = config.glyph_size as f32;

    let width = ((max_column + 1) as f32 + config.canvas_margin) * size;
    let height = ((max_row + 1) as f32 + config.canvas_margin) * size;
    (width as u32, height as u32)
}

fn build_sprite(group: &ResolvedGroup, config: &RenderConfig) -> Sprite {
    let size = config.glyph_size as f32;
    let x = (group.column as f32 + config.body_inset) * size;
    let y = (group.row as f32 + config.body_inset) * size;

    // Separators carry decorations in the layout but are drawn bare
    let overlays = if group.group.is_separator() {
        Vec::new()
    } else {
        [group.start, group.end].iter().map(overlay_for).collect()
    };

    let unit = config.diacritic_unit as f32;
    let diacritics = group
        .diacritics
        .iter()
        .map(|d| {
            let (dx, dy) = d.offset.scaled(unit);
            Stamp {
                symbol: d.symbol_name(),
                x: (x + dx) as i64,
                y: (y + dy) as i64,
            }
        })
        .collect();

    Sprite {
        group_index: group.index(),
        body: group.body_symbol(),
        quarter_turns: group.angle.quarter_turns(),
        x: x as i64,
        y: y as i64,
        overlays,
        diacritics,
    }
}

fn overlay_for(decoration: &SideDecoration) -> Layer {
    let symbol = if decoration.is_cap() { CAP_SYMBOL } else { CONNECT_SYMBOL };
    Layer {
        symbol: symbol.to_string(),
        quarter_turns: decoration.angle().quarter_turns(),
    }
}
