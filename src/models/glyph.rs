//! Glyph groups and their resolved layout
//!
//! A `GlyphGroup` is produced by the segmenter: one anchor token with up to
//! three diacritics on either side, plus word-boundary flags. The layout
//! resolver turns each group into a `ResolvedGroup` carrying grid position,
//! rotation, cap/connector decorations and diacritic offsets.

use serde::{Deserialize, Serialize};
use crate::layout::tables::grid_position;
use super::elements::PhoneticToken;

/// Maximum number of diacritics on one side of an anchor
pub const MAX_CLUSTER: usize = 3;

/// Rotation of a symbol in counter-clockwise quarter turns
///
/// `First` is the body rotation reserved for the very first glyph group. It
/// draws like `Quarter0` but selects its own diacritic edges.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde_repr::Serialize_repr, serde_repr::Deserialize_repr)]
pub enum Angle {
    Quarter0 = 0,
    Quarter1 = 1,
    Quarter2 = 2,
    Quarter3 = 3,
    First = 4,
}

impl Angle {
    /// Number of counter-clockwise quarter turns to apply when drawing
    pub fn quarter_turns(self) -> u8 {
        match self {
            Angle::First => 0,
            other => other as u8,
        }
    }

    pub fn degrees(self) -> u32 {
        u32::from(self.quarter_turns()) * 90
    }
}

/// One glyph group as split from the normalized text
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GlyphGroup {
    /// Position in the group sequence (0-based)
    pub index: usize,

    /// Diacritics written before the anchor, in reading order
    pub leading: Vec<PhoneticToken>,

    /// Consonant, blank placeholder or punctuation
    pub anchor: PhoneticToken,

    /// Diacritics written after the anchor, in reading order
    pub trailing: Vec<PhoneticToken>,

    /// Adjacent to a space, separator or string start on the left
    pub is_word_start: bool,

    /// Adjacent to a space, separator or string end on the right
    pub is_word_end: bool,

    /// Byte range of the match in the normalized text
    pub span: (usize, usize),
}

impl GlyphGroup {
    /// All tokens in reading order
    pub fn tokens(&self) -> impl Iterator<Item = &PhoneticToken> {
        self.leading
            .iter()
            .chain(std::iter::once(&self.anchor))
            .chain(self.trailing.iter())
    }

    /// The group's text, rebuilt from its tokens
    pub fn text(&self) -> String {
        self.tokens().map(PhoneticToken::as_char).collect()
    }

    pub fn row(&self) -> usize {
        grid_position(self.index).0
    }

    pub fn column(&self) -> usize {
        grid_position(self.index).1
    }

    /// Blank and punctuation groups stand alone
    pub fn is_separator(&self) -> bool {
        self.anchor.is_separator()
    }

    /// A placeholder with no diacritics leaves no visual trace
    pub fn is_pure_placeholder(&self) -> bool {
        self.anchor == PhoneticToken::Blank && self.leading.is_empty() && self.trailing.is_empty()
    }
}

/// What a group draws on one side: a cap at a word boundary, otherwise a connector
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "kind", content = "angle", rename_all = "snake_case")]
pub enum SideDecoration {
    Cap(Angle),
    Connector(Angle),
}

impl SideDecoration {
    pub fn angle(self) -> Angle {
        match self {
            SideDecoration::Cap(angle) | SideDecoration::Connector(angle) => angle,
        }
    }

    pub fn is_cap(self) -> bool {
        matches!(self, SideDecoration::Cap(_))
    }

    pub fn cap_angle(self) -> Option<Angle> {
        match self {
            SideDecoration::Cap(angle) => Some(angle),
            SideDecoration::Connector(_) => None,
        }
    }

    pub fn connector_angle(self) -> Option<Angle> {
        match self {
            SideDecoration::Connector(angle) => Some(angle),
            SideDecoration::Cap(_) => None,
        }
    }
}

/// Which side of the anchor a diacritic sits on
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiacriticSide {
    Before,
    After,
}

/// 2D offset measured in diacritic units from the body's top-left corner
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Scale to pixels
    pub fn scaled(self, unit: f32) -> (f32, f32) {
        (self.x * unit, self.y * unit)
    }
}

/// A diacritic with its position relative to the group body
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DiacriticPlacement {
    pub token: PhoneticToken,
    pub side: DiacriticSide,
    pub offset: Offset,
}

impl DiacriticPlacement {
    pub fn symbol_name(&self) -> String {
        self.token.symbol_name()
    }
}

/// A glyph group with every layout attribute resolved
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResolvedGroup {
    pub group: GlyphGroup,
    pub row: usize,
    pub column: usize,
    pub angle: Angle,
    pub start: SideDecoration,
    pub end: SideDecoration,
    pub diacritics: Vec<DiacriticPlacement>,
}

impl ResolvedGroup {
    pub fn index(&self) -> usize {
        self.group.index
    }

    pub fn start_cap_angle(&self) -> Option<Angle> {
        self.start.cap_angle()
    }

    pub fn end_cap_angle(&self) -> Option<Angle> {
        self.end.cap_angle()
    }

    pub fn start_connect_angle(&self) -> Option<Angle> {
        self.start.connector_angle()
    }

    pub fn end_connect_angle(&self) -> Option<Angle> {
        self.end.connector_angle()
    }

    /// Symbol name of the group body
    pub fn body_symbol(&self) -> String {
        self.group.anchor.symbol_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(index: usize) -> GlyphGroup {
        GlyphGroup {
            index,
            leading: vec![PhoneticToken::Vowel('o')],
            anchor: PhoneticToken::Consonant('t'),
            trailing: vec![PhoneticToken::Repeat, PhoneticToken::Vowel('a')],
            is_word_start: true,
            is_word_end: true,
            span: (0, 4),
        }
    }

    #[test]
    fn test_group_text_is_reading_order() {
        assert_eq!(group(0).text(), "ot+a");
    }

    #[test]
    fn test_serpentine_positions() {
        let positions: Vec<(usize, usize)> =
            (0..6).map(|i| (group(i).row(), group(i).column())).collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_first_angle_draws_unrotated() {
        assert_eq!(Angle::First.quarter_turns(), 0);
        assert_eq!(Angle::Quarter3.degrees(), 270);
    }

    #[test]
    fn test_angle_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Angle::First).unwrap(), "4");
        let angle: Angle = serde_json::from_str("2").unwrap();
        assert_eq!(angle, Angle::Quarter2);
    }

    #[test]
    fn test_side_decoration_accessors() {
        let cap = SideDecoration::Cap(Angle::Quarter1);
        assert!(cap.is_cap());
        assert_eq!(cap.cap_angle(), Some(Angle::Quarter1));
        assert_eq!(cap.connector_angle(), None);

        let connector = SideDecoration::Connector(Angle::Quarter3);
        assert_eq!(connector.cap_angle(), None);
        assert_eq!(connector.connector_angle(), Some(Angle::Quarter3));
    }

    #[test]
    fn test_pure_placeholder() {
        let mut g = group(0);
        assert!(!g.is_pure_placeholder());
        g.anchor = PhoneticToken::Blank;
        g.leading.clear();
        g.trailing.clear();
        assert!(g.is_pure_placeholder());
        assert!(g.is_separator());
    }
}
