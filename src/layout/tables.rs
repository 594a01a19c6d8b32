//! Fixed geometry tables for glyph layout
//!
//! Every per-group attribute is a pure function of the group index and these
//! tables. Cycles are indexed by `index % 4`; the first group has its own
//! body angle and cap angles.
//!
//! Diacritic templates are expressed as slots along an edge of the body
//! (`along`) and pushed away from it (`depth`), in diacritic units. Each body
//! angle maps to the pair of edges the incoming and outgoing strokes use, so
//! a template plus an angle yields concrete offsets.

use serde::{Deserialize, Serialize};
use crate::models::glyph::{Angle, Offset, MAX_CLUSTER};

/// Body rotation cycle for groups after the first
pub const ANGLE_CYCLE: [Angle; 4] = [Angle::Quarter1, Angle::Quarter3, Angle::Quarter2, Angle::Quarter0];

/// Serpentine column cycle
pub const COLUMN_CYCLE: [usize; 4] = [0, 1, 1, 0];

pub const START_CAP_CYCLE: [Angle; 4] = [Angle::Quarter2, Angle::Quarter3, Angle::Quarter2, Angle::Quarter1];
pub const END_CAP_CYCLE: [Angle; 4] = [Angle::Quarter1, Angle::Quarter0, Angle::Quarter3, Angle::Quarter0];

pub const FIRST_ANGLE: Angle = Angle::First;
pub const FIRST_START_ANGLE: Angle = Angle::Quarter0;
pub const FIRST_END_ANGLE: Angle = Angle::Quarter1;

/// Side length of a glyph body in diacritic units
pub const BODY_UNITS: f32 = 5.0;

/// Grid (row, column) of the group at `index`
pub fn grid_position(index: usize) -> (usize, usize) {
    (index / 2, COLUMN_CYCLE[index % 4])
}

pub fn body_angle(index: usize) -> Angle {
    if index == 0 {
        FIRST_ANGLE
    } else {
        ANGLE_CYCLE[index % 4]
    }
}

/// Angle shared by the start cap and the start connector
pub fn start_angle(index: usize) -> Angle {
    if index == 0 {
        FIRST_START_ANGLE
    } else {
        START_CAP_CYCLE[index % 4]
    }
}

/// Angle shared by the end cap and the end connector
pub fn end_angle(index: usize) -> Angle {
    if index == 0 {
        FIRST_END_ANGLE
    } else {
        END_CAP_CYCLE[index % 4]
    }
}

/// An edge of the (already rotated) glyph body
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Offset of a slot on this edge, in diacritic units from the body origin
    pub fn place(self, slot: Slot) -> Offset {
        let far = BODY_UNITS - 1.0;
        match self {
            Edge::Top => Offset::new(slot.along, -1.0 - slot.depth),
            Edge::Right => Offset::new(BODY_UNITS + slot.depth, slot.along),
            Edge::Bottom => Offset::new(far - slot.along, BODY_UNITS + slot.depth),
            Edge::Left => Offset::new(-1.0 - slot.depth, far - slot.along),
        }
    }
}

/// Edges carrying the diacritics written before and after the anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgePair {
    pub before: Edge,
    pub after: Edge,
}

/// Edge mapping keyed by body angle
pub fn edges_for(angle: Angle) -> EdgePair {
    match angle {
        Angle::First => EdgePair { before: Edge::Left, after: Edge::Right },
        Angle::Quarter0 => EdgePair { before: Edge::Right, after: Edge::Bottom },
        Angle::Quarter1 => EdgePair { before: Edge::Top, after: Edge::Right },
        Angle::Quarter2 => EdgePair { before: Edge::Top, after: Edge::Left },
        Angle::Quarter3 => EdgePair { before: Edge::Left, after: Edge::Bottom },
    }
}

/// Position on an edge: distance along it and distance out from it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slot {
    pub along: f32,
    pub depth: f32,
}

const fn slot(along: f32, depth: f32) -> Slot {
    Slot { along, depth }
}

/// Template family for one side of the anchor
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    /// Diacritics preceding the anchor
    Before,
    /// Following diacritics, compact (mid-word)
    AfterSingle,
    /// Following diacritics with clearance for an end cap
    AfterMultiple,
}

// Templates indexed by diacritic count - 1; entry 0 sits nearest the anchor.
const BEFORE_TEMPLATES: [&[Slot]; MAX_CLUSTER] = [
    &[slot(1.0, 0.0)],
    &[slot(1.0, 0.0), slot(0.0, 0.0)],
    &[slot(1.0, 0.0), slot(0.0, 0.0), slot(0.0, 1.0)],
];

const AFTER_SINGLE_TEMPLATES: [&[Slot]; MAX_CLUSTER] = [
    &[slot(3.0, 0.0)],
    &[slot(3.0, 0.0), slot(4.0, 0.0)],
    &[slot(3.0, 0.0), slot(4.0, 0.0), slot(4.0, 1.0)],
];

const AFTER_MULTIPLE_TEMPLATES: [&[Slot]; MAX_CLUSTER] = [
    &[slot(3.5, 1.0)],
    &[slot(3.5, 1.0), slot(4.5, 1.0)],
    &[slot(3.5, 1.0), slot(4.5, 1.0), slot(4.5, 2.0)],
];

/// Slots for `count` diacritics of the given kind, or `None` if the count is out of range
pub fn template(kind: TemplateKind, count: usize) -> Option<&'static [Slot]> {
    let family = match kind {
        TemplateKind::Before => &BEFORE_TEMPLATES,
        TemplateKind::AfterSingle => &AFTER_SINGLE_TEMPLATES,
        TemplateKind::AfterMultiple => &AFTER_MULTIPLE_TEMPLATES,
    };
    count.checked_sub(1).and_then(|i| family.get(i)).copied()
}

/// Concrete offsets for `count` diacritics around a body at `angle`
pub fn template_offsets(angle: Angle, kind: TemplateKind, count: usize) -> Option<Vec<Offset>> {
    if count == 0 {
        return Some(Vec::new());
    }

    let edges = edges_for(angle);
    let edge = match kind {
        TemplateKind::Before => edges.before,
        TemplateKind::AfterSingle | TemplateKind::AfterMultiple => edges.after,
    };
    template(kind, count).map(|slots| slots.iter().map(|s| edge.place(*s)).collect())
}
