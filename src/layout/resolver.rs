//! Layout Resolver - assigns grid cells, rotations, decorations and diacritic offsets
//!
//! This module takes the glyph groups produced by the segmenter and resolves,
//! in one forward pass, every geometric attribute the compositor needs. Each
//! group's layout depends only on its own index, its boundary flags and the
//! fixed tables in `tables.rs`.

use serde::{Serialize, Deserialize};
use super::tables::{self, TemplateKind};
use crate::errors::LayoutError;
use crate::models::*;

/// How the template for following diacritics is chosen
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AfterTemplateSelector {
    /// Multiple variant when the group ends a word (an end cap needs clearance)
    #[default]
    CapPresence,
    /// Multiple variant when more than one diacritic follows the anchor
    VowelCount,
}

/// Configuration for layout calculations
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct LayoutConfig {
    pub after_template_selector: AfterTemplateSelector,
}

/// Resolves glyph groups into positioned, decorated groups
pub struct LayoutResolver {
    config: LayoutConfig,
}

impl LayoutResolver {
    /// Create a new resolver with the given configuration
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Resolve every group in stream order
    pub fn resolve(&self, groups: &[GlyphGroup]) -> Result<Vec<ResolvedGroup>, LayoutError> {
        let resolved = groups
            .iter()
            .enumerate()
            .map(|(position, group)| {
                if group.index != position {
                    return Err(violation(
                        position,
                        format!("group carries index {}", group.index),
                    ));
                }
                self.resolve_group(group)
            })
            .collect::<Result<Vec<_>, _>>()?;

        check_grid(&resolved)?;
        log::debug!("resolve: {} groups laid out", resolved.len());
        Ok(resolved)
    }

    /// Resolve a single group
    fn resolve_group(&self, group: &GlyphGroup) -> Result<ResolvedGroup, LayoutError> {
        let index = group.index;

        if !group.anchor.is_anchor() {
            return Err(violation(index, format!("anchor {:?} is not a body symbol", group.anchor)));
        }

        let (row, column) = tables::grid_position(index);
        let angle = tables::body_angle(index);

        let start = if group.is_word_start {
            SideDecoration::Cap(tables::start_angle(index))
        } else {
            SideDecoration::Connector(tables::start_angle(index))
        };
        let end = if group.is_word_end {
            SideDecoration::Cap(tables::end_angle(index))
        } else {
            SideDecoration::Connector(tables::end_angle(index))
        };

        let diacritics = self.place_diacritics(group, angle, end)?;

        Ok(ResolvedGroup {
            group: group.clone(),
            row,
            column,
            angle,
            start,
            end,
            diacritics,
        })
    }

    /// Position the diacritics on both sides of the anchor
    fn place_diacritics(
        &self,
        group: &GlyphGroup,
        angle: Angle,
        end: SideDecoration,
    ) -> Result<Vec<DiacriticPlacement>, LayoutError> {
        let mut placements = Vec::with_capacity(group.leading.len() + group.trailing.len());

        // Template entries run outward from the anchor, so the preceding
        // diacritic read last sits in entry 0.
        let before = offsets(group, angle, TemplateKind::Before, group.leading.len())?;
        for (token, offset) in group.leading.iter().zip(before.iter().rev()) {
            placements.push(DiacriticPlacement {
                token: *token,
                side: DiacriticSide::Before,
                offset: *offset,
            });
        }

        let kind = self.after_kind(group.trailing.len(), end);
        let after = offsets(group, angle, kind, group.trailing.len())?;
        for (token, offset) in group.trailing.iter().zip(after.iter()) {
            placements.push(DiacriticPlacement {
                token: *token,
                side: DiacriticSide::After,
                offset: *offset,
            });
        }

        Ok(placements)
    }

    fn after_kind(&self, count: usize, end: SideDecoration) -> TemplateKind {
        let multiple = match self.config.after_template_selector {
            AfterTemplateSelector::CapPresence => end.is_cap(),
            AfterTemplateSelector::VowelCount => count > 1,
        };
        if multiple {
            TemplateKind::AfterMultiple
        } else {
            TemplateKind::AfterSingle
        }
    }
}

impl Default for LayoutResolver {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn offsets(
    group: &GlyphGroup,
    angle: Angle,
    kind: TemplateKind,
    count: usize,
) -> Result<Vec<Offset>, LayoutError> {
    tables::template_offsets(angle, kind, count).ok_or_else(|| {
        violation(
            group.index,
            format!("{} diacritics for {:?} template (max {})", count, kind, MAX_CLUSTER),
        )
    })
}

/// No two groups may share a grid cell, and rows never decrease
fn check_grid(resolved: &[ResolvedGroup]) -> Result<(), LayoutError> {
    for pair in resolved.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        if b.row < a.row || (a.row, a.column) == (b.row, b.column) {
            return Err(violation(
                b.index(),
                format!("cell ({}, {}) follows ({}, {})", b.row, b.column, a.row, a.column),
            ));
        }
    }
    Ok(())
}

fn violation(index: usize, detail: String) -> LayoutError {
    LayoutError::InvariantViolation { index, detail }
}
