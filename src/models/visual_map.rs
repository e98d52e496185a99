//! Correspondence between diagram cells and binding-list positions.
//!
//! The map is computed once against the reference layer and reused for every
//! other layer: a non-reference layer is rendered purely by indexing into its
//! own binding list at the positions the reference layer resolved.

use crate::keycodes::{self, KNOB_LEFT_ID, KNOB_RIGHT_ID, LAYER_TITLE_ID};
use crate::models::{KeymapLayer, KleDiagram};

/// Classification of a diagram cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// An ordinary key, correlated against the binding list.
    Key,
    /// The left (vertical) rotary encoder. Decorative, never correlated.
    KnobLeft,
    /// The right (horizontal) rotary encoder. Decorative, never correlated.
    KnobRight,
    /// The layer-title placeholder. Decorative, never correlated.
    LayerTitle,
}

impl CellKind {
    /// Classifies a cell from its canonical id.
    #[must_use]
    pub fn from_canonical(id: &str) -> Self {
        match id {
            KNOB_LEFT_ID => Self::KnobLeft,
            KNOB_RIGHT_ID => Self::KnobRight,
            LAYER_TITLE_ID => Self::LayerTitle,
            _ => Self::Key,
        }
    }

    /// Whether this cell participates in binding correlation.
    #[must_use]
    pub const fn is_key(self) -> bool {
        matches!(self, Self::Key)
    }
}

/// One flattened diagram legend with its derived identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualKey {
    /// Row index in the diagram.
    pub row: usize,
    /// Item index within the row (style blocks occupy indices of their own).
    pub col: usize,
    /// Raw legend text from the template.
    pub label: String,
    /// Canonical key identity derived from the label.
    pub canonical: String,
    /// Cell classification.
    pub kind: CellKind,
}

/// A diagram cell that found no counterpart in the reference binding list.
///
/// Non-fatal: the cell renders blank on every layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedCell {
    /// Flat legend index of the cell.
    pub index: usize,
    /// Raw legend text.
    pub label: String,
    /// Canonical id the matcher searched for.
    pub canonical: String,
}

/// The visual/logical index map for one diagram and one reference layer.
#[derive(Debug, Clone, Default)]
pub struct VisualLogicalMap {
    /// Flattened legends in row-major order.
    pub visual_keys: Vec<VisualKey>,
    /// Per legend: the claimed reference binding index, or `None`.
    /// Decorative cells are always `None`. Injective over `Some` entries.
    pub entries: Vec<Option<usize>>,
    /// Key cells that claimed no binding.
    pub unmapped: Vec<UnmappedCell>,
}

impl VisualLogicalMap {
    /// Builds the map by correlating the diagram against the reference layer.
    ///
    /// Cells are visited in row-major, then-column order; decorative cells
    /// are skipped. Each key cell claims the first not-yet-claimed binding
    /// whose canonical id equals its own, so duplicate ids on both sides are
    /// paired purely by order of appearance.
    #[must_use]
    pub fn build(diagram: &KleDiagram, reference: &KeymapLayer) -> Self {
        let visual_keys: Vec<VisualKey> = diagram
            .legends()
            .map(|(row, col, label)| {
                let canonical = keycodes::canonical_id_for_label(label);
                let kind = CellKind::from_canonical(&canonical);
                VisualKey {
                    row,
                    col,
                    label: label.to_string(),
                    canonical,
                    kind,
                }
            })
            .collect();

        let binding_ids: Vec<String> = reference
            .bindings
            .iter()
            .map(|binding| keycodes::canonical_id_for_keycode(binding))
            .collect();

        let mut entries = vec![None; visual_keys.len()];
        let mut claimed = vec![false; binding_ids.len()];
        let mut unmapped = Vec::new();

        for (index, key) in visual_keys.iter().enumerate() {
            if !key.kind.is_key() {
                continue;
            }

            let slot = binding_ids
                .iter()
                .enumerate()
                .find(|(j, id)| !claimed[*j] && **id == key.canonical)
                .map(|(j, _)| j);

            match slot {
                Some(j) => {
                    claimed[j] = true;
                    entries[index] = Some(j);
                }
                None => unmapped.push(UnmappedCell {
                    index,
                    label: key.label.clone(),
                    canonical: key.canonical.clone(),
                }),
            }
        }

        Self {
            visual_keys,
            entries,
            unmapped,
        }
    }

    /// Number of key cells that claimed a binding.
    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    /// Total number of flattened legends, decorative cells included.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.visual_keys.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KleItem;

    fn diagram_of(labels: &[&[&str]]) -> KleDiagram {
        KleDiagram {
            rows: labels
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| KleItem::Legend((*label).to_string()))
                        .collect()
                })
                .collect(),
        }
    }

    fn layer_of(bindings: &[&str]) -> KeymapLayer {
        KeymapLayer::new(
            "QWERTY",
            bindings.iter().map(|b| (*b).to_string()).collect(),
        )
    }

    #[test]
    fn test_build_matches_by_canonical_id() {
        let diagram = diagram_of(&[&["Esc", "2 @"], &["Q", "Enter"]]);
        let layer = layer_of(&["KC_ESC", "KC_2", "KC_Q", "KC_ENT"]);

        let map = VisualLogicalMap::build(&diagram, &layer);
        assert_eq!(map.entries, vec![Some(0), Some(1), Some(2), Some(3)]);
        assert!(map.unmapped.is_empty());
    }

    #[test]
    fn test_build_is_injective_with_duplicates() {
        // Two cells and two bindings normalize to the same id; order pairs them.
        let diagram = diagram_of(&[&["LShift", "Q", "LShift"]]);
        let layer = layer_of(&["KC_LSFT", "KC_Q", "KC_LSFT"]);

        let map = VisualLogicalMap::build(&diagram, &layer);
        assert_eq!(map.entries, vec![Some(0), Some(1), Some(2)]);

        let mut seen: Vec<usize> = map.entries.iter().flatten().copied().collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), map.mapped_count(), "map must be injective");
    }

    #[test]
    fn test_build_skips_decorative_cells() {
        let diagram = diagram_of(&[&["Qwerty", "🔘\nVertical Scroll", "Q"]]);
        let layer = layer_of(&["KC_Q"]);

        let map = VisualLogicalMap::build(&diagram, &layer);
        assert_eq!(map.entries, vec![None, None, Some(0)]);
        assert!(map.unmapped.is_empty());
        assert_eq!(map.visual_keys[0].kind, CellKind::LayerTitle);
        assert_eq!(map.visual_keys[1].kind, CellKind::KnobLeft);
    }

    #[test]
    fn test_build_reports_unmapped_cells() {
        let diagram = diagram_of(&[&["Q", "W"]]);
        let layer = layer_of(&["KC_Q"]);

        let map = VisualLogicalMap::build(&diagram, &layer);
        assert_eq!(map.entries, vec![Some(0), None]);
        assert_eq!(map.unmapped.len(), 1);
        assert_eq!(map.unmapped[0].label, "W");
        assert_eq!(map.unmapped[0].canonical, "W");
        assert_eq!(map.mapped_count(), 1);
        assert_eq!(map.total_count(), 2);
    }

    #[test]
    fn test_claimed_binding_is_not_reused() {
        // First Q claims the only KC_Q; the second stays unmapped.
        let diagram = diagram_of(&[&["Q", "Q"]]);
        let layer = layer_of(&["KC_Q", "KC_W"]);

        let map = VisualLogicalMap::build(&diagram, &layer);
        assert_eq!(map.entries, vec![Some(0), None]);
        assert_eq!(map.unmapped.len(), 1);
    }
}
