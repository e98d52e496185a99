//! Layer rendering orchestration.
//!
//! Builds the visual/logical map from the reference layer, then renders
//! every layer of the keymap (plus the synthetic blank layer) against the
//! shared template. Output rows are constructed fresh from the template;
//! the template itself is never mutated.

use crate::constants::REFERENCE_LAYER;
use crate::error::{Error, Result};
use crate::keycodes::display::title_case;
use crate::models::{Keymap, KeymapLayer, KleDiagram, KleItem, KleProps, UnmappedCell, VisualLogicalMap};
use crate::parser;
use crate::render::legend::synthesize_cell;

/// Layer tag → output file stem for the established layer set; unknown tags
/// fall back to the title-cased tag.
static LAYER_FILE_STEMS: &[(&str, &str)] = &[
    ("QWERTY", "Qwerty_Gemini"),
    ("LOWER", "Lower"),
    ("RAISE", "Raise"),
    ("GEMINI", "Gemini"),
    ("GAME", "Game"),
    ("NUMPAD", "Numpad"),
    ("ADJUST", "Adjust"),
    ("BRUSH", "Brush"),
    ("MENU", "Menu"),
    ("GAME_N", "Game_N"),
    ("GAME_R", "Game_R"),
    ("GAME_2", "Game_2"),
    ("FN", "Fn"),
    ("RREZ", "Rrez"),
    ("SET", "Set"),
];

/// One rendered layer, ready for serialization.
#[derive(Debug, Clone)]
pub struct RenderedLayer {
    /// Layer tag from the keymap source (or the synthetic blank tag).
    pub name: String,
    /// Output identity from the renaming table.
    pub file_stem: String,
    /// The populated diagram.
    pub diagram: KleDiagram,
}

/// Mapping diagnostics for one run.
#[derive(Debug, Clone, Default)]
pub struct MappingReport {
    /// Key cells that claimed a reference binding.
    pub mapped: usize,
    /// Total flattened legends, decorative cells included.
    pub total: usize,
    /// Cells with no counterpart in the reference binding list.
    pub unmapped: Vec<UnmappedCell>,
}

/// Result of one pipeline run: every layer rendered, plus diagnostics.
#[derive(Debug, Clone)]
pub struct RenderOutput {
    /// Rendered layers in keymap source order, blank layer last when added.
    pub layers: Vec<RenderedLayer>,
    /// Mapping diagnostics from the reference layer correlation.
    pub report: MappingReport,
}

/// Output file stem for a layer tag.
#[must_use]
pub fn layer_file_stem(tag: &str) -> String {
    LAYER_FILE_STEMS
        .iter()
        .find(|(name, _)| *name == tag)
        .map_or_else(|| title_case(tag), |(_, stem)| (*stem).to_string())
}

/// The whole pipeline as a pure function: diagram text and keymap text in,
/// one rendered diagram per layer out.
///
/// # Errors
///
/// Returns [`Error::MalformedLayout`] for an unparseable template and
/// [`Error::MissingReferenceLayer`] when the keymap lacks the reference
/// layer. No output is produced in either case.
pub fn generate_layer_diagrams(diagram_text: &str, keymap_text: &str) -> Result<RenderOutput> {
    let template = parser::parse_kle_str(diagram_text)?;
    let mut keymap = parser::parse_keymap_str(keymap_text)?;
    keymap.ensure_blank_layer();
    render_layers(&template, &keymap)
}

/// Renders every layer of a parsed keymap against a parsed template.
///
/// The reference layer's correlation is computed first and shared read-only
/// by all layers.
pub fn render_layers(template: &KleDiagram, keymap: &Keymap) -> Result<RenderOutput> {
    let reference = keymap
        .get(REFERENCE_LAYER)
        .ok_or_else(|| Error::MissingReferenceLayer(REFERENCE_LAYER.to_string()))?;

    let map = VisualLogicalMap::build(template, reference);

    let layers = keymap
        .layers
        .iter()
        .map(|layer| RenderedLayer {
            name: layer.name.clone(),
            file_stem: layer_file_stem(&layer.name),
            diagram: render_layer(template, &map, layer, layer.name == REFERENCE_LAYER),
        })
        .collect();

    Ok(RenderOutput {
        layers,
        report: MappingReport {
            mapped: map.mapped_count(),
            total: map.total_count(),
            unmapped: map.unmapped.clone(),
        },
    })
}

/// Renders one layer: each output row is built item by item from the
/// template row, pairing every legend with the style block preceding it.
fn render_layer(
    template: &KleDiagram,
    map: &VisualLogicalMap,
    layer: &KeymapLayer,
    is_reference: bool,
) -> KleDiagram {
    let mut flat_index = 0usize;

    let rows = template
        .rows
        .iter()
        .map(|row| {
            let mut out: Vec<KleItem> = Vec::with_capacity(row.len());
            let mut pending: Option<&KleProps> = None;

            for item in row {
                match item {
                    KleItem::Props(props) => {
                        // A style block not followed by another block waits
                        // for its legend; stacked blocks pass through.
                        if let Some(previous) = pending.replace(props) {
                            out.push(KleItem::Props(previous.clone()));
                        }
                    }
                    KleItem::Legend(_) => {
                        let key = &map.visual_keys[flat_index];
                        let entry = map.entries[flat_index];
                        let (text, props) =
                            synthesize_cell(key, pending.take(), entry, layer, is_reference);
                        if let Some(props) = props {
                            out.push(KleItem::Props(props));
                        }
                        out.push(KleItem::Legend(text));
                        flat_index += 1;
                    }
                }
            }

            // A trailing style block with no legend after it is kept as-is.
            if let Some(previous) = pending {
                out.push(KleItem::Props(previous.clone()));
            }

            out
        })
        .collect();

    KleDiagram { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::KeymapLayer;

    fn keymap_of(layers: &[(&str, &[&str])]) -> Keymap {
        Keymap {
            layers: layers
                .iter()
                .map(|(name, bindings)| {
                    KeymapLayer::new(
                        *name,
                        bindings.iter().map(|b| (*b).to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_layer_file_stem_table_and_fallback() {
        assert_eq!(layer_file_stem("QWERTY"), "Qwerty_Gemini");
        assert_eq!(layer_file_stem("LOWER"), "Lower");
        assert_eq!(layer_file_stem("RREZ"), "Rrez");
        assert_eq!(layer_file_stem("MACROS"), "Macros");
    }

    #[test]
    fn test_render_layers_requires_reference_layer() {
        let template = parser::parse_kle_str("[\"Q\"]").unwrap();
        let keymap = keymap_of(&[("LOWER", &["KC_Q"])]);

        assert!(matches!(
            render_layers(&template, &keymap),
            Err(Error::MissingReferenceLayer(_))
        ));
    }

    #[test]
    fn test_other_layers_reuse_reference_positions() {
        // The LOWER legend text must come from LOWER's own binding at the
        // position QWERTY resolved, never from re-deriving LOWER's labels.
        let template = parser::parse_kle_str("[\"Q\",\"W\"]").unwrap();
        let keymap = keymap_of(&[
            ("QWERTY", &["KC_Q", "KC_W"]),
            ("LOWER", &["KC_1", "KC_2"]),
        ]);

        let output = render_layers(&template, &keymap).unwrap();
        let lower = &output.layers[1].diagram;
        assert_eq!(lower.rows[0][0], KleItem::Legend("1".to_string()));
        assert_eq!(lower.rows[0][1], KleItem::Legend("2".to_string()));
    }

    #[test]
    fn test_template_is_not_mutated() {
        let template = parser::parse_kle_str("[{c:\"#cccccc\"},\"Q\"]").unwrap();
        let before = template.clone();
        let keymap = keymap_of(&[("QWERTY", &["KC_Q"])]);

        render_layers(&template, &keymap).unwrap();
        assert_eq!(template, before);
    }

    #[test]
    fn test_report_counts_unmapped_cells() {
        let template = parser::parse_kle_str("[\"Q\",\"W\",\"ZZ\"]").unwrap();
        let keymap = keymap_of(&[("QWERTY", &["KC_Q", "KC_W"])]);

        let output = render_layers(&template, &keymap).unwrap();
        assert_eq!(output.report.mapped, 2);
        assert_eq!(output.report.total, 3);
        assert_eq!(output.report.unmapped.len(), 1);
        assert_eq!(output.report.unmapped[0].label, "ZZ");
    }
}
