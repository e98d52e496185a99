//! Legend synthesis for one (layer, cell) pair.
//!
//! Produces the final render text and style overrides for every cell kind:
//! layer titles, rotary encoders, and ordinary keys with their tap/hold
//! stacks, shifted-symbol annotations, and hold-color overrides.

use crate::keycodes::analysis::{analyze_keycode, KeyAnalysis};
use crate::keycodes::display::{icon_or_label, layer_title, shifted_symbol};
use crate::models::{CellKind, KeymapLayer, KleProps, VisualKey};
use serde_json::{json, Value};

/// Text color applied to the primary legend when a hold override is active.
const PRIMARY_TEXT_COLOR: &str = "#000000";

/// Hold legend (lower-cased) → legend text color.
static HOLD_COLORS: &[(&str, &str)] = &[
    ("lower", "#3b93c5"),
    ("raise", "#b81b24"),
    ("menu", "#147745"),
];

/// Fallback hold legend color.
const DEFAULT_HOLD_COLOR: &str = "#0000ff";

/// Background colors that count as "uncolored" when deciding whether a cell
/// keeps its per-layer hold color.
static DEFAULT_BACKGROUNDS: &[&str] = &["#cccccc", "#ffffff", "#d6d6d6"];

/// Rotary encoder axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnobAxis {
    /// The left encoder scrolls vertically on the base layer.
    Vertical,
    /// The right encoder scrolls horizontally on the base layer.
    Horizontal,
}

/// Looks up the legend color for a hold label.
#[must_use]
pub fn hold_color(hold_label: &str) -> &'static str {
    let lower = hold_label.to_lowercase();
    HOLD_COLORS
        .iter()
        .find(|(label, _)| *label == lower)
        .map_or(DEFAULT_HOLD_COLOR, |(_, color)| color)
}

/// Function description of a rotary encoder on a given layer.
#[must_use]
pub fn knob_function(axis: KnobAxis, layer_name: &str) -> &'static str {
    let layer = layer_name.to_uppercase();
    match axis {
        KnobAxis::Vertical => match layer.as_str() {
            "LOWER" => "Up/Down",
            "RAISE" => "Bri+/Bri-",
            "MENU" => "Vol+/Vol-",
            _ => "Vertical Scroll",
        },
        KnobAxis::Horizontal => match layer.as_str() {
            "LOWER" => "Right/Left",
            "MENU" => "Bri+/Bri-",
            _ => "Horizontal Scroll",
        },
    }
}

/// Synthesizes the final text and style block for one cell of one layer.
///
/// `template_props` is the style block preceding the cell in the template,
/// if any; the returned block replaces it in the output row. `None` means
/// the cell carries no style block.
#[must_use]
pub fn synthesize_cell(
    key: &VisualKey,
    template_props: Option<&KleProps>,
    binding_index: Option<usize>,
    layer: &KeymapLayer,
    is_reference: bool,
) -> (String, Option<KleProps>) {
    match key.kind {
        CellKind::LayerTitle => (layer_title(&layer.name), template_props.cloned()),
        CellKind::KnobLeft => knob_cell(KnobAxis::Vertical, template_props, layer),
        CellKind::KnobRight => knob_cell(KnobAxis::Horizontal, template_props, layer),
        CellKind::Key => key_cell(key, template_props, binding_index, layer, is_reference),
    }
}

fn knob_cell(
    axis: KnobAxis,
    template_props: Option<&KleProps>,
    layer: &KeymapLayer,
) -> (String, Option<KleProps>) {
    let mut props = template_props.cloned().unwrap_or_default();
    props.insert("fa".to_string(), json!([9]));
    let text = format!("🔘\n{}", knob_function(axis, &layer.name));
    (text, Some(props))
}

fn key_cell(
    key: &VisualKey,
    template_props: Option<&KleProps>,
    binding_index: Option<usize>,
    layer: &KeymapLayer,
    is_reference: bool,
) -> (String, Option<KleProps>) {
    let mut props = template_props.cloned();

    let Some(index) = binding_index.filter(|i| *i < layer.bindings.len()) else {
        // Unmapped cell, or a layer whose binding list is too short: blank.
        return (String::new(), props);
    };

    let analysis = analyze_keycode(&layer.bindings[index]);
    let text = if is_reference {
        reference_legend(&analysis)
    } else {
        layer_legend(&analysis, key, &mut props)
    };

    (text, props)
}

/// Legend on the reference layer: shifted companion appended to the tap,
/// hold stacked above when present. No style writes.
fn reference_legend(analysis: &KeyAnalysis) -> String {
    let tap = with_shifted(&analysis.tap);
    match &analysis.hold {
        Some(hold) => stacked_legend(&icon_or_label(hold), &tap),
        None => tap,
    }
}

/// Legend on a non-reference layer, with the hold-color and legend-size
/// style overrides.
fn layer_legend(analysis: &KeyAnalysis, key: &VisualKey, props: &mut Option<KleProps>) -> String {
    // The template cell showed a hold/tap stack on the reference layer if
    // its raw label is multi-line; such cells reset to single-legend style
    // when this layer has no hold action of its own.
    let was_stacked = key.label.contains('\n');
    let colored_bg = has_colored_background(props.as_ref());

    if let Some(hold) = &analysis.hold {
        let block = props.get_or_insert_with(KleProps::new);
        let text_color = if colored_bg {
            PRIMARY_TEXT_COLOR.to_string()
        } else {
            format!("{PRIMARY_TEXT_COLOR}\n\n\n{}", hold_color(hold))
        };
        block.insert("t".to_string(), Value::String(text_color));
        block.insert("a".to_string(), json!(4));
        return stacked_legend(&icon_or_label(hold), &analysis.tap);
    }

    if was_stacked {
        let block = props.get_or_insert_with(KleProps::new);
        if block.contains_key("t") {
            block.insert("t".to_string(), json!(PRIMARY_TEXT_COLOR));
        }
        block.insert("a".to_string(), json!(5));
    } else if let Some(block) = props.as_mut() {
        let stale_hold_color = block
            .get("t")
            .and_then(Value::as_str)
            .is_some_and(|t| t.contains(DEFAULT_HOLD_COLOR) || t.contains("#3b93c5"));
        if stale_hold_color {
            block.insert("t".to_string(), json!(PRIMARY_TEXT_COLOR));
        }
    }

    analysis.tap.clone()
}

/// Appends the registered shifted companion symbol to a primary legend.
fn with_shifted(tap: &str) -> String {
    shifted_symbol(tap).map_or_else(|| tap.to_string(), |shifted| format!("{tap} {shifted}"))
}

/// The multi-line hold/tap stack: hold on top, tap at the bottom.
fn stacked_legend(hold: &str, tap: &str) -> String {
    format!("\n\n\n{hold}\n\n\n\n\n{tap}")
}

fn has_colored_background(props: Option<&KleProps>) -> bool {
    props
        .and_then(|block| block.get("c"))
        .and_then(Value::as_str)
        .is_some_and(|color| {
            let color = color.to_lowercase();
            !color.is_empty() && !DEFAULT_BACKGROUNDS.contains(&color.as_str())
        })
}
