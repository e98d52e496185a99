//! Per-layer diagram rendering.
//!
//! This module turns the parsed template and keymap into one populated
//! diagram per layer: legend synthesis per cell, then orchestration across
//! layers against the shared visual/logical map.

pub mod layers;
pub mod legend;

pub use layers::{
    generate_layer_diagrams, render_layers, MappingReport, RenderOutput, RenderedLayer,
};
pub use legend::synthesize_cell;
