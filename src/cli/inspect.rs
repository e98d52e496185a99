//! Inspect command: parse inputs and report without writing output.

use crate::config::Config;
use crate::constants::REFERENCE_LAYER;
use crate::models::VisualLogicalMap;
use crate::parser::{parse_keymap_str, parse_kle_str};
use crate::render::layers::layer_file_stem;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Report parsed layers and mapping coverage without writing output
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Path to the keymap source file (falls back to the config file)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Path to the KLE diagram template (falls back to the config file)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let config = Config::load().unwrap_or_default();

        let keymap_path = self
            .keymap
            .clone()
            .or(config.paths.keymap)
            .context("Keymap path not specified. Use --keymap or set paths.keymap in the config file")?;
        let template_path = self
            .template
            .clone()
            .or(config.paths.diagram_template)
            .context("Template path not specified. Use --template or set paths.diagram_template in the config file")?;

        let diagram_text = fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read template: {}", template_path.display()))?;
        let keymap_text = fs::read_to_string(&keymap_path)
            .with_context(|| format!("Failed to read keymap: {}", keymap_path.display()))?;

        let template = parse_kle_str(&diagram_text)?;
        let keymap = parse_keymap_str(&keymap_text)?;

        println!("Layers ({}):", keymap.layers.len());
        for layer in &keymap.layers {
            println!(
                "  {:<12} {:>3} bindings -> {}.js",
                layer.name,
                layer.bindings.len(),
                layer_file_stem(&layer.name)
            );
        }
        println!();

        let reference = keymap
            .get(REFERENCE_LAYER)
            .context("Reference layer disappeared after parsing")?;
        let map = VisualLogicalMap::build(&template, reference);

        let key_cells = map
            .visual_keys
            .iter()
            .filter(|key| key.kind.is_key())
            .count();
        println!(
            "Mapping: {} / {} key cells matched ({} cells total)",
            map.mapped_count(),
            key_cells,
            map.total_count()
        );

        if map.unmapped.is_empty() {
            println!("✓ Every key cell has a binding");
        } else {
            println!("Unmapped cells:");
            for cell in &map.unmapped {
                let key = &map.visual_keys[cell.index];
                println!(
                    "  row {} col {}: {:?} (canonical: {})",
                    key.row, key.col, cell.label, cell.canonical
                );
            }
        }

        Ok(())
    }
}
