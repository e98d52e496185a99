//! Generate command for per-layer diagram files.

use crate::config::Config;
use crate::parser::serialize_kle;
use crate::render::generate_layer_diagrams;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Render every layer of a keymap into KLE diagram files
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Path to the keymap source file (falls back to the config file)
    #[arg(short, long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Path to the KLE diagram template (falls back to the config file)
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Output directory for generated diagrams (falls back to the config file)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
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
        let out_dir = self
            .out_dir
            .clone()
            .or(config.paths.output_dir)
            .context("Output directory not specified. Use --out-dir or set paths.output_dir in the config file")?;

        let diagram_text = fs::read_to_string(&template_path)
            .with_context(|| format!("Failed to read template: {}", template_path.display()))?;
        let keymap_text = fs::read_to_string(&keymap_path)
            .with_context(|| format!("Failed to read keymap: {}", keymap_path.display()))?;

        let output = generate_layer_diagrams(&diagram_text, &keymap_text)?;

        for cell in &output.report.unmapped {
            eprintln!(
                "Warning: unmapped cell [{}]: {:?} (canonical: {})",
                cell.index, cell.label, cell.canonical
            );
        }
        println!(
            "Mapped {} / {} keys.",
            output.report.total - output.report.unmapped.len(),
            output.report.total
        );

        fs::create_dir_all(&out_dir)
            .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

        for layer in &output.layers {
            let file_name = format!("{}.js", layer.file_stem);
            let path = out_dir.join(&file_name);
            fs::write(&path, serialize_kle(&layer.diagram))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Generated {file_name}");
        }
        println!("  Output: {}", out_dir.display());

        Ok(())
    }
}
