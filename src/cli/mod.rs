//! CLI command handlers for LayerSmith.
//!
//! This module provides headless, scriptable access to the diagram
//! generation pipeline for automation, testing, and CI integration.

pub mod generate;
pub mod inspect;

// Re-export types used by main.rs and tests
pub use generate::GenerateArgs;
pub use inspect::InspectArgs;
