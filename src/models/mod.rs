//! Data models for diagrams, keymaps, and the visual/logical correspondence.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of parsing and rendering logic.

pub mod diagram;
pub mod keymap;
pub mod visual_map;

// Re-export all model types
pub use diagram::{KleDiagram, KleItem, KleProps};
pub use keymap::{Keymap, KeymapLayer};
pub use visual_map::{CellKind, UnmappedCell, VisualKey, VisualLogicalMap};
