//! LayerSmith library.
//!
//! Core functionality for generating per-layer KLE diagrams from QMK keymap
//! sources: parsing the two input notations, canonical key correlation
//! between diagram cells and binding lists, and per-layer legend synthesis.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod keycodes;
pub mod models;
pub mod parser;
pub mod render;
