//! Parsing and serialization for the two input notations.
//!
//! This module reads KLE diagram templates and QMK keymap sources into the
//! data models, and serializes rendered diagrams back into KLE notation.

pub mod keymap;
pub mod kle;

// Re-export commonly used functions
pub use keymap::parse_keymap_str;
pub use kle::{parse_kle_str, serialize_kle};
