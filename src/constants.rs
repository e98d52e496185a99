//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the well-known layer tags.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "LayerSmith";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "layersmith";

/// Tag of the reference layer whose cell order defines the visual/logical
/// correspondence reused by every other layer.
pub const REFERENCE_LAYER: &str = "QWERTY";

/// Tag of the synthetic blank layer that is always rendered, even when the
/// keymap source does not define it.
pub const BLANK_LAYER: &str = "EMPTY";
