//! Keymap layer data structures.

use crate::constants::BLANK_LAYER;
use serde::{Deserialize, Serialize};

/// One logical layer: a tag and its ordered binding expressions.
///
/// Bindings are kept as raw tokens (`KC_A`, `SPC_LOW`, `LT(_RAISE, KC_A)`);
/// decomposition happens at render time in [`crate::keycodes::analysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeymapLayer {
    /// Layer tag without the leading underscore (e.g. "QWERTY", "LOWER").
    pub name: String,
    /// Binding expressions in source order, one per physical key argument.
    pub bindings: Vec<String>,
}

impl KeymapLayer {
    /// Creates a layer from a tag and its bindings.
    pub fn new(name: impl Into<String>, bindings: Vec<String>) -> Self {
        Self {
            name: name.into(),
            bindings,
        }
    }
}

/// All layers parsed from one keymap source, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Layers in the order their markers appear in the source.
    pub layers: Vec<KeymapLayer>,
}

impl Keymap {
    /// Looks up a layer by tag.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&KeymapLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Ensures the synthetic blank layer is present with an empty binding
    /// list. A blank layer already defined in the source is reset; every key
    /// cell on it renders empty either way.
    pub fn ensure_blank_layer(&mut self) {
        if let Some(layer) = self.layers.iter_mut().find(|l| l.name == BLANK_LAYER) {
            layer.bindings.clear();
        } else {
            self.layers
                .push(KeymapLayer::new(BLANK_LAYER, Vec::new()));
        }
    }
}
