//! Shared test fixtures for pipeline and CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A small diagram template: three rows, a layer-title cell, two rotary
/// encoders, colored and uncolored cells, and two hold/tap stacks.
/// Canonical formatting (no intra-row whitespace, rows joined with `,\n`).
pub const SAMPLE_TEMPLATE: &str = r##"["Esc","1 !","2 @",{c:"#c4bcbc"},"<i class='kb kb-Unicode-BackSpace-DeleteLeft-Big'></i>"],
["Tab","Q",{c:"#77aabb"},"W","\n\n\nShift\n\n\n\n\nEnter"],
["Qwerty","🔘\nVertical Scroll","🔘\nHorizontal Scroll",{c:"#cccccc"},"<i class='kb kb-Arrows-Down-Circle-Filled'></i>\n\n\n\n\n\n\n\nSpace"]"##;

/// A keymap source matching [`SAMPLE_TEMPLATE`]: nine key arguments per
/// layer, with comments, nested calls, and placeholders.
pub const SAMPLE_KEYMAP: &str = r"
// Clover v2 default keymap
#include QMK_KEYBOARD_H

enum layers { _QWERTY, _LOWER, _RAISE };

const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {

/* Base typing layer */
[_QWERTY] = LAYOUT(
    KC_ESC,  KC_1,    KC_2,    KC_BSPC,
    KC_TAB,  KC_Q,    KC_W,    ENT_SWP,
    SPC_LOW
),

[_LOWER] = LAYOUT(
    KC_GRV,  KC_EXLM, KC_AT,   KC_DEL,
    C(KC_LEFT), LT(_RAISE, KC_A), MT(MOD_LCTL, KC_Z), _______,
    SPC_LOW
),

[_RAISE] = LAYOUT(
    QK_BOOT, KC_7,    KC_8,    _______,
    KC_HOME, KC_END,  KC_PGUP, KC_PGDN,
    _______
)
};
";

/// A keymap without the reference layer.
pub const KEYMAP_WITHOUT_REFERENCE: &str = r"
[_LOWER] = LAYOUT(
    KC_A, KC_B
)
";

/// Writes the sample template and keymap into a fresh temp directory.
///
/// Returns the directory (kept alive by the caller) and the two file paths.
pub fn write_sample_inputs() -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let template_path = dir.path().join("Qwerty.js");
    let keymap_path = dir.path().join("keymap.c");

    fs::write(&template_path, SAMPLE_TEMPLATE).expect("Failed to write template fixture");
    fs::write(&keymap_path, SAMPLE_KEYMAP).expect("Failed to write keymap fixture");

    (dir, template_path, keymap_path)
}
