//! Tap/hold decomposition of binding expressions.
//!
//! One binding expression resolves to the legend shown for a quick press
//! (tap) and, when the key doubles as a modifier or layer switch, the legend
//! for a sustained press (hold).

use super::display::friendly_name;
use super::{split_call, PLACEHOLDER_TOKENS};

/// Decomposed display legends of one binding expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAnalysis {
    /// Legend for a quick press. Empty for placeholder bindings.
    pub tap: String,
    /// Legend for a sustained press, when the binding has one.
    pub hold: Option<String>,
}

impl KeyAnalysis {
    fn tap_only(tap: impl Into<String>) -> Self {
        Self {
            tap: tap.into(),
            hold: None,
        }
    }

    fn tap_hold(tap: impl Into<String>, hold: impl Into<String>) -> Self {
        Self {
            tap: tap.into(),
            hold: Some(hold.into()),
        }
    }
}

/// Compound tokens that render as a plain tap legend despite appearing in
/// the tap/hold table below. Checked first; their table entries are kept for
/// compatibility documentation only.
static PLAIN_TAP_OVERRIDES: &[&str] = &["QUOT_", "BSPC_RREZ"];

/// Hand-tuned dual-function tokens that do not follow a regular naming
/// pattern, with their literal tap/hold legends.
static TAP_HOLD_OVERRIDES: &[(&str, (&str, &str))] = &[
    ("SPC_LOW", ("Space", "Lower")),
    ("ENT_SWP", ("Enter", "Shift")),
    ("TAB_SET", ("Tab", "Set")),
    ("SPC_REZ", ("Space", "Raise")),
    ("SPC_RSFT", ("Space", "RShift")),
    ("DEL_RSFT", ("Del", "Shift")),
    ("BSPC_RREZ", ("Bksp", "RRez")),
    ("BSPC_REZ", ("Bksp", "Raise")),
    ("F_", ("F", "LShift")),
    ("D_", ("D", "LCtrl")),
    ("S_", ("S", "LAlt")),
    ("A_", ("A", "LWin")),
    ("J_", ("J", "RShift")),
    ("K_", ("K", "RCtrl")),
    ("L_", ("L", "RAlt")),
    ("SCLN_", (";", "RWin")),
    ("ESC_M_", ("Esc", "Menu")),
    ("QUOT_", ("'", "Menu")),
    ("PENT_M", ("Enter", "Menu")),
    ("BSPC_M", ("Bksp", "Menu")),
    ("V_", ("V", "Fn")),
    ("Z_", ("Z", "Adjust")),
    ("C_", ("C", "Lower")),
    ("X_", ("X", "Raise")),
    ("DOT_", (".", "Raise")),
    ("COMM_", (",", "Lower")),
    ("TAB_ALT", ("Tab", "LAlt")),
    ("BSPC_LALT", ("Bksp", "LAlt")),
];

/// Decomposes one binding expression into its tap/hold legends.
///
/// Resolution order: placeholders, plain-tap overrides, the fixed tap/hold
/// table, call forms (layer-tap, modifier-tap, single-modifier wrappers),
/// then the plain friendly-name fallback.
#[must_use]
pub fn analyze_keycode(keycode: &str) -> KeyAnalysis {
    let token = keycode.trim();

    if PLACEHOLDER_TOKENS.contains(&token) {
        return KeyAnalysis::tap_only("");
    }

    if PLAIN_TAP_OVERRIDES.contains(&token) {
        return KeyAnalysis::tap_only(friendly_name(token));
    }

    if let Some((_, (tap, hold))) = TAP_HOLD_OVERRIDES
        .iter()
        .find(|(compound, _)| *compound == token)
    {
        return KeyAnalysis::tap_hold(*tap, *hold);
    }

    if token.contains('(') {
        if let Some(analysis) = analyze_call(token) {
            return analysis;
        }
    }

    KeyAnalysis::tap_only(friendly_name(token))
}

/// Analyzes a call-form token, or `None` when it matches no known form.
fn analyze_call(token: &str) -> Option<KeyAnalysis> {
    let (name, args) = split_call(token)?;

    // Layer-tap: LT(layer, key) — hold switches to the layer, tap sends the key.
    if name == "LT" && args.len() >= 2 {
        let layer = args[0].strip_prefix('_').unwrap_or(&args[0]);
        return Some(KeyAnalysis::tap_hold(friendly_name(&args[1]), layer));
    }

    // Modifier-tap: MT(mod, key), or a wrapper whose name encodes the
    // modifier as a suffix (LSFT_T(key), LCTL_T(key), ...).
    if name == "MT" || name.ends_with("_T") {
        let (modifier, key) = if name.ends_with("_T") {
            (name.replacen("_T", "", 1), args.first()?.clone())
        } else {
            (args.first()?.clone(), args.get(1)?.clone())
        };
        let nice_mod = friendly_name(&modifier).replacen("KC_", "", 1);
        return Some(KeyAnalysis::tap_hold(friendly_name(&key), nice_mod));
    }

    // Single-modifier wrappers around navigational keys: only the two
    // control+arrow combinations carry a combined legend.
    if matches!(name.as_str(), "C" | "S" | "A" | "G") {
        if token == "C(KC_LEFT)" {
            return Some(KeyAnalysis::tap_only("Ctrl+←"));
        }
        if token == "C(KC_RGHT)" {
            return Some(KeyAnalysis::tap_only("Ctrl+→"));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycodes::display::BACKSPACE_ICON;

    #[test]
    fn test_placeholders_have_no_legend() {
        assert_eq!(analyze_keycode("_______"), KeyAnalysis::tap_only(""));
        assert_eq!(analyze_keycode("XXXXXXX"), KeyAnalysis::tap_only(""));
    }

    #[test]
    fn test_compound_tap_hold_tokens() {
        assert_eq!(
            analyze_keycode("SPC_LOW"),
            KeyAnalysis::tap_hold("Space", "Lower")
        );
        assert_eq!(
            analyze_keycode("ENT_SWP"),
            KeyAnalysis::tap_hold("Enter", "Shift")
        );
        assert_eq!(analyze_keycode("D_"), KeyAnalysis::tap_hold("D", "LCtrl"));
        assert_eq!(analyze_keycode("SCLN_"), KeyAnalysis::tap_hold(";", "RWin"));
    }

    #[test]
    fn test_plain_tap_overrides_shadow_the_table() {
        assert_eq!(analyze_keycode("QUOT_"), KeyAnalysis::tap_only("'"));
        assert_eq!(
            analyze_keycode("BSPC_RREZ"),
            KeyAnalysis::tap_only(BACKSPACE_ICON)
        );
    }

    #[test]
    fn test_layer_tap_call() {
        assert_eq!(
            analyze_keycode("LT(_RAISE,KC_A)"),
            KeyAnalysis::tap_hold("A", "RAISE")
        );
        assert_eq!(
            analyze_keycode("LT(_LOWER, KC_TAB)"),
            KeyAnalysis::tap_hold("Tab", "LOWER")
        );
    }

    #[test]
    fn test_modifier_tap_calls() {
        assert_eq!(
            analyze_keycode("MT(MOD_LCTL, KC_Z)"),
            KeyAnalysis::tap_hold("Z", "MOD LCTL")
        );
        assert_eq!(
            analyze_keycode("LSFT_T(KC_F)"),
            KeyAnalysis::tap_hold("F", "LShift")
        );
    }

    #[test]
    fn test_control_arrow_wrappers() {
        assert_eq!(
            analyze_keycode("C(KC_LEFT)"),
            KeyAnalysis::tap_only("Ctrl+←")
        );
        assert_eq!(
            analyze_keycode("C(KC_RGHT)"),
            KeyAnalysis::tap_only("Ctrl+→")
        );
        // Other wrapped keys fall back to the wrapped key's friendly name.
        assert_eq!(analyze_keycode("C(KC_C)"), KeyAnalysis::tap_only("C"));
    }

    #[test]
    fn test_plain_keycode_fallback() {
        assert_eq!(analyze_keycode("KC_Q"), KeyAnalysis::tap_only("Q"));
        assert_eq!(analyze_keycode("KC_SPC"), KeyAnalysis::tap_only("Space"));
        assert_eq!(
            analyze_keycode("MY_MACRO"),
            KeyAnalysis::tap_only("MY MACRO")
        );
    }
}
