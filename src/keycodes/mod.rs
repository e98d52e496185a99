//! Canonical key identities.
//!
//! A diagram legend and a keymap binding token have no shared identifier, so
//! both are mapped into one canonical id space and correlated there. The two
//! directions are pure functions over ordered rule tables.
//!
//! Rule order is load-bearing: multi-condition rules (e.g. a modifier name
//! co-occurring with a letter on a dual-legend key) must precede the
//! single-condition rules that would otherwise shadow them. The tables are a
//! compatibility surface; do not consolidate rules that look similar.

pub mod analysis;
pub mod display;

pub use analysis::{analyze_keycode, KeyAnalysis};

use regex::Regex;

/// Canonical id of transparent / blank cells.
pub const TRANSPARENT_ID: &str = "TRNS";

/// Canonical id of the left (vertical) rotary encoder.
pub const KNOB_LEFT_ID: &str = "KNOB_0";

/// Canonical id of the right (horizontal) rotary encoder.
pub const KNOB_RIGHT_ID: &str = "KNOB_1";

/// Canonical id of the layer-title placeholder cell.
pub const LAYER_TITLE_ID: &str = "LAYER_LABEL";

/// Placeholder binding tokens (transparent and no-op).
pub const PLACEHOLDER_TOKENS: [&str; 2] = ["_______", "XXXXXXX"];

/// Predicate of one label-canonicalization rule.
#[derive(Debug, Clone, Copy)]
enum LabelMatch {
    /// Label equals one of the given strings exactly.
    EqualsAny(&'static [&'static str]),
    /// Label contains the fragment.
    Contains(&'static str),
    /// Label contains every fragment.
    ContainsAll(&'static [&'static str]),
    /// Label contains at least one fragment.
    ContainsAny(&'static [&'static str]),
    /// Label contains the first fragment and at least one of the rest.
    ContainsWithAny(&'static str, &'static [&'static str]),
}

impl LabelMatch {
    fn matches(self, label: &str) -> bool {
        match self {
            Self::EqualsAny(options) => options.contains(&label),
            Self::Contains(fragment) => label.contains(fragment),
            Self::ContainsAll(fragments) => fragments.iter().all(|f| label.contains(f)),
            Self::ContainsAny(fragments) => fragments.iter().any(|f| label.contains(f)),
            Self::ContainsWithAny(required, any) => {
                label.contains(required) && any.iter().any(|f| label.contains(f))
            }
        }
    }
}

/// One entry of the ordered label rule table.
#[derive(Debug, Clone, Copy)]
struct LabelRule {
    matcher: LabelMatch,
    id: &'static str,
}

const fn rule(matcher: LabelMatch, id: &'static str) -> LabelRule {
    LabelRule { matcher, id }
}

/// Ordered label → canonical id rules, first match wins.
static LABEL_RULES: &[LabelRule] = &[
    // Layer-title placeholders
    rule(LabelMatch::EqualsAny(&["Qwerty", "Layer"]), LAYER_TITLE_ID),
    // Rotary encoders
    rule(LabelMatch::ContainsAll(&["🔘", "Vertical"]), KNOB_LEFT_ID),
    rule(LabelMatch::ContainsAll(&["🔘", "Horizontal"]), KNOB_RIGHT_ID),
    // Dual legends carrying a layer-arrow icon next to the key name
    rule(LabelMatch::ContainsAll(&["Arrows-Up", "Z"]), "Z"),
    rule(LabelMatch::ContainsAll(&["Arrows-Up", "X"]), "X"),
    rule(LabelMatch::ContainsAll(&["Arrows-Down", "Space"]), "SPC"),
    rule(LabelMatch::ContainsAll(&["Arrows-Up", "Space"]), "SPC"),
    rule(
        LabelMatch::ContainsAny(&["BackSpace", "DeleteLeft"]),
        "BSPC",
    ),
    rule(LabelMatch::ContainsAll(&["Arrows-Down", ","]), "COMM"),
    rule(LabelMatch::ContainsAll(&["Arrows-Up", "."]), "DOT"),
    rule(LabelMatch::ContainsAll(&["Arrows-Down", "C"]), "C"),
    rule(LabelMatch::ContainsAll(&["'", "\""]), "QUOT"),
    rule(LabelMatch::EqualsAny(&["= +"]), "EQL"),
    // Digit keys showing their shifted symbol
    rule(LabelMatch::ContainsAll(&["3", "#"]), "3"),
    rule(LabelMatch::ContainsAll(&["8", "*"]), "8"),
    rule(LabelMatch::ContainsAll(&["2", "@"]), "2"),
    rule(LabelMatch::ContainsAll(&["9", "("]), "9"),
    rule(LabelMatch::ContainsAll(&["4", "$"]), "4"),
    rule(LabelMatch::ContainsAll(&["7", "&"]), "7"),
    rule(LabelMatch::ContainsAll(&["5", "%"]), "5"),
    rule(LabelMatch::ContainsAll(&["6", "^"]), "6"),
    rule(LabelMatch::ContainsAll(&["1", "!"]), "1"),
    rule(LabelMatch::ContainsAll(&["0", ")"]), "0"),
    rule(LabelMatch::ContainsAll(&["`", "~"]), "GRV"),
    rule(LabelMatch::ContainsAll(&["-", "_"]), "MINS"),
    // Punctuation keys showing their shifted symbol
    rule(LabelMatch::ContainsAll(&["[", "{"]), "LBRC"),
    rule(LabelMatch::ContainsAll(&["]", "}"]), "RBRC"),
    rule(LabelMatch::ContainsAll(&[";", ":"]), "SCLN"),
    rule(LabelMatch::ContainsAll(&["'", "\""]), "QUOT"),
    rule(LabelMatch::ContainsAll(&[",", "<"]), "COMM"),
    rule(LabelMatch::ContainsAll(&[".", ">"]), "DOT"),
    rule(LabelMatch::ContainsAll(&["/", "?"]), "SLSH"),
    rule(LabelMatch::ContainsAll(&["\\", "|"]), "BSLS"),
    // Home-row mod legends: the modifier name shares the cap with a letter.
    // These must precede the bare modifier rules below.
    rule(LabelMatch::ContainsAll(&["LShift", "F"]), "F"),
    rule(LabelMatch::ContainsAll(&["RShift", "J"]), "J"),
    rule(LabelMatch::ContainsAll(&["LCtrl", "D"]), "D"),
    rule(LabelMatch::ContainsAll(&["RCtrl", "K"]), "K"),
    rule(LabelMatch::ContainsAll(&["LAlt", "S"]), "S"),
    rule(LabelMatch::ContainsAll(&["RAlt", "L"]), "L"),
    rule(LabelMatch::ContainsAll(&["LWin", "A"]), "A"),
    rule(LabelMatch::ContainsWithAny("RWin", &[":", ";"]), "SCLN"),
    rule(LabelMatch::ContainsAll(&["Fn", "V"]), "V"),
    rule(LabelMatch::ContainsAll(&["Set", "Tab"]), "TAB"),
    rule(LabelMatch::ContainsAll(&["Shift", "Del"]), "DEL"),
    rule(LabelMatch::ContainsAll(&["Swap", "Enter"]), "ENT"),
    rule(LabelMatch::ContainsAll(&["RRez", "Bksp"]), "BSPC"),
    rule(LabelMatch::Contains("C-Left"), "C_LEFT"),
    rule(LabelMatch::Contains("C-Right"), "C_RGHT"),
    // Plain named keys
    rule(LabelMatch::Contains("Caps"), "CAPS"),
    rule(LabelMatch::Contains("Tab"), "TAB"),
    rule(LabelMatch::Contains("Del"), "DEL"),
    rule(LabelMatch::Contains("Esc"), "ESC"),
    rule(LabelMatch::Contains("Enter"), "ENT"),
    rule(LabelMatch::Contains("Menu R"), "MENU_R"),
    rule(LabelMatch::Contains("Menu"), "MENU"),
    rule(LabelMatch::Contains("LShift"), "LSFT"),
    rule(LabelMatch::Contains("RShift"), "RSFT"),
    rule(LabelMatch::Contains("LAlt"), "LALT"),
    rule(LabelMatch::Contains("RAlt"), "RALT"),
    rule(LabelMatch::Contains("LCtrl"), "LCTL"),
    rule(LabelMatch::Contains("RCtrl"), "RCTL"),
    rule(LabelMatch::Contains("LWin"), "LWIN"),
    rule(LabelMatch::Contains("RWin"), "RWIN"),
    rule(LabelMatch::ContainsAll(&["Adj", "C"]), "C"),
];

/// Canonicalizes a raw diagram legend.
///
/// Blank legends are transparent. Otherwise the ordered rule table is
/// evaluated top-to-bottom and the first match wins; an unmatched legend
/// falls back to its text before any `(`, with a first `_T` occurrence and
/// all underscores stripped.
#[must_use]
pub fn canonical_id_for_label(label: &str) -> String {
    if label.is_empty() {
        return TRANSPARENT_ID.to_string();
    }

    for rule in LABEL_RULES {
        if rule.matcher.matches(label) {
            return rule.id.to_string();
        }
    }

    label
        .split('(')
        .next()
        .unwrap_or("")
        .trim()
        .replacen("_T", "", 1)
        .replace('_', "")
}

/// Compound binding tokens and the base id their tap action resolves to.
/// The trailing identity entries keep combined-motion and macro tokens as
/// their own ids.
static COMPOUND_BASES: &[(&str, &str)] = &[
    ("TAB_SET", "TAB"),
    ("SPC_LOW", "SPC"),
    ("SPC_REZ", "SPC"),
    ("ENT_SWP", "ENT"),
    ("BSPC_RREZ", "BSPC"),
    ("DEL_RSFT", "DEL"),
    ("C_LEFT", "C_LEFT"),
    ("C_RGHT", "C_RGHT"),
    ("MKC_00", "MKC_00"),
];

/// Splits a call-form token `NAME(arg, arg, ...)` into its name and
/// comma-separated arguments (one level deep, arguments not re-parsed).
pub(crate) fn split_call(token: &str) -> Option<(String, Vec<String>)> {
    let call_regex = Regex::new(r"^(\w+)\((.+)\)$").unwrap();
    let captures = call_regex.captures(token)?;
    let name = captures[1].to_string();
    let args = captures[2]
        .split(',')
        .map(|arg| arg.trim().to_string())
        .collect();
    Some((name, args))
}

/// Canonicalizes a raw binding-expression token.
///
/// Strips the `KC_` naming prefix (one leading occurrence, then one more
/// anywhere), unwraps a trailing `_` suffix, resolves known compound tokens
/// to their tap's base id, maps placeholders to transparent, and resolves a
/// call form to the base id of its last argument.
#[must_use]
pub fn canonical_id_for_keycode(keycode: &str) -> String {
    let stripped = keycode.strip_prefix("KC_").unwrap_or(keycode);
    let s = stripped.replacen("KC_", "", 1);

    if s == "ESC_M_" {
        return "ESC".to_string();
    }
    // Placeholders first: the transparent token is all underscores and must
    // not be unwrapped by the trailing-underscore rule below.
    if PLACEHOLDER_TOKENS.contains(&s.as_str()) {
        return TRANSPARENT_ID.to_string();
    }
    if let Some(prefix) = s.strip_suffix('_') {
        return prefix.to_string();
    }
    if let Some((_, base)) = COMPOUND_BASES.iter().find(|(token, _)| *token == s) {
        return (*base).to_string();
    }

    if let Some(paren) = s.find('(') {
        let args = s[paren + 1..].replacen(')', "", 1);
        if let Some(last) = args.split(',').map(str::trim).next_back() {
            return last.strip_prefix("KC_").unwrap_or(last).to_string();
        }
    }

    s
}
