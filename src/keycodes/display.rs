//! Display-label derivation for binding tokens.
//!
//! Friendly names turn raw binding tokens into the short text rendered on a
//! key cap: punctuation for symbol keycodes, short words for editing and
//! media keys, and icon markup snippets for keys the diagram font draws as
//! glyphs. Unknown tokens are humanized by replacing separators with spaces.

use super::{split_call, PLACEHOLDER_TOKENS};

/// Icon markup used for every label that resolves to `Bksp`.
pub const BACKSPACE_ICON: &str = "<i class='kb kb-Unicode-BackSpace-DeleteLeft-Big'></i>";

/// Icon markup for the lower-layer hold legend.
pub const LOWER_ICON: &str = "<i class='kb kb-Arrows-Down-Circle-Filled'></i>";

/// Icon markup for the raise-layer hold legend.
pub const RAISE_ICON: &str = "<i class='kb kb-Arrows-Up-Circle-Filled'></i>";

/// Token → display text. Order is irrelevant here (keys are exact), but the
/// entries are a compatibility surface: every entry is carried from the
/// firmware's established legend wording. Empty replacements are skipped at
/// lookup and fall through to the generic humanizer.
static REPLACEMENTS: &[(&str, &str)] = &[
    ("LCTL", "LCtrl"),
    ("RCTL", "RCtrl"),
    ("LSFT", "LShift"),
    ("RSFT", "RShift"),
    ("LALT", "LAlt"),
    ("RALT", "RAlt"),
    ("LWIN", "LWin"),
    ("RWIN", "RWin"),
    ("BSPC", "Bksp"),
    ("DEL", "Del"),
    ("ESC", "Esc"),
    ("ENT", "Enter"),
    ("SPC", "Space"),
    ("MINS", "-"),
    ("EQL", "="),
    ("LBRC", "["),
    ("RBRC", "]"),
    ("BSLS", "\\"),
    ("SCLN", ";"),
    ("QUOT", "'"),
    ("GRV", "`"),
    ("COMM", ","),
    ("DOT", "."),
    ("SLSH", "/"),
    ("LEFT", "<i class='fa fa-arrow-left'></i>"),
    ("RGHT", "<i class='fa fa-arrow-right'></i>"),
    ("UP", "<i class='fa fa-arrow-up'></i>"),
    ("DOWN", "<i class='fa fa-arrow-down'></i>"),
    ("C_LEFT", "Ctrl+←"),
    ("C_RGHT", "Ctrl+→"),
    ("PGUP", "PgUp"),
    ("PGDN", "PgDn"),
    ("HOME", "Home"),
    ("END", "End"),
    ("INS", "Ins"),
    ("PSCR", "PrtSc"),
    ("EXLM", "!"),
    ("AT", "@"),
    ("HASH", "#"),
    ("DLR", "$"),
    ("PERC", "%"),
    ("CIRC", "^"),
    ("AMPR", "&"),
    ("ASTR", "*"),
    ("LPRN", "("),
    ("RPRN", ")"),
    ("UNDS", "_"),
    ("PLUS", "+"),
    ("LCBR", "{"),
    ("RCBR", "}"),
    ("PIPE", "|"),
    ("TILD", "~"),
    ("COLN", ":"),
    ("DQUO", "\""),
    ("QUES", "?"),
    ("NO", ""),
    ("TRNS", ""),
    ("MPLY", "Play"),
    ("MUTE", "Mute"),
    ("VOLU", "Vol+"),
    ("VOLD", "Vol-"),
    ("00", "00"),
    ("PDOT", "."),
    ("TAB", "Tab"),
    ("CAPS", "Caps"),
    ("MENU", "Menu"),
    ("TAB_SET", "Tab"),
    ("SPC_LOW", "Space"),
    ("ENT_SWP", "Enter"),
    ("BSPC_RREZ", "Bksp"),
    ("SPC_REZ", "Space"),
    ("DEL_RSFT", "Del"),
    ("ESC_M", "Esc"),
    ("PMNS", "-"),
    ("PPLS", "+"),
    ("PAST", "*"),
    ("PSLS", "/"),
    ("PENT", "Enter"),
    ("P1", "1"),
    ("P2", "2"),
    ("P3", "3"),
    ("P4", "4"),
    ("P5", "5"),
    ("P6", "6"),
    ("P7", "7"),
    ("P8", "8"),
    ("P9", "9"),
    ("P0", "0"),
    ("PCMM", ","),
    ("MKC_00", "00"),
    ("M00", "00"),
    ("CngLngU", "Change Lang ↑"),
    ("CngLngD", "Change Lang ↓"),
    ("CngLngG", "Change Lang Global"),
    ("NUMPAD", "Num Pad"),
    ("GEMINI", "Gemini"),
    ("QWERTY", "Qwerty"),
    ("GAME", "Game"),
    ("BRUSH", "Brush"),
    ("LOWER_F", "Lower"),
    ("RAISE_F", "Raise"),
    ("GAME_R", "Game R"),
    ("GAME_2", "Game 2"),
    ("GAME_X", "Game X"),
    ("PAD", "Pad"),
    ("QK_BOOT", "Boot"),
    // Tokens deliberately displayed as their raw keycode
    ("EC_NORM", "EC_NORM"),
    ("EC_SWAP", "EC_SWAP"),
    ("NK_OFF", "NK_OFF"),
    ("NK_ON", "NK_ON"),
];

/// Primary legend → shifted companion symbol.
static SHIFTED_SYMBOLS: &[(&str, &str)] = &[
    ("1", "!"),
    ("2", "@"),
    ("3", "#"),
    ("4", "$"),
    ("5", "%"),
    ("6", "^"),
    ("7", "&"),
    ("8", "*"),
    ("9", "("),
    ("0", ")"),
    ("-", "_"),
    ("=", "+"),
    ("[", "{"),
    ("]", "}"),
    ("\\", "|"),
    (";", ":"),
    ("'", "\""),
    (",", "<"),
    (".", ">"),
    ("/", "?"),
    ("`", "~"),
];

/// Renders a binding token as display text.
///
/// Placeholders render empty. The `KC_` naming prefix is stripped (one
/// leading occurrence, one bridging `_KC_`, then any remaining occurrences),
/// call forms recurse one level into their last argument, a trailing `_` is
/// unwrapped, and the replacement table is consulted before the generic
/// separator-to-space humanizer.
#[must_use]
pub fn friendly_name(keycode: &str) -> String {
    let label = keycode.trim();
    if PLACEHOLDER_TOKENS.contains(&label) {
        return String::new();
    }

    let label = label.strip_prefix("KC_").unwrap_or(label);
    let label = label.replacen("_KC_", "_", 1);
    let label = label.replace("KC_", "");

    if label.contains('(') {
        if let Some((_, args)) = split_call(&label) {
            if let Some(last) = args.last() {
                return friendly_name(last);
            }
        }
    }

    let label = label.strip_suffix('_').unwrap_or(&label);

    if let Some((_, replacement)) = REPLACEMENTS.iter().find(|(token, _)| *token == label) {
        if !replacement.is_empty() {
            if *replacement == "Bksp" {
                return BACKSPACE_ICON.to_string();
            }
            return (*replacement).to_string();
        }
    }

    let result = label.strip_prefix('_').unwrap_or(label);
    if result == "-" || result == "_" {
        return result.to_string();
    }
    result.replace('-', " ").replace('_', " ")
}

/// Looks up the shifted companion symbol of a primary legend.
#[must_use]
pub fn shifted_symbol(primary: &str) -> Option<&'static str> {
    SHIFTED_SYMBOLS
        .iter()
        .find(|(base, _)| *base == primary)
        .map(|(_, shifted)| *shifted)
}

/// Converts a hold legend to icon markup where the diagram font has a glyph
/// for it; all other legends pass through unchanged.
#[must_use]
pub fn icon_or_label(label: &str) -> String {
    match label.to_lowercase().as_str() {
        "lower" => LOWER_ICON.to_string(),
        "raise" => RAISE_ICON.to_string(),
        "adjust" => format!("{RAISE_ICON}+{LOWER_ICON}"),
        _ => label.to_string(),
    }
}

/// Display title of a layer tag: its friendly name when that differs from
/// the tag, otherwise the tag title-cased.
#[must_use]
pub fn layer_title(tag: &str) -> String {
    let nice = friendly_name(tag);
    if nice == tag {
        title_case(&nice)
    } else {
        nice
    }
}

/// Uppercases the first character and lowercases the rest.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_name_placeholders_render_empty() {
        assert_eq!(friendly_name("_______"), "");
        assert_eq!(friendly_name("XXXXXXX"), "");
    }

    #[test]
    fn test_friendly_name_punctuation_keycodes() {
        assert_eq!(friendly_name("KC_SCLN"), ";");
        assert_eq!(friendly_name("KC_GRV"), "`");
        assert_eq!(friendly_name("KC_EXLM"), "!");
        assert_eq!(friendly_name("KC_DQUO"), "\"");
    }

    #[test]
    fn test_friendly_name_short_words() {
        assert_eq!(friendly_name("KC_SPC"), "Space");
        assert_eq!(friendly_name("KC_ENT"), "Enter");
        assert_eq!(friendly_name("KC_PGUP"), "PgUp");
        assert_eq!(friendly_name("QK_BOOT"), "Boot");
    }

    #[test]
    fn test_friendly_name_backspace_renders_icon() {
        assert_eq!(friendly_name("KC_BSPC"), BACKSPACE_ICON);
        assert_eq!(friendly_name("BSPC_RREZ"), BACKSPACE_ICON);
    }

    #[test]
    fn test_friendly_name_trailing_underscore_unwraps() {
        assert_eq!(friendly_name("SCLN_"), ";");
        assert_eq!(friendly_name("QUOT_"), "'");
    }

    #[test]
    fn test_friendly_name_call_form_recurses_into_last_argument() {
        assert_eq!(friendly_name("LT(_RAISE, KC_TAB)"), "Tab");
        assert_eq!(friendly_name("MT(MOD_LCTL, KC_SPC)"), "Space");
    }

    #[test]
    fn test_friendly_name_arrow_icons() {
        assert_eq!(friendly_name("KC_LEFT"), "<i class='fa fa-arrow-left'></i>");
        assert_eq!(friendly_name("KC_UP"), "<i class='fa fa-arrow-up'></i>");
    }

    #[test]
    fn test_friendly_name_empty_replacements_fall_through() {
        // NO and TRNS map to empty strings in the table, which do not apply;
        // the tokens humanize to themselves instead.
        assert_eq!(friendly_name("KC_NO"), "NO");
        assert_eq!(friendly_name("KC_TRNS"), "TRNS");
    }

    #[test]
    fn test_friendly_name_unknown_tokens_are_humanized() {
        assert_eq!(friendly_name("MY_MACRO"), "MY MACRO");
        assert_eq!(friendly_name("_SECRET"), "SECRET");
        assert_eq!(friendly_name("KC_MINS"), "-");
    }

    #[test]
    fn test_shifted_symbol_lookup() {
        assert_eq!(shifted_symbol("2"), Some("@"));
        assert_eq!(shifted_symbol(";"), Some(":"));
        assert_eq!(shifted_symbol("`"), Some("~"));
        assert_eq!(shifted_symbol("A"), None);
    }

    #[test]
    fn test_icon_or_label() {
        assert_eq!(icon_or_label("Lower"), LOWER_ICON);
        assert_eq!(icon_or_label("RAISE"), RAISE_ICON);
        assert_eq!(icon_or_label("Adjust"), format!("{RAISE_ICON}+{LOWER_ICON}"));
        assert_eq!(icon_or_label("Menu"), "Menu");
    }

    #[test]
    fn test_layer_title() {
        // Known tags use their display name, unknown tags title-case.
        assert_eq!(layer_title("QWERTY"), "Qwerty");
        assert_eq!(layer_title("NUMPAD"), "Num Pad");
        assert_eq!(layer_title("GAME_R"), "Game R");
        assert_eq!(layer_title("LOWER"), "Lower");
        assert_eq!(layer_title("EMPTY"), "Empty");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("LOWER"), "Lower");
        assert_eq!(title_case("fn"), "Fn");
        assert_eq!(title_case(""), "");
    }
}
