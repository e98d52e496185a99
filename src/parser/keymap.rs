//! Keymap source parsing.
//!
//! The keymap is free-form C-like text containing, for each layer, a marker
//! `[_TAG] = LAYOUT(` followed by a comma-separated argument list whose
//! arguments may themselves contain parenthesized calls. Comments are
//! stripped first; arguments are split on commas only at the call's own
//! parenthesis depth.

use crate::constants::REFERENCE_LAYER;
use crate::error::{Error, Result};
use crate::models::{Keymap, KeymapLayer};
use regex::Regex;

/// Parses keymap source text into one ordered binding list per layer tag.
///
/// # Errors
///
/// Returns [`Error::MissingReferenceLayer`] if the reference layer is absent
/// from the source.
pub fn parse_keymap_str(content: &str) -> Result<Keymap> {
    let line_comments = Regex::new(r"(?m)//.*$").unwrap();
    let block_comments = Regex::new(r"(?s)/\*.*?\*/").unwrap();

    let stripped = line_comments.replace_all(content, "");
    let stripped = block_comments.replace_all(&stripped, "");
    let clean = stripped.replace("\r\n", "\n");

    let marker = Regex::new(r"\[_(\w+)\]\s*=\s*LAYOUT\s*\(").unwrap();

    let mut layers = Vec::new();
    for captures in marker.captures_iter(&clean) {
        let name = captures[1].to_string();
        let body_start = captures.get(0).unwrap().end();
        let bindings = scan_arguments(&clean[body_start..]);
        layers.push(KeymapLayer::new(name, bindings));
    }

    let keymap = Keymap { layers };
    if keymap.get(REFERENCE_LAYER).is_none() {
        return Err(Error::MissingReferenceLayer(REFERENCE_LAYER.to_string()));
    }

    Ok(keymap)
}

/// Accumulates one argument per top-level comma, tracking two depths: the
/// call's own parentheses (terminates the scan) and nested call parentheses
/// (kept verbatim inside the current argument).
fn scan_arguments(text: &str) -> Vec<String> {
    let mut call_depth = 1u32;
    let mut nested_depth = 0u32;
    let mut current = String::new();
    let mut arguments = Vec::new();

    for ch in text.chars() {
        match ch {
            '(' => {
                call_depth += 1;
                nested_depth += 1;
                current.push(ch);
            }
            ')' => {
                call_depth -= 1;
                if call_depth == 0 {
                    let token = current.trim();
                    if !token.is_empty() {
                        arguments.push(token.to_string());
                    }
                    break;
                }
                nested_depth -= 1;
                current.push(ch);
            }
            ',' if nested_depth == 0 => {
                let token = current.trim();
                if !token.is_empty() {
                    arguments.push(token.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    arguments
}
