//! KLE diagram parsing and serialization.
//!
//! The source notation is an array-of-rows list: each row is `[cell, ...]`
//! where a cell is either a quoted legend string or a style object with
//! unquoted keys decorating the legend that follows it. The text is not
//! strict JSON (unquoted keys, trailing commas), so parsing goes through
//! JSON5 after wrapping the row list in one outer pair of brackets.
//!
//! Serialization is the exact inverse and is a format contract: legend
//! strings and style string values are JSON-quoted, style keys are emitted
//! unquoted, arrays are comma-joined plain literals, rows are joined with
//! `,\n`. Downstream tooling consumes this byte-for-byte.

use crate::error::{Error, Result};
use crate::models::{KleDiagram, KleItem, KleProps};
use serde_json::Value;

/// Parses KLE diagram text into the diagram model.
///
/// # Errors
///
/// Returns [`Error::MalformedLayout`] if the text is not a well-formed
/// bracketed list of rows after trimming and wrapping.
pub fn parse_kle_str(content: &str) -> Result<KleDiagram> {
    let wrapped = format!("[{}]", content.trim());
    let value: Value = json5::from_str(&wrapped)
        .map_err(|err| Error::MalformedLayout(err.to_string()))?;

    let row_values = value
        .as_array()
        .ok_or_else(|| Error::MalformedLayout("top level is not a row list".to_string()))?;

    let mut rows = Vec::with_capacity(row_values.len());
    for (row_index, row_value) in row_values.iter().enumerate() {
        let items = row_value.as_array().ok_or_else(|| {
            Error::MalformedLayout(format!("row {row_index} is not a cell list"))
        })?;

        let mut row = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(text) => row.push(KleItem::Legend(text.clone())),
                Value::Object(props) => row.push(KleItem::Props(props.clone())),
                other => {
                    return Err(Error::MalformedLayout(format!(
                        "row {row_index} contains an unsupported cell: {other}"
                    )))
                }
            }
        }
        rows.push(row);
    }

    Ok(KleDiagram { rows })
}

/// Serializes a diagram back into KLE notation.
#[must_use]
pub fn serialize_kle(diagram: &KleDiagram) -> String {
    diagram
        .rows
        .iter()
        .map(|row| serialize_row(row))
        .collect::<Vec<_>>()
        .join(",\n")
}

fn serialize_row(row: &[KleItem]) -> String {
    let cells: Vec<String> = row
        .iter()
        .map(|item| match item {
            KleItem::Legend(text) => Value::String(text.clone()).to_string(),
            KleItem::Props(props) => serialize_props(props),
        })
        .collect();
    format!("[{}]", cells.join(","))
}

/// Renders a style block with unquoted keys, in insertion order.
fn serialize_props(props: &KleProps) -> String {
    let entries: Vec<String> = props
        .iter()
        .map(|(key, value)| format!("{key}:{}", serialize_value(value)))
        .collect();
    format!("{{{}}}", entries.join(","))
}

/// Renders a style value: strings quoted, arrays as comma-joined plain
/// literals, everything else raw.
fn serialize_value(value: &Value) -> String {
    match value {
        Value::String(_) => value.to_string(),
        Value::Array(items) => {
            let joined: Vec<String> = items.iter().map(plain_literal).collect();
            format!("[{}]", joined.join(","))
        }
        other => other.to_string(),
    }
}

/// Array elements are emitted unquoted (join semantics of the notation).
fn plain_literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items
            .iter()
            .map(plain_literal)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
