//! KLE diagram data structures.
//!
//! A diagram is an ordered sequence of rows. Each row is an ordered sequence
//! of items: either a quoted key legend, or a style block (an unquoted-key
//! object in the source notation) that decorates the legend following it.
//! Order is significant and preserved on output.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A style block: style-property name → value (e.g. `c` → a color string,
/// `a` → an alignment number, `fa` → a font-size array).
///
/// Keys keep their insertion order so serialization reproduces the source.
pub type KleProps = serde_json::Map<String, Value>;

/// One item of a diagram row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KleItem {
    /// A key legend (a quoted string in the source notation).
    Legend(String),
    /// A style block applying to the legend that follows it in the row.
    Props(KleProps),
}

impl KleItem {
    /// Returns the legend text if this item is a legend.
    #[must_use]
    pub fn as_legend(&self) -> Option<&str> {
        match self {
            Self::Legend(text) => Some(text),
            Self::Props(_) => None,
        }
    }

    /// Returns the style block if this item is one.
    #[must_use]
    pub fn as_props(&self) -> Option<&KleProps> {
        match self {
            Self::Legend(_) => None,
            Self::Props(props) => Some(props),
        }
    }
}

/// A physical keyboard diagram in KLE row notation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KleDiagram {
    /// Rows of legends and style blocks, in source order.
    pub rows: Vec<Vec<KleItem>>,
}

impl KleDiagram {
    /// Creates an empty diagram.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Counts the key legends (style blocks excluded) across all rows.
    #[must_use]
    pub fn legend_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|item| matches!(item, KleItem::Legend(_)))
            .count()
    }

    /// Iterates over `(row, col, legend)` for every legend in row-major,
    /// then-column order. `col` is the item index within the row, so style
    /// blocks occupy positions of their own, as in the source notation.
    pub fn legends(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter().enumerate().filter_map(move |(c, item)| {
                item.as_legend().map(|text| (r, c, text))
            })
        })
    }
}
