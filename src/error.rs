//! Error taxonomy for the diagram generation pipeline.
//!
//! Only unrecoverable conditions are errors: a diagram template that cannot
//! be parsed, or a keymap without the reference layer. Unmatched diagram
//! cells are diagnostics carried in [`crate::render::MappingReport`], not
//! errors — rendering proceeds and the affected cells stay blank.

use thiserror::Error;

/// Fatal pipeline errors. No output is produced when one of these occurs.
#[derive(Debug, Error)]
pub enum Error {
    /// The diagram template is not a well-formed bracketed row list.
    #[error("malformed layout description: {0}")]
    MalformedLayout(String),

    /// The keymap source does not define the reference layer.
    #[error("keymap does not define the reference layer `{0}`")]
    MissingReferenceLayer(String),
}

/// Convenience alias for pipeline results.
pub type Result<T> = std::result::Result<T, Error>;
