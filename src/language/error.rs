use std::path::Path;

use thiserror::Error;

use super::PlaceholderId;

/// Failure to read an input document from disk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{problem}: {details}")]
pub struct LoadingError<'i> {
    pub problem: String,
    pub details: String,
    pub filename: &'i Path,
}

/// Failures while resolving placeholders into their final output.
#[derive(Debug, Error)]
pub enum RenderingError {
    /// The document references a placeholder that pass 1 never stored. This
    /// means captures from one document were resolved against another.
    #[error("no captured block for placeholder {0}")]
    MissingPlaceholder(PlaceholderId),

    #[error("highlighting failure: {0}")]
    Highlighting(#[from] syntect::Error),

    #[error("template failure: {0}")]
    Template(#[from] tinytemplate::error::Error),
}
