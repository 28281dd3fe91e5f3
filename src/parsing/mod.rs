//! Reading HTML documents that contain code listings

use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

mod document;

pub use document::{attribute, tag_name, Document, Element};

/// Read a file and return an owned String. The Document created by parse()
/// below copies what it needs, so the caller is free to drop this afterwards.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse an HTML fragment into a Document.
pub fn parse(content: &str) -> Document {
    let document = Document::parse(content);

    let listings = document
        .elements_by_tag_name("pre")
        .len();
    debug!(
        "Found {} listing{}",
        listings,
        if listings == 1 { "" } else { "s" }
    );

    document
}
