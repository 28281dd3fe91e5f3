use owo_colors::OwoColorize;
use std::path::Path;

use codebox::language::{LoadingError, RenderingError};

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    let mut message = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );
    if !error
        .details
        .is_empty()
    {
        message.push_str(" (");
        message.push_str(&error.details);
        message.push(')');
    }
    message
}

/// Format a RenderingError with concise single-line output
pub fn concise_rendering_error(error: &RenderingError, filename: &Path) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        filename.display(),
        error
            .to_string()
            .bold()
    )
}
