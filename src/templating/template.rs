//! Template trait for rendering resolved listings

use crate::language::RenderingError;

/// Trait for templates that turn a prepared context into markup
pub trait Template<C> {
    /// Render the given context into its final markup
    fn render(&self, context: &C) -> Result<String, RenderingError>;
}
