// Types representing captured code listings and their rendering

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
