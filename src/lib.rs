//! Highlighting, line anchoring and summarizing of code listings embedded in
//! user-generated HTML.

pub mod highlighting;
pub mod language;
pub mod parsing;
mod regex;
pub mod rendering;
pub mod templating;
