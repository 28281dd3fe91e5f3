//! Colourizing listings on a terminal

use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};
use tracing::debug;

use crate::highlighting::{syntaxes, Language};

/// Bundled theme used for terminal output.
const THEME: &str = "base16-ocean.dark";

fn themes() -> &'static ThemeSet {
    static THEMES: OnceLock<ThemeSet> = OnceLock::new();
    THEMES.get_or_init(ThemeSet::load_defaults)
}

/// Embellish source with 24-bit ANSI escapes to create syntax highlighting
/// in terminal output.
pub fn colourize(language: Language, source: &str) -> Result<String, syntect::Error> {
    let Some(theme) = themes()
        .themes
        .get(THEME)
    else {
        debug!("Theme {} is not bundled", THEME);
        return Ok(source.to_string());
    };

    let syntaxes = syntaxes();
    let mut highlighter = HighlightLines::new(language.syntax(syntaxes), theme);

    let mut output = String::with_capacity(source.len() * 2);
    for line in LinesWithEndings::from(source) {
        let ranges = highlighter.highlight_line(line, syntaxes)?;
        output.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    output.push_str("\x1b[0m");

    Ok(output)
}
