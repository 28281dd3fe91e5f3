//! Syntax highlighting of code listings

mod classify;
mod languages;
mod repair;

use std::sync::OnceLock;

use html_escape::encode_text;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

pub use classify::{canonical_name, classify, HIGHLIGHT_LIMIT};
pub use languages::{Highlighters, Language};
pub use repair::repair;

/// The bundled grammars, loaded on first use.
pub fn syntaxes() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// We do the highlighting in two passes. First syntect marks up the source,
/// one `<span class="...">` per scope, without regard for line breaks. Then
/// the repair pass splits the result into lines that each stand on their
/// own. This is the first pass. Plain text is only escaped.
pub fn highlight(language: Language, source: &str) -> Result<String, syntect::Error> {
    if language == Language::Plain {
        return Ok(encode_text(source).into_owned());
    }

    let syntaxes = syntaxes();
    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        language.syntax(syntaxes),
        syntaxes,
        ClassStyle::Spaced,
    );
    for line in LinesWithEndings::from(source) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(generator.finalize())
}

/// Highlight source as HTML and split it into independently well-formed
/// lines.
pub fn highlight_lines(language: Language, source: &str) -> Result<Vec<String>, syntect::Error> {
    let highlighted = highlight(language, source)?;
    Ok(repair(highlighted.split('\n')))
}

/// Trim blank lines surrounding a listing: the leading whitespace up to and
/// including its last newline, and the trailing whitespace from its first
/// newline onwards. Indentation of the first line and trailing spaces on the
/// last line are kept.
pub fn strip_blank_edges(content: &str) -> &str {
    let content = match crate::regex::leading_blank_lines().find(content) {
        Some(found) => &content[found.end()..],
        None => content,
    };

    match crate::regex::trailing_blank_lines().find(content) {
        Some(found) => &content[..found.start()],
        None => content,
    }
}
