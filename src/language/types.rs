//! Types describing code listings captured from a document

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A code listing as found in a `<pre>` element, before any highlighting
/// has been applied.
#[derive(Eq, Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub content: String,
    pub highlighter: Option<String>,
    pub file: Option<String>,
    pub line: usize,
}

impl CodeBlock {
    pub fn new(content: impl Into<String>) -> CodeBlock {
        CodeBlock {
            content: content.into(),
            highlighter: None,
            file: None,
            line: 1,
        }
    }

    /// Interpret the value of a `data-line` attribute. Anything that isn't a
    /// positive integer starts the listing at line 1.
    pub fn parse_line(value: Option<&str>) -> usize {
        value
            .and_then(|value| {
                value
                    .trim()
                    .parse::<i64>()
                    .ok()
            })
            .filter(|line| *line >= 1)
            .map(|line| line as usize)
            .unwrap_or(1)
    }

    /// Number of lines as counted for the simplified summary: one more than
    /// the number of newlines in the raw content.
    pub fn line_count(&self) -> usize {
        count_lines(&self.content)
    }
}

fn count_lines(content: &str) -> usize {
    content
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

/// What pass 1 stored for one `<pre>` element.
#[derive(Eq, Debug, Clone, PartialEq)]
pub enum Capture {
    Code(CodeBlock),
    /// A `woltlabHtml` block; its text is trusted markup and is written back
    /// verbatim.
    RawHtml(String),
}

/// Opaque identifier linking a placeholder element to its capture. Always
/// lowercase hex so that it can be used as part of a tag name.
#[derive(Eq, Debug, Clone, PartialEq, Hash, PartialOrd, Ord)]
pub struct PlaceholderId(String);

/// Tag name prefix of placeholder elements.
pub const PLACEHOLDER_PREFIX: &str = "wcfNode-";

impl PlaceholderId {
    pub fn generate() -> PlaceholderId {
        PlaceholderId(
            uuid::Uuid::new_v4()
                .simple()
                .to_string(),
        )
    }

    /// Recover the identifier from a placeholder tag name. The HTML parser
    /// lowercases tag names, so the prefix matches in any case.
    pub fn from_tag_name(name: &str) -> Option<PlaceholderId> {
        let prefix = name.get(..PLACEHOLDER_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(PLACEHOLDER_PREFIX) {
            return None;
        }

        let id = &name[PLACEHOLDER_PREFIX.len()..];
        if !id.is_empty()
            && id
                .bytes()
                .all(|b| b.is_ascii_hexdigit())
        {
            Some(PlaceholderId(id.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn tag_name(&self) -> String {
        format!("{}{}", PLACEHOLDER_PREFIX, self.0)
    }
}

impl fmt::Display for PlaceholderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything captured by pass 1 of a single render, keyed by placeholder.
#[derive(Debug, Default)]
pub struct Captures {
    entries: HashMap<PlaceholderId, Capture>,
}

impl Captures {
    pub fn new() -> Captures {
        Captures::default()
    }

    pub fn insert(&mut self, id: PlaceholderId, capture: Capture) {
        self.entries
            .insert(id, capture);
    }

    /// Take the capture out; each one can be resolved only once.
    pub fn take(&mut self, id: &PlaceholderId) -> Option<Capture> {
        self.entries
            .remove(id)
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }
}

/// How resolved listings are written into the output document. Chosen once
/// per render and applied to every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    FullHtml,
    SimplifiedHtml,
    PlainText,
}

impl OutputMode {
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputMode::FullHtml => "text/html",
            OutputMode::SimplifiedHtml => "text/simplified-html",
            OutputMode::PlainText => "text/plain",
        }
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full-html" | "text/html" => Ok(OutputMode::FullHtml),
            "simplified-html" | "text/simplified-html" => Ok(OutputMode::SimplifiedHtml),
            "plain-text" | "text/plain" => Ok(OutputMode::PlainText),
            _ => Err(format!("unknown output mode '{}'", s)),
        }
    }
}

/// The result of resolving one placeholder.
#[derive(Eq, Debug, Clone, PartialEq)]
pub enum Replacement {
    /// Inserted into the document as-is.
    Markup(String),
    /// Inserted as text, so escaped on the way in.
    Text(String),
}
