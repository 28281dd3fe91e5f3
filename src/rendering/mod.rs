//! Writing code listings into output documents.
//!
//! Processing happens in two passes. Pass 1 walks the document, takes each
//! `<pre>` element's content and attributes into a [`Captures`] map and
//! renames the element to an opaque `wcfNode-<id>` placeholder. Pass 2
//! replaces each placeholder with its final form for the chosen
//! [`OutputMode`]: a highlighted listing, a one-line summary, or, for blocks
//! of trusted HTML, the stored markup.

use std::collections::BTreeMap;

use kuchiki::traits::*;
use kuchiki::ElementData;
use tracing::{debug, warn};

use crate::highlighting::{self, classify, Highlighters};
use crate::language::*;
use crate::parsing::{self, attribute, tag_name, Document, Element};
use crate::templating::{CodeTemplate, English, Line, Listing, Localize, Template, Variables, SIMPLIFIED_CODE};

mod numbering;
mod terminal;

pub use numbering::{assign, AnchorRegistry};
pub use terminal::colourize;

/// Class marking a `<pre>` element whose text is raw HTML to be passed
/// through rather than a code listing.
pub const RAW_HTML_CLASS: &str = "woltlabHtml";

/// Read what pass 2 will need from a `<pre>` element.
pub fn capture_element(element: &Element) -> Capture {
    let content = element
        .as_node()
        .text_contents();

    if attribute(element, "class").as_deref() == Some(RAW_HTML_CLASS) {
        return Capture::RawHtml(content);
    }

    let present = |name: &str| attribute(element, name).filter(|value| !value.is_empty());

    Capture::Code(CodeBlock {
        content,
        highlighter: present("data-highlighter"),
        file: present("data-file"),
        line: CodeBlock::parse_line(attribute(element, "data-line").as_deref()),
    })
}

fn is_placeholder(element: &ElementData) -> bool {
    PlaceholderId::from_tag_name(tag_name(element)).is_some()
}

/// Pass 1: capture every listing in the document and leave a placeholder in
/// its place.
pub fn capture(document: &mut Document) -> Captures {
    let mut captures = Captures::new();

    // placeholders can only come from this pass; any already in the input
    // are shown as the text they are
    for element in document.select(is_placeholder) {
        let text = element
            .as_node()
            .to_string();
        document.replace_with_text(element.as_node(), &text);
    }

    for element in document.elements_by_tag_name("pre") {
        // a listing nested in another is part of the outer one's text
        let nested = element
            .as_node()
            .ancestors()
            .elements()
            .any(|ancestor| tag_name(&ancestor) == "pre");
        if nested {
            continue;
        }

        let capture = capture_element(&element);
        let id = PlaceholderId::generate();

        document.replace_with_element(element.as_node(), &id.tag_name());
        captures.insert(id, capture);
    }

    debug!("Captured {} block(s)", captures.len());
    captures
}

/// Resolves captured listings for one render session. The processor owns the
/// anchor registry, so anchors are unique across every document it renders;
/// use one processor per session. The compiled template is not `Send`, so
/// each thread needs its own.
pub struct Processor<'t, L: Localize = English> {
    mode: OutputMode,
    registry: AnchorRegistry,
    template: CodeTemplate<'t>,
    highlighters: Highlighters,
    messages: L,
}

impl Processor<'static, English> {
    pub fn new(mode: OutputMode) -> Result<Processor<'static, English>, RenderingError> {
        Ok(Processor {
            mode,
            registry: AnchorRegistry::new(),
            template: CodeTemplate::new()?,
            highlighters: Highlighters::default(),
            messages: English,
        })
    }
}

impl<'t, L: Localize> Processor<'t, L> {
    pub fn with_template<'u>(self, template: CodeTemplate<'u>) -> Processor<'u, L> {
        Processor {
            mode: self.mode,
            registry: self.registry,
            template,
            highlighters: self.highlighters,
            messages: self.messages,
        }
    }

    pub fn with_highlighters(mut self, highlighters: Highlighters) -> Processor<'t, L> {
        self.highlighters = highlighters;
        self
    }

    pub fn with_messages<M: Localize>(self, messages: M) -> Processor<'t, M> {
        Processor {
            mode: self.mode,
            registry: self.registry,
            template: self.template,
            highlighters: self.highlighters,
            messages,
        }
    }

    pub fn registry(&self) -> &AnchorRegistry {
        &self.registry
    }

    /// Run both passes over an HTML fragment.
    pub fn process(&mut self, html: &str) -> Result<String, RenderingError> {
        let mut document = parsing::parse(html);
        let captures = capture(&mut document);
        self.resolve_document(&mut document, captures)?;
        Ok(document.to_string())
    }

    /// Pass 2: replace every placeholder in the document. A placeholder
    /// without a capture aborts the whole document.
    pub fn resolve_document(
        &mut self,
        document: &mut Document,
        mut captures: Captures,
    ) -> Result<(), RenderingError> {
        let placeholders = document.select(is_placeholder);

        for element in placeholders {
            let Some(id) = PlaceholderId::from_tag_name(tag_name(&element)) else {
                continue;
            };

            match self.resolve(&id, &mut captures)? {
                Replacement::Markup(markup) => document.replace_with_markup(element.as_node(), &markup),
                Replacement::Text(text) => document.replace_with_text(element.as_node(), &text),
            }
        }

        if !captures.is_empty() {
            warn!("{} captured block(s) were never resolved", captures.len());
        }

        Ok(())
    }

    /// Produce the final form of one captured block, consuming the capture.
    pub fn resolve(
        &mut self,
        id: &PlaceholderId,
        captures: &mut Captures,
    ) -> Result<Replacement, RenderingError> {
        let capture = captures
            .take(id)
            .ok_or_else(|| RenderingError::MissingPlaceholder(id.clone()))?;

        match capture {
            Capture::RawHtml(markup) => Ok(Replacement::Markup(markup)),
            Capture::Code(block) => match self.mode {
                OutputMode::FullHtml => Ok(Replacement::Markup(self.render_listing(&block)?)),
                OutputMode::SimplifiedHtml | OutputMode::PlainText => {
                    Ok(Replacement::Text(self.summarize(&block)))
                }
            },
        }
    }

    fn summarize(&self, block: &CodeBlock) -> String {
        let variables = Variables::from([("lines", block.line_count())]);
        self.messages
            .dynamic_variable(SIMPLIFIED_CODE, &variables)
    }

    fn render_listing(&mut self, block: &CodeBlock) -> Result<String, RenderingError> {
        let content = highlighting::strip_blank_edges(&block.content);

        let language = classify(
            block
                .highlighter
                .as_deref(),
            content,
        );
        let selected = self
            .highlighters
            .select(language);
        if selected != language {
            debug!("Highlighter for {:?} is not registered", language);
        }

        let lines = highlighting::highlight_lines(selected, content)?;
        let anchors: BTreeMap<usize, String> = assign(&mut self.registry, content, block.line);
        let language = selected
            .canonical_name()
            .to_lowercase();

        let listing = Listing {
            lines: lines
                .iter()
                .zip(anchors.iter())
                .map(|(line, (number, anchor))| Line {
                    number: *number,
                    anchor,
                    content: line,
                })
                .collect(),
            start_line_number: block.line,
            line_count: lines.len(),
            highlighter: selected.title(),
            language: &language,
            filename: block
                .file
                .as_deref(),
        };

        self.template
            .render(&listing)
    }
}
