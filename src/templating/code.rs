//! The codeMetaCode template, presenting a highlighted listing with line
//! anchors

use serde::Serialize;
use tinytemplate::TinyTemplate;

use super::Template;
use crate::language::RenderingError;

pub const CODE_TEMPLATE: &str = "codeMetaCode";

static TEMPLATE: &str = r##"<div class="codeBox collapsibleBbcode jsCollapsibleBbcode highlighter-{language}" data-lines="{line_count}">
	<div class="codeBoxHeader">
		<div class="codeBoxHeadline">{highlighter}{{ if filename }}: {filename}{{ endif }}</div>
	</div>
	<ol start="{start_line_number}">
{{ for line in lines }}		<li id="{line.anchor}"><a href="#{line.anchor}" class="lineAnchor" title="{line.number}"></a><span class="codeBoxLine">{line.content | unescaped}</span></li>
{{ endfor }}	</ol>
</div>"##;

/// One line of a listing as handed to the template.
#[derive(Debug, Serialize)]
pub struct Line<'a> {
    pub number: usize,
    pub anchor: &'a str,
    /// Already highlighted and balanced markup.
    pub content: &'a str,
}

/// Values available to the codeMetaCode template.
#[derive(Debug, Serialize)]
pub struct Listing<'a> {
    pub lines: Vec<Line<'a>>,
    pub start_line_number: usize,
    pub line_count: usize,
    pub highlighter: &'a str,
    pub language: &'a str,
    pub filename: Option<&'a str>,
}

/// Template for rendering a highlighted listing into HTML
pub struct CodeTemplate<'t> {
    tt: TinyTemplate<'t>,
}

impl CodeTemplate<'static> {
    pub fn new() -> Result<CodeTemplate<'static>, RenderingError> {
        CodeTemplate::with_text(TEMPLATE)
    }
}

impl<'t> CodeTemplate<'t> {
    /// Use replacement template text, for example loaded from a theme.
    pub fn with_text(text: &'t str) -> Result<CodeTemplate<'t>, RenderingError> {
        let mut tt = TinyTemplate::new();
        tt.add_template(CODE_TEMPLATE, text)?;
        Ok(CodeTemplate { tt })
    }
}

impl<'t> Template<Listing<'_>> for CodeTemplate<'t> {
    fn render(&self, listing: &Listing<'_>) -> Result<String, RenderingError> {
        Ok(self
            .tt
            .render(CODE_TEMPLATE, listing)?)
    }
}
