//! HTML fragments as a kuchiki tree. Parsing follows the HTML5 algorithm, so
//! comments, attribute values and raw text elements such as `<script>` are
//! understood, and serialization writes back everything the pipeline did
//! not touch.

use std::fmt;

use html5ever::{local_name, namespace_url, ns, LocalName, QualName};
use kuchiki::traits::*;
use kuchiki::{Attribute, ElementData, ExpandedName, NodeDataRef, NodeRef};

/// An element node of a [`Document`].
pub type Element = NodeDataRef<ElementData>;

pub struct Document {
    root: NodeRef,
    splices: Vec<(String, String)>,
}

impl Document {
    /// Parse as the content of a `<body>`, which is where user HTML ends up.
    pub fn parse(source: &str) -> Document {
        let context = QualName::new(None, ns!(html), local_name!("body"));
        let document = kuchiki::parse_fragment(context, Vec::new()).one(source);

        // fragment parsing hangs everything off a synthetic <html> root
        let root = document
            .first_child()
            .unwrap_or(document);

        Document {
            root,
            splices: Vec::new(),
        }
    }

    /// All elements with the given tag name, in document order.
    pub fn elements_by_tag_name(&self, tag: &str) -> Vec<Element> {
        self.select(|element| {
            tag_name(element).eq_ignore_ascii_case(tag)
        })
    }

    /// All elements satisfying the predicate, in document order. The result
    /// is collected up front so that the caller can modify the tree while
    /// walking it.
    pub fn select(&self, predicate: impl Fn(&ElementData) -> bool) -> Vec<Element> {
        self.root
            .descendants()
            .elements()
            .filter(|element| predicate(element))
            .collect()
    }

    /// Put an empty element with the given name where `node` was. The new
    /// element is returned.
    pub fn replace_with_element(&mut self, node: &NodeRef, name: &str) -> NodeRef {
        let element = NodeRef::new_element(
            QualName::new(None, ns!(html), LocalName::from(name)),
            Vec::<(ExpandedName, Attribute)>::new(),
        );
        node.insert_before(element.clone());
        node.detach();
        element
    }

    pub fn replace_with_text(&mut self, node: &NodeRef, text: &str) {
        node.insert_before(NodeRef::new_text(text));
        node.detach();
    }

    /// Have `markup` written out exactly as given in place of `node`. The
    /// markup is spliced into the serialized document rather than parsed
    /// into the tree, so `node` must serialize to something unique, as
    /// placeholders do.
    pub fn replace_with_markup(&mut self, node: &NodeRef, markup: &str) {
        self.splices
            .push((node.to_string(), markup.to_string()));
    }
}

/// Lowercase for anything that came through the parser.
pub fn tag_name(element: &ElementData) -> &str {
    &element
        .name
        .local
}

pub fn attribute(element: &ElementData, name: &str) -> Option<String> {
    element
        .attributes
        .borrow()
        .get(name)
        .map(str::to_string)
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut html = String::new();
        for child in self
            .root
            .children()
        {
            html.push_str(&child.to_string());
        }

        for (marker, markup) in &self.splices {
            html = html.replacen(marker.as_str(), markup, 1);
        }

        f.write_str(&html)
    }
}
