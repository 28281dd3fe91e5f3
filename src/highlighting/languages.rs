//! The closed set of languages that listings can be highlighted as

use std::collections::BTreeSet;

use syntect::parsing::{SyntaxReference, SyntaxSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    Bash,
    C,
    Diff,
    Html,
    Java,
    Js,
    Perl,
    Php,
    Plain,
    Python,
    Sql,
    Tex,
    Xml,
}

impl Language {
    pub const ALL: [Language; 13] = [
        Language::Bash,
        Language::C,
        Language::Diff,
        Language::Html,
        Language::Java,
        Language::Js,
        Language::Perl,
        Language::Php,
        Language::Plain,
        Language::Python,
        Language::Sql,
        Language::Tex,
        Language::Xml,
    ];

    /// The name a highlighter is registered under, as produced by
    /// normalizing a declared name.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Language::Bash => "Bash",
            Language::C => "C",
            Language::Diff => "Diff",
            Language::Html => "Html",
            Language::Java => "Java",
            Language::Js => "Js",
            Language::Perl => "Perl",
            Language::Php => "Php",
            Language::Plain => "Plain",
            Language::Python => "Python",
            Language::Sql => "Sql",
            Language::Tex => "Tex",
            Language::Xml => "Xml",
        }
    }

    pub fn from_canonical(name: &str) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|language| language.canonical_name() == name)
    }

    /// Human readable name shown in the listing header.
    pub fn title(&self) -> &'static str {
        match self {
            Language::Bash => "Bash",
            Language::C => "C",
            Language::Diff => "Diff",
            Language::Html => "HTML",
            Language::Java => "Java",
            Language::Js => "JavaScript",
            Language::Perl => "Perl",
            Language::Php => "PHP",
            Language::Plain => "Plain text",
            Language::Python => "Python",
            Language::Sql => "SQL",
            Language::Tex => "TeX",
            Language::Xml => "XML",
        }
    }

    /// How the bundled syntect grammars know this language. Plain text has
    /// no grammar of its own.
    fn token(&self) -> Option<&'static str> {
        match self {
            Language::Bash => Some("bash"),
            Language::C => Some("c"),
            Language::Diff => Some("diff"),
            Language::Html => Some("html"),
            Language::Java => Some("java"),
            Language::Js => Some("js"),
            Language::Perl => Some("pl"),
            Language::Php => Some("php"),
            Language::Plain => None,
            Language::Python => Some("py"),
            Language::Sql => Some("sql"),
            Language::Tex => Some("tex"),
            Language::Xml => Some("xml"),
        }
    }

    /// The grammar used to highlight this language.
    pub fn syntax<'s>(&self, syntaxes: &'s SyntaxSet) -> &'s SyntaxReference {
        self.token()
            .and_then(|token| syntaxes.find_syntax_by_token(token))
            .unwrap_or_else(|| syntaxes.find_syntax_plain_text())
    }
}

/// The set of languages for which a highlighter is available. Plain text is
/// always available and serves as the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighters {
    registered: BTreeSet<Language>,
}

impl Default for Highlighters {
    fn default() -> Self {
        Highlighters {
            registered: Language::ALL
                .into_iter()
                .collect(),
        }
    }
}

impl Highlighters {
    /// Only plain text.
    pub fn none() -> Highlighters {
        Highlighters {
            registered: BTreeSet::from([Language::Plain]),
        }
    }

    pub fn without(mut self, language: Language) -> Highlighters {
        if language != Language::Plain {
            self.registered
                .remove(&language);
        }
        self
    }

    pub fn get(&self, language: Language) -> Option<Language> {
        if self
            .registered
            .contains(&language)
        {
            Some(language)
        } else {
            None
        }
    }

    /// The highlighter to use for the given language, falling back to plain
    /// text when it isn't registered.
    pub fn select(&self, language: Language) -> Language {
        self.get(language)
            .unwrap_or(Language::Plain)
    }
}
