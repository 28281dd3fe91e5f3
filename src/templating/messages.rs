//! Localized messages used in place of listings

use std::collections::BTreeMap;

use tinytemplate::TinyTemplate;
use tracing::debug;

/// Key of the message that replaces a listing in simplified and plain text
/// output. Takes a `lines` variable.
pub const SIMPLIFIED_CODE: &str = "wcf.bbcode.code.simplified";

pub type Variables<'a> = BTreeMap<&'a str, usize>;

/// Source of translated messages.
pub trait Localize {
    /// Look up the message stored under `key` and fill in its variables.
    /// Unknown keys come back unchanged.
    fn dynamic_variable(&self, key: &str, variables: &Variables<'_>) -> String;
}

/// The built-in English catalogue.
#[derive(Debug, Clone, Default)]
pub struct English;

static CATALOGUE: &[(&str, &str)] = &[(SIMPLIFIED_CODE, "[Code listing, lines: {lines}]")];

impl English {
    fn lookup(key: &str) -> Option<&'static str> {
        CATALOGUE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, text)| *text)
    }
}

impl Localize for English {
    fn dynamic_variable(&self, key: &str, variables: &Variables<'_>) -> String {
        let Some(text) = English::lookup(key) else {
            debug!("No message for {}", key);
            return key.to_string();
        };

        let mut tt = TinyTemplate::new();
        let result = tt
            .add_template(key, text)
            .and_then(|_| tt.render(key, variables));

        match result {
            Ok(message) => message,
            Err(error) => {
                debug!(?error);
                key.to_string()
            }
        }
    }
}
