//! Deciding which highlighter a listing gets

use tracing::debug;

use super::languages::Language;

/// Listings of this many bytes or more are never highlighted nor sniffed.
/// Grammar matching on a large listing is not worth the cost on every page
/// view.
pub const HIGHLIGHT_LIMIT: usize = 16384;

/// Choose a language for a listing, either from the name it declared or by
/// looking at its content.
pub fn classify(declared: Option<&str>, content: &str) -> Language {
    if content.len() >= HIGHLIGHT_LIMIT {
        debug!(
            "Listing of {} bytes exceeds highlighting limit",
            content.len()
        );
        return Language::Plain;
    }

    // "" and "0" are what a form leaves behind when no highlighter was
    // picked
    match declared.filter(|name| !name.is_empty() && *name != "0") {
        Some(name) => {
            let canonical = canonical_name(name);
            match Language::from_canonical(&canonical) {
                Some(language) => language,
                None => {
                    debug!("No highlighter named {:?}", canonical);
                    Language::Plain
                }
            }
        }
        None => sniff(content),
    }
}

/// Normalize a declared highlighter name: lowercase, first character upper
/// case, then resolve the well known aliases.
pub fn canonical_name(declared: &str) -> String {
    let lower = declared.to_lowercase();
    let mut chars = lower.chars();
    let name = match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars)
            .collect::<String>(),
        None => String::new(),
    };

    match name.as_str() {
        "Shell" => "Bash".to_string(),
        "C++" => "C".to_string(),
        "Javascript" => "Js".to_string(),
        "Latex" => "Tex".to_string(),
        _ => name,
    }
}

/// Guess the language from telltale content. The order matters; the first
/// rule that matches wins.
fn sniff(content: &str) -> Language {
    let language = if content.contains("<?php") {
        Language::Php
    } else if content.contains("<html") {
        Language::Html
    } else if content.starts_with("<?xml") {
        Language::Xml
    } else if ["SELECT", "UPDATE", "INSERT", "DELETE"]
        .iter()
        .any(|keyword| content.starts_with(keyword))
    {
        Language::Sql
    } else if content.contains("import java.") {
        Language::Java
    } else if content.contains("---") && content.contains("\n+++") {
        Language::Diff
    } else if content.contains("\n#include ") {
        Language::C
    } else if content.starts_with("#!/usr/bin/perl") {
        Language::Perl
    } else if content.contains("def __init__(self") {
        Language::Python
    } else if crate::regex::shell_shebang().is_match(content) {
        Language::Bash
    } else if content.contains("\\documentclass") {
        Language::Tex
    } else {
        Language::Plain
    };

    debug!("Guessed {:?} from content", language);
    language
}
