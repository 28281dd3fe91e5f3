//! Patterns matched against listing content

use ::regex::Regex;

/// Compile a regular expression once and hand out the cached instance on
/// every subsequent use.
#[macro_export]
macro_rules! compile {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Interpreter line of a Bourne, Bash or Z shell script.
pub(crate) fn shell_shebang() -> &'static Regex {
    compile!(r"^#!/bin/(ba|z)?sh")
}

/// Whitespace ahead of the first line with content, through its last
/// newline.
pub(crate) fn leading_blank_lines() -> &'static Regex {
    compile!(r"^\s*\n")
}

/// Whitespace after the last line with content, from its first newline.
pub(crate) fn trailing_blank_lines() -> &'static Regex {
    compile!(r"\n\s*$")
}
