//! Making every line of highlighted output stand on its own.
//!
//! Highlighters wrap tokens in spans without regard for line breaks, so a
//! block comment or multi-line string opens a span on one line and closes it
//! several lines later. Listings are rendered one line per list item, which
//! means every line has to carry its own balanced set of spans.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Open(&'a str),
    Close,
}

const CLOSE: &str = "</span>";

/// Length of the span start tag at the beginning of `text`, if any. Only
/// `<span>` and `<span class="...">` are recognized, which is everything the
/// highlighters emit.
fn open_tag(text: &str) -> Option<usize> {
    if text.starts_with("<span>") {
        return Some(6);
    }

    let rest = text.strip_prefix("<span class=\"")?;
    let quote = rest.find('"')?;
    if rest[quote + 1..].starts_with('>') {
        Some(13 + quote + 2)
    } else {
        None
    }
}

/// The span tags in a line, in order of appearance.
fn tokens(line: &str) -> Vec<Token<'_>> {
    let mut result = Vec::new();
    let mut i = 0;

    while let Some(j) = line[i..].find('<') {
        let at = i + j;
        let rest = &line[at..];
        if rest.starts_with(CLOSE) {
            result.push(Token::Close);
            i = at + CLOSE.len();
        } else if let Some(width) = open_tag(rest) {
            result.push(Token::Open(&rest[..width]));
            i = at + width;
        } else {
            i = at + 1;
        }
    }

    result
}

/// Remove spans that contain nothing, repeating until none are left so that
/// nested empty spans disappear as well.
fn remove_empty(line: String) -> String {
    let mut line = line;
    loop {
        let mut result = String::with_capacity(line.len());
        let mut i = 0;
        let mut changed = false;

        while let Some(j) = line[i..].find('<') {
            let at = i + j;
            result.push_str(&line[i..at]);

            let rest = &line[at..];
            match open_tag(rest) {
                Some(width) if rest[width..].starts_with(CLOSE) => {
                    i = at + width + CLOSE.len();
                    changed = true;
                }
                _ => {
                    result.push('<');
                    i = at + 1;
                }
            }
        }
        result.push_str(&line[i..]);

        if !changed {
            return result;
        }
        line = result;
    }
}

/// Balance span tags line by line. Spans still open at the end of a line are
/// closed there and re-opened at the start of the next line, so joining the
/// output with newlines gives markup equivalent to the input.
pub fn repair<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut open: Vec<String> = Vec::new();
    let mut result = Vec::new();

    for line in lines {
        let line = line.as_ref();

        let mut fixed = open.concat();
        fixed.push_str(line);

        for token in tokens(line) {
            match token {
                Token::Open(tag) => open.push(tag.to_string()),
                Token::Close => {
                    open.pop();
                }
            }
        }

        for _ in 0..open.len() {
            fixed.push_str(CLOSE);
        }

        result.push(remove_empty(fixed));
    }

    result
}
