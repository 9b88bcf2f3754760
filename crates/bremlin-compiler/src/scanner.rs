//! Quote- and bracket-aware character scanning.
//!
//! A `"` toggles literal mode unless the character before it is a backslash.
//! Delimiters inside literals never match. None of these functions fail:
//! a missing delimiter is reported as `None` and the caller decides whether
//! that is an error.

/// Tracks whether the scan position is inside a double-quoted literal.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Quotes {
    inside: bool,
    prev: Option<char>,
}

impl Quotes {
    /// Feeds the next character. Returns `true` if it belongs to a literal,
    /// the quote characters themselves included.
    pub(crate) fn feed(&mut self, c: char) -> bool {
        let escaped = self.prev == Some('\\');
        self.prev = Some(c);
        if c == '"' && !escaped {
            self.inside = !self.inside;
            return true;
        }
        self.inside
    }
}

/// Byte index of the leftmost `delimiter` outside quoted literals.
pub fn find_next(text: &str, delimiter: char) -> Option<usize> {
    let mut quotes = Quotes::default();
    text.char_indices()
        .find(|&(_, c)| !quotes.feed(c) && c == delimiter)
        .map(|(i, _)| i)
}

/// Like [`find_next`], but also skips `[...]` argument lists and nested
/// `(...)` groups.
///
/// Called on the text right after an opening `(`, this returns the `)`
/// that closes it.
pub fn find_next_standalone(text: &str, delimiter: char) -> Option<usize> {
    let mut quotes = Quotes::default();
    let mut in_brackets = false;
    let mut depth = 0usize;

    for (i, c) in text.char_indices() {
        if quotes.feed(c) {
            continue;
        }
        match c {
            _ if c == delimiter && depth == 0 && !in_brackets => return Some(i),
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            '(' if !in_brackets => depth += 1,
            ')' if !in_brackets => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}

/// Splits around the first unquoted `delimiter`.
pub fn split_once(text: &str, delimiter: char) -> Option<(&str, &str)> {
    let i = find_next(text, delimiter)?;
    Some((&text[..i], &text[i + delimiter.len_utf8()..]))
}

/// Removes one pair of enclosing quotes. Interior escapes are kept verbatim.
pub fn strip_outer_quotes(arg: &str) -> &str {
    if is_quoted(arg) {
        &arg[1..arg.len() - 1]
    } else {
        arg
    }
}

fn is_quoted(arg: &str) -> bool {
    arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"')
}

/// Splits an argument list on unquoted commas. An empty list has no arguments.
pub fn split_args(list: &str) -> Vec<&str> {
    if list.is_empty() {
        return Vec::new();
    }

    let mut args = Vec::new();
    let mut rest = list;
    while let Some((arg, tail)) = split_once(rest, ',') {
        args.push(arg);
        rest = tail;
    }
    args.push(rest);
    args
}
