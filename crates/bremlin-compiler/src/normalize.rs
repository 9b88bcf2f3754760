//! Command cleanup ahead of step parsing.
//!
//! Turns authored text into the bare step sequence between `Start[iri]` and
//! `Eval`: namespaces shortened, whitespace dropped, `And(...)` sugar spliced
//! out, envelope checked and removed.

use crate::prefixes::PrefixTable;
use crate::scanner::{Quotes, find_next_standalone};
use crate::{Error, Result};

const START: &str = "Start[iri].";
const EVAL: &str = "Eval";
const AND: &str = "And";

/// Returns the body of `command`, ready for the step parser.
pub fn normalize(command: &str, prefixes: &PrefixTable) -> Result<String> {
    let shortened = prefixes.shorten(command.trim());
    let mut text = strip_whitespace(&shortened);

    while let Some(spliced) = remove_and_group(&text)? {
        text = spliced;
    }

    let body = strip_envelope(&text)?;
    tracing::trace!(body, "normalized command");
    Ok(body.to_owned())
}

/// Drops all whitespace outside literals. Inside literals only spaces survive.
pub fn strip_whitespace(text: &str) -> String {
    let mut quotes = Quotes::default();
    let mut out = String::with_capacity(text.len());

    for c in text.chars() {
        let in_literal = quotes.feed(c);
        if !c.is_whitespace() || (in_literal && c == ' ') {
            out.push(c);
        }
    }
    out
}

/// Splices the contents of the first `And(...)` group into its surroundings.
///
/// Returns `None` once no group is left. `And` only counts at the start of a
/// step, outside literals and argument lists.
fn remove_and_group(text: &str) -> Result<Option<String>> {
    let Some((start, open)) = find_and_group(text) else {
        return Ok(None);
    };

    let inner_start = open + 1;
    let Some(len) = find_next_standalone(&text[inner_start..], ')') else {
        return Err(Error::UnterminatedGroup {
            group: AND,
            text: text[start..].to_owned(),
        });
    };
    let close = inner_start + len;

    tracing::trace!(group = &text[start..=close], "splicing And group");

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..start]);
    out.push_str(&text[inner_start..close]);
    out.push_str(&text[close + 1..]);
    Ok(Some(out))
}

/// Byte offsets of the `A` of `And` and of the `(` that follows it.
fn find_and_group(text: &str) -> Option<(usize, usize)> {
    let mut quotes = Quotes::default();
    let mut in_brackets = false;

    for (i, c) in text.char_indices() {
        if quotes.feed(c) {
            continue;
        }
        match c {
            '[' => in_brackets = true,
            ']' => in_brackets = false,
            '(' if !in_brackets && text[..i].ends_with(AND) => {
                let start = i - AND.len();
                let at_step_start = text[..start]
                    .chars()
                    .next_back()
                    .is_none_or(|prev| matches!(prev, '.' | '('));
                if at_step_start {
                    return Some((start, i));
                }
            }
            _ => {}
        }
    }
    None
}

fn strip_envelope(text: &str) -> Result<&str> {
    let Some(rest) = text.strip_prefix(START) else {
        return Err(Error::MissingStart {
            command: text.to_owned(),
        });
    };

    let body = match rest.strip_suffix(EVAL) {
        Some(body) if body.is_empty() || body.ends_with('.') => body,
        _ => {
            return Err(Error::MissingEval {
                command: text.to_owned(),
            });
        }
    };

    let body = body.strip_prefix('.').unwrap_or(body);
    let body = body.strip_suffix('.').unwrap_or(body);
    Ok(body)
}
