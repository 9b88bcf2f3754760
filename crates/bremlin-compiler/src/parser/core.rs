//! Sequence scanning and `Or` groups.

use crate::ast::Step;
use crate::depth::Depth;
use crate::scanner::{Quotes, find_next_standalone};
use crate::token::TokenKind;
use crate::{Error, Result};

/// Parser over a normalized body (the text between `Start[iri].` and `.Eval`).
#[derive(Debug)]
pub struct Parser {
    depth: Depth,
}

impl Parser {
    pub fn new(recursion_limit: Option<u32>) -> Self {
        Self {
            depth: Depth::new(recursion_limit),
        }
    }

    /// Parses a step sequence without envelope.
    pub fn parse_body(mut self, body: &str) -> Result<Vec<Step>> {
        self.parse_sequence(body)
    }

    fn parse_sequence(&mut self, text: &str) -> Result<Vec<Step>> {
        self.depth.enter()?;

        let mut chain = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            let (step, tail) = self.next_step(rest)?;
            chain.extend(step);
            rest = tail;
        }

        self.depth.exit();
        Ok(chain)
    }

    /// Consumes one step from the front of `text`, returning it (`None` for
    /// an empty step) and the unconsumed tail.
    fn next_step<'t>(&mut self, text: &'t str) -> Result<(Option<Step>, &'t str)> {
        let mut quotes = Quotes::default();
        let mut in_brackets = false;

        for (i, c) in text.char_indices() {
            if quotes.feed(c) {
                continue;
            }
            match c {
                // Also inside brackets: unquoted values must not contain dots.
                '.' => return Ok((self.parse_step(&text[..i])?, &text[i + 1..])),
                '[' => in_brackets = true,
                ']' => in_brackets = false,
                '(' if !in_brackets => return self.parse_group(&text[..i], &text[i + 1..]),
                ')' if !in_brackets => {
                    return Err(Error::UnexpectedCloseParen {
                        text: text.to_owned(),
                    });
                }
                _ => {}
            }
        }

        Ok((self.parse_step(text)?, ""))
    }

    /// `Or(body)`; `rest` starts right after the `(`.
    fn parse_group<'t>(&mut self, head: &str, rest: &'t str) -> Result<(Option<Step>, &'t str)> {
        if head != TokenKind::Or.as_str() {
            return Err(Error::UnexpectedGroup {
                head: head.to_owned(),
            });
        }

        let Some(close) = find_next_standalone(rest, ')') else {
            return Err(Error::UnterminatedGroup {
                group: TokenKind::Or.as_str(),
                text: format!("{head}({rest}"),
            });
        };
        let inner = &rest[..close];

        let subchain = self.parse_sequence(inner)?;
        if subchain.is_empty() {
            return Err(Error::EmptyGroup {
                step: format!("{head}({inner})"),
            });
        }

        let after = &rest[close + 1..];
        let tail = match after.strip_prefix('.') {
            Some(tail) => tail,
            None if after.is_empty() => after,
            None if after.starts_with(')') => {
                return Err(Error::UnexpectedCloseParen {
                    text: after.to_owned(),
                });
            }
            None => {
                return Err(Error::TrailingInput {
                    step: format!("{head}({inner})"),
                    trailing: after.to_owned(),
                });
            }
        };

        Ok((Some(Step::Or(subchain)), tail))
    }
}
