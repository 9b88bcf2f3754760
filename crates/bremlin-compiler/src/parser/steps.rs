//! Per-keyword step parsing.
//!
//! Implemented as an extension of `Parser`. A step is `Keyword[args]`;
//! `Or` groups never reach this module.

use super::core::Parser;
use crate::ast::Step;
use crate::scanner::{find_next, split_args, split_once, strip_outer_quotes};
use crate::token::TokenKind;
use crate::{Error, Result};

impl Parser {
    /// Parses one step. Empty text is a `NoOp` and yields `None`.
    pub(super) fn parse_step(&self, text: &str) -> Result<Option<Step>> {
        if text.is_empty() {
            return Ok(None);
        }

        let (keyword, list) = match split_once(text, '[') {
            Some((keyword, list)) => (keyword, Some(list)),
            None => (text, None),
        };

        let Some(kind) = TokenKind::from_keyword(keyword) else {
            return Err(Error::UnknownKeyword {
                keyword: keyword.to_owned(),
                step: text.to_owned(),
            });
        };

        let step = match kind {
            TokenKind::NoOp => {
                return Err(Error::UnknownKeyword {
                    keyword: keyword.to_owned(),
                    step: text.to_owned(),
                });
            }
            TokenKind::Start | TokenKind::Eval => {
                return Err(Error::MisplacedEnvelope {
                    keyword: kind,
                    step: text.to_owned(),
                });
            }
            TokenKind::Or => {
                return Err(Error::MalformedGroup {
                    step: text.to_owned(),
                });
            }
            TokenKind::IsActive => {
                arguments(kind, text, list)?;
                Step::IsActive
            }
            TokenKind::IsInactive => {
                arguments(kind, text, list)?;
                Step::IsInactive
            }
            TokenKind::HasType => Step::HasType(single(kind, text, list)?),
            TokenKind::InScheme => Step::InScheme(single(kind, text, list)?),
            TokenKind::IsInstance => Step::IsInstance(single(kind, text, list)?),
            TokenKind::Follow => Step::Follow(single(kind, text, list)?),
            TokenKind::FollowInverse => Step::FollowInverse(single(kind, text, list)?),
            TokenKind::HasBroader => {
                let mut args = arguments(kind, text, list)?.into_iter();
                Step::HasBroader {
                    taxonomy: next_arg(&mut args),
                    target: next_arg(&mut args),
                }
            }
            TokenKind::HasValue => {
                let mut args = arguments(kind, text, list)?.into_iter();
                Step::HasValue {
                    field: next_arg(&mut args),
                    values: args.collect(),
                }
            }
        };

        Ok(Some(step))
    }
}

fn single(kind: TokenKind, step: &str, list: Option<&str>) -> Result<String> {
    Ok(next_arg(&mut arguments(kind, step, list)?.into_iter()))
}

/// Arity has been checked by [`arguments`].
fn next_arg(args: &mut impl Iterator<Item = String>) -> String {
    args.next().unwrap_or_default()
}

/// Parses the bracketed list of `step` and checks it against the arity of
/// `kind`. `list` is the text after the opening `[`.
fn arguments(kind: TokenKind, step: &str, list: Option<&str>) -> Result<Vec<String>> {
    let Some(list) = list else {
        return Err(Error::MissingArguments {
            keyword: kind,
            step: step.to_owned(),
        });
    };

    let Some(close) = find_next(list, ']') else {
        return Err(Error::UnterminatedArguments {
            step: step.to_owned(),
        });
    };

    let trailing = &list[close + 1..];
    if !trailing.is_empty() {
        return Err(Error::TrailingInput {
            step: step[..step.len() - trailing.len()].to_owned(),
            trailing: trailing.to_owned(),
        });
    }

    let raw = split_args(&list[..close]);
    let arity = kind.arity();
    if !arity.accepts(raw.len()) {
        return Err(Error::Arity {
            keyword: kind,
            expected: arity,
            found: raw.len(),
            step: step.to_owned(),
        });
    }

    raw.into_iter()
        .map(|arg| {
            if arg.is_empty() {
                return Err(Error::EmptyArgument {
                    step: step.to_owned(),
                });
            }
            Ok(strip_outer_quotes(arg).to_owned())
        })
        .collect()
}
