//! bremlin: compiler for fluent graph-query commands.
//!
//! A command such as
//!
//! ```text
//! Start[iri].HasType[bsm:Company].Or(HasType[A].HasType[B]).Eval
//! ```
//!
//! goes through:
//! - `normalize` - namespace shortening, whitespace removal, `And(...)` splicing, envelope check
//! - `parser` - step parsing into a [`Step`] chain
//! - `internalize` - identifier arguments replaced by [`Symbol`]s from a [`SymbolTable`]
//!
//! The resulting [`InternedChain`] is what a graph evaluator consumes.
//!
//! # Example
//!
//! ```
//! use bremlin_compiler::{Interner, Step, compile, parse_command};
//!
//! let chain = parse_command("Start[iri].IsInstance[red].Eval").unwrap();
//! assert_eq!(chain[1], Step::IsInstance("red".into()));
//!
//! let mut table = Interner::new();
//! let interned = compile("Start[iri].IsInstance[red].Eval", &mut table).unwrap();
//! assert_eq!(interned.len(), 3);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod internalize;
pub mod normalize;
pub mod parser;
pub mod prefixes;
pub mod scanner;
pub mod token;

mod depth;

#[cfg(test)]
mod prefixes_tests;
#[cfg(test)]
pub mod test_utils;

pub use ast::{START_ARGUMENT, Step};
pub use bremlin_core::{Interner, SharedInterner, Symbol, SymbolTable};
pub use internalize::{InternedChain, InternedStep, Internalizer, internalize};
pub use parser::{CommandParser, DEFAULT_RECURSION_LIMIT, parse_command};
pub use prefixes::PrefixTable;
pub use token::{Arity, TokenKind};

/// Parses `command` and internalizes it against `table` in one go.
pub fn compile<T: SymbolTable + ?Sized>(command: &str, table: &mut T) -> Result<InternedChain> {
    let chain = parse_command(command)?;
    internalize(&chain, table)
}

/// Errors that can occur while compiling a command.
///
/// Every syntax error carries the offending text as it looked after
/// normalization.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("command must begin with `Start[iri].`, got `{command}`")]
    MissingStart { command: String },

    #[error("command must end with `.Eval`, got `{command}`")]
    MissingEval { command: String },

    #[error("`{keyword}` may only appear in the command envelope, got `{step}`")]
    MisplacedEnvelope { keyword: TokenKind, step: String },

    #[error("unknown step `{keyword}` in `{step}`")]
    UnknownKeyword { keyword: String, step: String },

    #[error("expected `{keyword}[...]`, got `{step}`")]
    MissingArguments { keyword: TokenKind, step: String },

    #[error("unterminated argument list, expected `]` in `{step}`")]
    UnterminatedArguments { step: String },

    #[error("unterminated `{group}(` group, expected `)` in `{text}`")]
    UnterminatedGroup { group: &'static str, text: String },

    #[error("expected `Or(...)`, got `{step}`")]
    MalformedGroup { step: String },

    #[error("unexpected `(` after `{head}`, only `Or(...)` opens a group")]
    UnexpectedGroup { head: String },

    #[error("unexpected `)` in `{text}`")]
    UnexpectedCloseParen { text: String },

    #[error("unexpected `{trailing}` after `{step}`")]
    TrailingInput { step: String, trailing: String },

    #[error("`{keyword}` takes {expected}, got {found} in `{step}`")]
    Arity {
        keyword: TokenKind,
        expected: Arity,
        found: usize,
        step: String,
    },

    #[error("empty argument in `{step}`")]
    EmptyArgument { step: String },

    #[error("empty group `{step}`")]
    EmptyGroup { step: String },

    /// Input nested too deeply.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("invalid prefix table: {0}")]
    PrefixTable(#[source] serde_json::Error),

    #[error("invalid binary chain: {0}")]
    Decode(#[source] postcard::Error),
}

/// Coarse classification of [`Error`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or misplaced `Start[iri]` / `Eval`.
    Envelope,
    /// Unbalanced `[]` / `()` or stray text around them.
    Delimiter,
    /// Wrong number of arguments.
    Arity,
    UnknownKeyword,
    Limit,
    Config,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::MissingStart { .. }
            | Error::MissingEval { .. }
            | Error::MisplacedEnvelope { .. } => ErrorCategory::Envelope,
            Error::MissingArguments { .. }
            | Error::UnterminatedArguments { .. }
            | Error::UnterminatedGroup { .. }
            | Error::MalformedGroup { .. }
            | Error::UnexpectedGroup { .. }
            | Error::UnexpectedCloseParen { .. }
            | Error::TrailingInput { .. } => ErrorCategory::Delimiter,
            Error::Arity { .. } | Error::EmptyArgument { .. } | Error::EmptyGroup { .. } => {
                ErrorCategory::Arity
            }
            Error::UnknownKeyword { .. } => ErrorCategory::UnknownKeyword,
            Error::RecursionLimitExceeded => ErrorCategory::Limit,
            Error::PrefixTable(_) | Error::Decode(_) => ErrorCategory::Config,
        }
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
