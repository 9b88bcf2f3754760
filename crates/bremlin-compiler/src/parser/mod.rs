//! Step parser.
//!
//! Works directly on the normalized body text with a hand-written scanner,
//! one pass per step sequence:
//!
//! - an unquoted `.` ends a step; the text before it is dispatched on its keyword
//! - `Or(` opens a group whose body is parsed recursively into the `Or` subchain
//! - empty step text is dropped
//!
//! The first error aborts the parse. No partial chain is returned.

mod core;
mod steps;

#[cfg(test)]
mod tests;

pub use self::core::Parser;

use crate::ast::Step;
use crate::normalize::normalize;
use crate::prefixes::PrefixTable;
use crate::Result;

/// Default nesting limit for `Or` groups.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Configurable command parser.
///
/// ```
/// use bremlin_compiler::{CommandParser, PrefixTable, Step};
///
/// let parser = CommandParser::new()
///     .with_prefixes(PrefixTable::from_iter([("schema", "http://schema.org/")]))
///     .with_recursion_limit(Some(8));
///
/// let chain = parser.parse("Start[iri].HasType[<http://schema.org/Person>].Eval").unwrap();
/// assert_eq!(chain[1], Step::HasType("schema:Person".into()));
/// ```
#[derive(Debug, Clone)]
pub struct CommandParser {
    prefixes: PrefixTable,
    recursion_limit: Option<u32>,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self {
            prefixes: PrefixTable::default(),
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
        }
    }
}

impl CommandParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the namespace table used to shorten IRIs.
    pub fn with_prefixes(mut self, prefixes: PrefixTable) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Set the `Or` nesting limit. None = infinite.
    ///
    /// Deeply nested input is rejected with
    /// [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded)
    /// instead of exhausting the stack.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn prefixes(&self) -> &PrefixTable {
        &self.prefixes
    }

    /// Parses a full command into a chain that starts with [`Step::Start`]
    /// and ends with [`Step::Eval`].
    pub fn parse(&self, command: &str) -> Result<Vec<Step>> {
        let span = tracing::debug_span!("parse_command", len = command.len());
        let _enter = span.enter();

        let result = self.parse_chain(command);
        match &result {
            Ok(chain) => tracing::debug!(steps = chain.len(), "parsed command"),
            Err(err) => tracing::debug!(%err, "rejected command"),
        }
        result
    }

    fn parse_chain(&self, command: &str) -> Result<Vec<Step>> {
        let body = normalize(command, &self.prefixes)?;
        let steps = Parser::new(self.recursion_limit).parse_body(&body)?;

        let mut chain = Vec::with_capacity(steps.len() + 2);
        chain.push(Step::Start);
        chain.extend(steps);
        chain.push(Step::Eval);
        Ok(chain)
    }
}

/// Parses a command with the default prefixes and limits.
pub fn parse_command(command: &str) -> Result<Vec<Step>> {
    CommandParser::new().parse(command)
}
