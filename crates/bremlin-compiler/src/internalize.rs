//! Interning pass: [`Step`] chain → [`InternedChain`].
//!
//! Identifier arguments become [`Symbol`]s. `HasValue` values stay literal
//! strings: they are data, not identifiers, and would only bloat the table.

use bremlin_core::{Symbol, SymbolTable};
use serde::{Deserialize, Serialize};

use crate::ast::Step;
use crate::depth::Depth;
use crate::parser::DEFAULT_RECURSION_LIMIT;
use crate::token::TokenKind;
use crate::{Error, Result};

/// Execution-ready step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternedStep {
    Start,
    Eval,
    IsActive,
    IsInactive,
    HasType(Symbol),
    InScheme(Symbol),
    IsInstance(Symbol),
    Follow(Symbol),
    FollowInverse(Symbol),
    HasValue { field: Symbol, values: Vec<String> },
    HasBroader { taxonomy: Symbol, target: Symbol },
    Or(Vec<InternedStep>),
}

impl InternedStep {
    pub fn kind(&self) -> TokenKind {
        match self {
            InternedStep::Start => TokenKind::Start,
            InternedStep::Eval => TokenKind::Eval,
            InternedStep::IsActive => TokenKind::IsActive,
            InternedStep::IsInactive => TokenKind::IsInactive,
            InternedStep::HasType(_) => TokenKind::HasType,
            InternedStep::InScheme(_) => TokenKind::InScheme,
            InternedStep::IsInstance(_) => TokenKind::IsInstance,
            InternedStep::Follow(_) => TokenKind::Follow,
            InternedStep::FollowInverse(_) => TokenKind::FollowInverse,
            InternedStep::HasValue { .. } => TokenKind::HasValue,
            InternedStep::HasBroader { .. } => TokenKind::HasBroader,
            InternedStep::Or(_) => TokenKind::Or,
        }
    }

    pub fn argument_id(&self) -> Option<Symbol> {
        match self {
            InternedStep::HasType(sym)
            | InternedStep::InScheme(sym)
            | InternedStep::IsInstance(sym)
            | InternedStep::Follow(sym)
            | InternedStep::FollowInverse(sym) => Some(*sym),
            InternedStep::HasValue { field, .. } => Some(*field),
            InternedStep::HasBroader { taxonomy, .. } => Some(*taxonomy),
            _ => None,
        }
    }

    /// Interned arguments after the first: the `HasBroader` target.
    pub fn value_ids(&self) -> &[Symbol] {
        match self {
            InternedStep::HasBroader { target, .. } => std::slice::from_ref(target),
            _ => &[],
        }
    }

    /// Literal `HasValue` values.
    pub fn string_values(&self) -> &[String] {
        match self {
            InternedStep::HasValue { values, .. } => values,
            _ => &[],
        }
    }

    pub fn subchain(&self) -> &[InternedStep] {
        match self {
            InternedStep::Or(steps) => steps,
            _ => &[],
        }
    }
}

/// The internalized form of a whole command, handed to the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InternedChain {
    steps: Vec<InternedStep>,
}

impl InternedChain {
    pub fn steps(&self) -> &[InternedStep] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<InternedStep> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InternedStep> {
        self.steps.iter()
    }

    /// Serialize to the compact binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        postcard::to_allocvec(self).expect("serialization should not fail")
    }

    /// Deserialize from the compact binary format.
    pub fn from_binary(bytes: &[u8]) -> Result<Self> {
        postcard::from_bytes(bytes).map_err(Error::Decode)
    }
}

impl From<Vec<InternedStep>> for InternedChain {
    fn from(steps: Vec<InternedStep>) -> Self {
        Self { steps }
    }
}

impl<'a> IntoIterator for &'a InternedChain {
    type Item = &'a InternedStep;
    type IntoIter = std::slice::Iter<'a, InternedStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Walks a [`Step`] chain and interns its identifiers into a symbol table.
///
/// The input chain is only borrowed. Running twice over equal input with
/// the same table yields equal output.
pub struct Internalizer<'t, T: ?Sized> {
    table: &'t mut T,
    depth: Depth,
}

impl<'t, T: SymbolTable + ?Sized> Internalizer<'t, T> {
    pub fn new(table: &'t mut T) -> Self {
        Self {
            table,
            depth: Depth::new(Some(DEFAULT_RECURSION_LIMIT)),
        }
    }

    /// Set the `Or` nesting limit. None = infinite.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.depth = Depth::new(limit);
        self
    }

    pub fn run(mut self, chain: &[Step]) -> Result<InternedChain> {
        let steps = self.steps(chain)?;
        tracing::trace!(
            steps = steps.len(),
            symbols = self.table.len(),
            "internalized chain"
        );
        Ok(InternedChain { steps })
    }

    fn steps(&mut self, steps: &[Step]) -> Result<Vec<InternedStep>> {
        self.depth.enter()?;
        let interned = steps
            .iter()
            .map(|step| self.step(step))
            .collect::<Result<Vec<_>>>()?;
        self.depth.exit();
        Ok(interned)
    }

    fn step(&mut self, step: &Step) -> Result<InternedStep> {
        let interned = match step {
            Step::Start => InternedStep::Start,
            Step::Eval => InternedStep::Eval,
            Step::IsActive => InternedStep::IsActive,
            Step::IsInactive => InternedStep::IsInactive,
            Step::HasType(arg) => InternedStep::HasType(self.table.put(arg)),
            Step::InScheme(arg) => InternedStep::InScheme(self.table.put(arg)),
            Step::IsInstance(arg) => InternedStep::IsInstance(self.table.put(arg)),
            Step::Follow(arg) => InternedStep::Follow(self.table.put(arg)),
            Step::FollowInverse(arg) => InternedStep::FollowInverse(self.table.put(arg)),
            Step::HasValue { field, values } => InternedStep::HasValue {
                field: self.table.put(field),
                values: values.clone(),
            },
            Step::HasBroader { taxonomy, target } => InternedStep::HasBroader {
                taxonomy: self.table.put(taxonomy),
                target: self.table.put(target),
            },
            Step::Or(subchain) => InternedStep::Or(self.steps(subchain)?),
        };
        Ok(interned)
    }
}

/// Internalizes `chain` against `table` with the default nesting limit.
pub fn internalize<T: SymbolTable + ?Sized>(chain: &[Step], table: &mut T) -> Result<InternedChain> {
    Internalizer::new(table).run(chain)
}
