//! Parsed, not yet interned steps.

use crate::token::TokenKind;

/// The implicit argument of `Start`.
pub const START_ARGUMENT: &str = "iri";

/// One operation of a command.
///
/// Each variant carries exactly the arguments its keyword takes, so a step
/// cannot have the wrong shape. Empty steps (`NoOp`) are dropped by the
/// parser and have no variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// `Start[iri]`, always first.
    Start,
    /// `Eval`, always last.
    Eval,
    IsActive,
    IsInactive,
    /// `HasType[type]`
    HasType(String),
    /// `InScheme[taxonomy]`
    InScheme(String),
    /// `IsInstance[instance]`
    IsInstance(String),
    /// `Follow[relationship]`
    Follow(String),
    /// `FollowInverse[relationship]`
    FollowInverse(String),
    /// `HasValue[field, value, ...]`. Values are literals, not identifiers.
    HasValue { field: String, values: Vec<String> },
    /// `HasBroader[taxonomy, target]`
    HasBroader { taxonomy: String, target: String },
    /// `Or(steps)`
    Or(Vec<Step>),
}

impl Step {
    pub fn kind(&self) -> TokenKind {
        match self {
            Step::Start => TokenKind::Start,
            Step::Eval => TokenKind::Eval,
            Step::IsActive => TokenKind::IsActive,
            Step::IsInactive => TokenKind::IsInactive,
            Step::HasType(_) => TokenKind::HasType,
            Step::InScheme(_) => TokenKind::InScheme,
            Step::IsInstance(_) => TokenKind::IsInstance,
            Step::Follow(_) => TokenKind::Follow,
            Step::FollowInverse(_) => TokenKind::FollowInverse,
            Step::HasValue { .. } => TokenKind::HasValue,
            Step::HasBroader { .. } => TokenKind::HasBroader,
            Step::Or(_) => TokenKind::Or,
        }
    }

    /// The first argument: the identifier of single-argument steps, the
    /// field of `HasValue`, the taxonomy of `HasBroader`, `"iri"` for `Start`.
    pub fn primary_argument(&self) -> Option<&str> {
        match self {
            Step::Start => Some(START_ARGUMENT),
            Step::HasType(arg)
            | Step::InScheme(arg)
            | Step::IsInstance(arg)
            | Step::Follow(arg)
            | Step::FollowInverse(arg) => Some(arg),
            Step::HasValue { field, .. } => Some(field),
            Step::HasBroader { taxonomy, .. } => Some(taxonomy),
            Step::Eval | Step::IsActive | Step::IsInactive | Step::Or(_) => None,
        }
    }

    /// Arguments after the first one.
    pub fn values(&self) -> &[String] {
        match self {
            Step::HasValue { values, .. } => values,
            Step::HasBroader { target, .. } => std::slice::from_ref(target),
            _ => &[],
        }
    }

    /// Nested steps of an `Or` group.
    pub fn subchain(&self) -> &[Step] {
        match self {
            Step::Or(steps) => steps,
            _ => &[],
        }
    }
}
