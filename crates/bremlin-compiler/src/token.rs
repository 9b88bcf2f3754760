//! Step keywords and their argument shapes.

use std::fmt;

/// Every kind of step a command can contain.
///
/// `NoOp` stands for an empty step (`..` or a spliced-out `And()`); the parser
/// drops it, so it never reaches a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    NoOp,
    Start,
    Eval,
    HasType,
    HasValue,
    InScheme,
    HasBroader,
    IsInstance,
    Follow,
    FollowInverse,
    IsActive,
    IsInactive,
    Or,
}

/// How many bracketed arguments a step takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `Keyword[]`
    None,
    /// `Keyword[arg]`
    One,
    /// `Keyword[a, b]`
    Two,
    /// `Keyword[a, b, ...]`
    AtLeastTwo,
    /// `Or(steps)`: no argument list, owns a nested chain instead.
    Group,
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::None | Arity::Group => count == 0,
            Arity::One => count == 1,
            Arity::Two => count == 2,
            Arity::AtLeastTwo => count >= 2,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::None => write!(f, "no arguments"),
            Arity::One => write!(f, "exactly 1 argument"),
            Arity::Two => write!(f, "exactly 2 arguments"),
            Arity::AtLeastTwo => write!(f, "at least 2 arguments"),
            Arity::Group => write!(f, "a parenthesized group"),
        }
    }
}

impl TokenKind {
    pub const ALL: [TokenKind; 13] = [
        TokenKind::NoOp,
        TokenKind::Start,
        TokenKind::Eval,
        TokenKind::HasType,
        TokenKind::HasValue,
        TokenKind::InScheme,
        TokenKind::HasBroader,
        TokenKind::IsInstance,
        TokenKind::Follow,
        TokenKind::FollowInverse,
        TokenKind::IsActive,
        TokenKind::IsInactive,
        TokenKind::Or,
    ];

    /// Exact keyword match. `NoOp` has no keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let kind = match keyword {
            "Start" => TokenKind::Start,
            "Eval" => TokenKind::Eval,
            "HasType" => TokenKind::HasType,
            "HasValue" => TokenKind::HasValue,
            "InScheme" => TokenKind::InScheme,
            "HasBroader" => TokenKind::HasBroader,
            "IsInstance" => TokenKind::IsInstance,
            "Follow" => TokenKind::Follow,
            "FollowInverse" => TokenKind::FollowInverse,
            "IsActive" => TokenKind::IsActive,
            "IsInactive" => TokenKind::IsInactive,
            "Or" => TokenKind::Or,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::NoOp => "NoOp",
            TokenKind::Start => "Start",
            TokenKind::Eval => "Eval",
            TokenKind::HasType => "HasType",
            TokenKind::HasValue => "HasValue",
            TokenKind::InScheme => "InScheme",
            TokenKind::HasBroader => "HasBroader",
            TokenKind::IsInstance => "IsInstance",
            TokenKind::Follow => "Follow",
            TokenKind::FollowInverse => "FollowInverse",
            TokenKind::IsActive => "IsActive",
            TokenKind::IsInactive => "IsInactive",
            TokenKind::Or => "Or",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            TokenKind::NoOp
            | TokenKind::Start
            | TokenKind::Eval
            | TokenKind::IsActive
            | TokenKind::IsInactive => Arity::None,
            TokenKind::HasType
            | TokenKind::InScheme
            | TokenKind::IsInstance
            | TokenKind::Follow
            | TokenKind::FollowInverse => Arity::One,
            TokenKind::HasBroader => Arity::Two,
            TokenKind::HasValue => Arity::AtLeastTwo,
            TokenKind::Or => Arity::Group,
        }
    }

    /// `Start` and `Eval` only appear as the command envelope.
    pub fn is_envelope(self) -> bool {
        matches!(self, TokenKind::Start | TokenKind::Eval)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
