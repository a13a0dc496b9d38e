use std::fmt;

use crate::ast::TokenKind;

/// Logical operators joining two selections.
///
/// AND and OR share one precedence level and fold to the left, so
/// `atom CA or atom CB and residue ALA` reads as
/// `(atom CA or atom CB) and residue ALA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// Logical AND (`and`)
    And,
    /// Logical OR (`or`)
    Or,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}

impl TryFrom<TokenKind> for LogicalOp {
    type Error = TokenKind;

    /// Only `and`/`or` tokens can become an internal node; anything else is
    /// handed back unchanged.
    fn try_from(kind: TokenKind) -> Result<Self, Self::Error> {
        match kind {
            TokenKind::And => Ok(LogicalOp::And),
            TokenKind::Or => Ok(LogicalOp::Or),
            other => Err(other),
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
