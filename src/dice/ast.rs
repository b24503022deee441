//! Abstract Syntax Tree for dice expressions

use std::fmt;

/// Sign applied to a whole term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    #[inline]
    pub fn apply(self, value: i64) -> i64 {
        match self {
            Sign::Plus => value,
            Sign::Minus => -value,
        }
    }
}

/// A single operand of a dice expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// `NdM`: roll `count` dice with `sides` faces and sum them
    Dice { count: u32, sides: u32 },
    /// Bare integer constant
    Constant(u32),
    /// Named value looked up in the substitution context (stored uppercase)
    Variable(String),
}

/// Signed term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub sign: Sign,
    pub kind: TermKind,
}

/// A parsed dice expression: the signed sum of its terms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceExpr {
    pub terms: Vec<Term>,
}

impl DiceExpr {
    /// Names of all variables referenced by this expression
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().filter_map(|t| match &t.kind {
            TermKind::Variable(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Whether the expression references any context variable
    pub fn has_variables(&self) -> bool {
        self.variables().next().is_some()
    }
}

impl fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            match (i, term.sign) {
                (0, Sign::Plus) => {}
                (_, Sign::Plus) => write!(f, "+")?,
                (_, Sign::Minus) => write!(f, "-")?,
            }
            match &term.kind {
                TermKind::Dice { count, sides } => write!(f, "{}D{}", count, sides)?,
                TermKind::Constant(value) => write!(f, "{}", value)?,
                TermKind::Variable(name) => write!(f, "{}", name)?,
            }
        }
        Ok(())
    }
}
