//! Dice expression evaluator

use crate::dice::ast::{DiceExpr, Sign, TermKind};
use crate::error::{EnemyGenError, Result};
use rand::Rng;
use std::collections::HashMap;

/// Source of named values for variables in a dice expression
///
/// Lookups receive the uppercase identifier from the parsed expression.
pub trait Substitution {
    fn value_of(&self, name: &str) -> Option<i32>;
}

/// The empty context: every variable is unknown
impl Substitution for () {
    #[inline]
    fn value_of(&self, _name: &str) -> Option<i32> {
        None
    }
}

impl Substitution for HashMap<String, i32> {
    fn value_of(&self, name: &str) -> Option<i32> {
        if let Some(value) = self.get(name) {
            return Some(*value);
        }
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

impl DiceExpr {
    /// Roll every term and return the signed sum
    pub fn evaluate<C, R>(&self, context: &C, rng: &mut R) -> Result<i32>
    where
        C: Substitution + ?Sized,
        R: Rng + ?Sized,
    {
        let mut total: i64 = 0;

        for term in &self.terms {
            let value: i64 = match &term.kind {
                TermKind::Dice { count, sides } => (0..*count)
                    .map(|_| rng.gen_range(1..=*sides) as i64)
                    .sum(),
                TermKind::Constant(value) => *value as i64,
                TermKind::Variable(name) => resolve(name, context)? as i64,
            };
            total += term.sign.apply(value);
        }

        to_i32(total, self)
    }

    /// Inclusive `(min, max)` this expression can produce under `context`
    pub fn bounds<C>(&self, context: &C) -> Result<(i32, i32)>
    where
        C: Substitution + ?Sized,
    {
        let mut low: i64 = 0;
        let mut high: i64 = 0;

        for term in &self.terms {
            let (term_low, term_high) = match &term.kind {
                TermKind::Dice { count, sides } => {
                    (*count as i64, *count as i64 * *sides as i64)
                }
                TermKind::Constant(value) => (*value as i64, *value as i64),
                TermKind::Variable(name) => {
                    let value = resolve(name, context)? as i64;
                    (value, value)
                }
            };
            match term.sign {
                Sign::Plus => {
                    low += term_low;
                    high += term_high;
                }
                Sign::Minus => {
                    low -= term_high;
                    high -= term_low;
                }
            }
        }

        Ok((to_i32(low, self)?, to_i32(high, self)?))
    }
}

fn resolve<C: Substitution + ?Sized>(name: &str, context: &C) -> Result<i32> {
    context
        .value_of(name)
        .ok_or_else(|| EnemyGenError::InvalidNotation(format!("Unknown identifier: {}", name)))
}

fn to_i32(value: i64, expr: &DiceExpr) -> Result<i32> {
    i32::try_from(value)
        .map_err(|_| EnemyGenError::OutOfRange(format!("{} overflows: {}", expr, value)))
}
