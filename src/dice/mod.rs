//! Dice notation parsing and evaluation module
//!
//! This module handles die-set strings like "2D6+1D4", "STR+DEX" or "-1D8"
//! and evaluates them against a substitution context of named values.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use cache::*;
pub use evaluator::*;
pub use parser::*;

use crate::error::{EnemyGenError, Result};

/// Validate a die-set without rolling it
///
/// Every variable in the expression must be one of `known_names`
/// (case-insensitive). Pass an empty slice for die-sets that must be
/// self-contained, such as stat or armor die-sets.
pub fn validate(notation: &str, known_names: &[&str]) -> Result<DiceExpr> {
    let expr = get_or_parse(notation)?;
    if let Some(unknown) = expr
        .variables()
        .find(|var| !known_names.iter().any(|name| name.eq_ignore_ascii_case(var)))
    {
        return Err(EnemyGenError::InvalidNotation(format!(
            "Unknown identifier {} in: {}",
            unknown, notation
        )));
    }
    Ok(expr)
}
