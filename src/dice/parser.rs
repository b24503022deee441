//! Dice notation parser

use crate::dice::ast::{DiceExpr, Sign, Term, TermKind};
use crate::error::{EnemyGenError, Result};

/// Upper bound on the dice rolled by a single term
pub const MAX_DICE_PER_TERM: u32 = 1000;

/// Parse a dice notation string such as `"2D6+1D4"` or `"STR+DEX"` into an AST
///
/// Parsing is case-insensitive and ignores whitespace between terms.
/// Variables are kept by name; they are resolved at evaluation time.
pub fn parse(notation: &str) -> Result<DiceExpr> {
    let notation = notation.trim();
    if notation.is_empty() {
        return Err(EnemyGenError::InvalidNotation(
            "Empty expression".to_string(),
        ));
    }

    let tokens = tokenize(notation)?;
    parse_tokens(&tokens, notation)
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Word(String),
    Plus,
    Minus,
}

fn tokenize(notation: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in notation.chars() {
        match c {
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut current)));
                }
            }
            '+' | '-' => {
                if !current.is_empty() {
                    tokens.push(Token::Word(std::mem::take(&mut current)));
                }
                tokens.push(if c == '+' { Token::Plus } else { Token::Minus });
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                current.push(c.to_ascii_uppercase());
            }
            _ => {
                return Err(EnemyGenError::InvalidNotation(format!(
                    "Unexpected character '{}' in: {}",
                    c, notation
                )));
            }
        }
    }

    if !current.is_empty() {
        tokens.push(Token::Word(current));
    }

    Ok(tokens)
}

fn parse_tokens(tokens: &[Token], notation: &str) -> Result<DiceExpr> {
    let mut terms = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut pending_sign: Option<Sign> = None;
    let mut expect_term = true;

    for token in tokens {
        match token {
            Token::Plus | Token::Minus => {
                let sign = if *token == Token::Plus {
                    Sign::Plus
                } else {
                    Sign::Minus
                };
                // A sign is only legal right after a term, or once at the very start
                let leading = terms.is_empty() && pending_sign.is_none();
                if !expect_term || leading {
                    pending_sign = Some(sign);
                    expect_term = true;
                } else {
                    return Err(unmatched_operator(notation));
                }
            }
            Token::Word(word) => {
                if !expect_term {
                    return Err(EnemyGenError::InvalidNotation(format!(
                        "Missing operator before '{}' in: {}",
                        word, notation
                    )));
                }
                let kind = parse_term(word)?;
                terms.push(Term {
                    sign: pending_sign.take().unwrap_or(Sign::Plus),
                    kind,
                });
                expect_term = false;
            }
        }
    }

    if pending_sign.is_some() {
        return Err(unmatched_operator(notation));
    }

    if terms.is_empty() {
        return Err(EnemyGenError::InvalidNotation(format!(
            "No terms in: {}",
            notation
        )));
    }

    Ok(DiceExpr { terms })
}

fn unmatched_operator(notation: &str) -> EnemyGenError {
    EnemyGenError::InvalidNotation(format!("Unmatched operator in: {}", notation))
}

fn parse_term(word: &str) -> Result<TermKind> {
    if let Some(kind) = parse_dice(word)? {
        return Ok(kind);
    }

    if word.bytes().all(|b| b.is_ascii_digit()) {
        let value = word.parse::<u32>().map_err(|_| {
            EnemyGenError::InvalidNotation(format!("Constant too large: {}", word))
        })?;
        return Ok(TermKind::Constant(value));
    }

    if word.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Ok(TermKind::Variable(word.to_string()));
    }

    Err(EnemyGenError::InvalidNotation(format!(
        "Cannot parse term: {}",
        word
    )))
}

/// Recognize `NdM` / `dM`; returns `Ok(None)` when the word is not dice-shaped
fn parse_dice(word: &str) -> Result<Option<TermKind>> {
    let Some(d_pos) = word.find('D') else {
        return Ok(None);
    };
    let count_str = &word[..d_pos];
    let sides_str = &word[d_pos + 1..];

    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(count_str.is_empty() || is_digits(count_str)) || !is_digits(sides_str) {
        return Ok(None);
    }

    let count: u32 = if count_str.is_empty() {
        1
    } else {
        count_str.parse().map_err(|_| {
            EnemyGenError::InvalidNotation(format!("Dice count too large: {}", word))
        })?
    };
    let sides: u32 = sides_str.parse().map_err(|_| {
        EnemyGenError::InvalidNotation(format!("Die size too large: {}", word))
    })?;

    if count == 0 {
        return Err(EnemyGenError::InvalidNotation(format!(
            "Dice count must be positive: {}",
            word
        )));
    }
    if count > MAX_DICE_PER_TERM {
        return Err(EnemyGenError::InvalidNotation(format!(
            "Too many dice ({} > {}): {}",
            count, MAX_DICE_PER_TERM, word
        )));
    }
    if sides == 0 {
        return Err(EnemyGenError::InvalidNotation(format!(
            "Die size must be positive: {}",
            word
        )));
    }

    Ok(Some(TermKind::Dice { count, sides }))
}
