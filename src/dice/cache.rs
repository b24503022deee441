//! Parsed dice expression cache

use crate::dice::ast::DiceExpr;
use crate::dice::evaluator::Substitution;
use crate::dice::parser;
use crate::error::Result;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use rand::Rng;

/// Upper bound on cached notations; the cache is flushed when it fills
pub const MAX_CACHED_EXPRESSIONS: usize = 4096;

/// Global expression cache keyed by the raw notation string
static EXPRESSION_CACHE: Lazy<RwLock<AHashMap<String, DiceExpr>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(512);
    RwLock::new(map)
});

/// Insert into a cache holding at most `cap` entries
fn insert_bounded(cache: &mut AHashMap<String, DiceExpr>, notation: &str, expr: DiceExpr, cap: usize) {
    if cache.len() >= cap && !cache.contains_key(notation) {
        tracing::debug!(entries = cache.len(), "Dice expression cache full, flushing");
        cache.clear();
    }
    cache.insert(notation.to_string(), expr);
}

/// Get or parse a dice expression, using the cache for repeated notations
#[inline]
pub fn get_or_parse(notation: &str) -> Result<DiceExpr> {
    {
        let cache = EXPRESSION_CACHE.read();
        if let Some(expr) = cache.get(notation) {
            return Ok(expr.clone());
        }
    }

    let expr = parser::parse(notation)?;

    {
        let mut cache = EXPRESSION_CACHE.write();
        insert_bounded(&mut cache, notation, expr.clone(), MAX_CACHED_EXPRESSIONS);
    }

    Ok(expr)
}

/// Parse (cached) and evaluate a dice notation string against a context
#[inline]
pub fn evaluate_dice<C, R>(notation: &str, context: &C, rng: &mut R) -> Result<i32>
where
    C: Substitution + ?Sized,
    R: Rng + ?Sized,
{
    let expr = get_or_parse(notation)?;
    expr.evaluate(context, rng)
}

/// Clear the expression cache
#[allow(dead_code)]
pub fn clear_cache() {
    let mut cache = EXPRESSION_CACHE.write();
    cache.clear();
}

/// Number of cached expressions
pub fn cache_size() -> usize {
    let cache = EXPRESSION_CACHE.read();
    cache.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnemyGenError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_cache_hit() {
        // Notation unique to this test so parallel tests don't interfere
        let notation = "17D3+991";
        let mut rng = StdRng::seed_from_u64(3);

        let first = evaluate_dice(notation, &(), &mut rng).unwrap();
        assert!((1008..=1042).contains(&first));
        // Another test may flush the shared cache; the parse must still match
        assert_eq!(get_or_parse(notation).unwrap(), parser::parse(notation).unwrap());

        let second = evaluate_dice(notation, &(), &mut rng).unwrap();
        assert!((1008..=1042).contains(&second));
    }

    #[test]
    fn test_invalid_notation_not_cached() {
        let mut rng = StdRng::seed_from_u64(3);
        let result = evaluate_dice("3X6", &(), &mut rng);
        assert!(matches!(result, Err(EnemyGenError::InvalidNotation(_))));
        let cache = EXPRESSION_CACHE.read();
        assert!(!cache.contains_key("3X6"));
    }

    #[test]
    fn test_insert_bounded_flushes_at_cap() {
        let mut cache = AHashMap::new();
        for i in 0..3 {
            let notation = format!("{}D6", i + 1);
            insert_bounded(&mut cache, &notation, parser::parse(&notation).unwrap(), 3);
        }
        assert_eq!(cache.len(), 3);

        // Re-inserting a present key never flushes
        insert_bounded(&mut cache, "1D6", parser::parse("1D6").unwrap(), 3);
        assert_eq!(cache.len(), 3);

        insert_bounded(&mut cache, "4D6", parser::parse("4D6").unwrap(), 3);
        assert_eq!(cache.len(), 1);
        assert!(cache.contains_key("4D6"));
    }

    #[test]
    fn test_distinct_notations_stay_bounded() {
        let mut rng = StdRng::seed_from_u64(5);
        for i in 0..MAX_CACHED_EXPRESSIONS + 100 {
            let notation = format!("1D1+{}", 100_000 + i);
            assert_eq!(
                evaluate_dice(&notation, &(), &mut rng).unwrap(),
                100_001 + i as i32
            );
        }
        assert!(cache_size() <= MAX_CACHED_EXPRESSIONS);
    }
}
