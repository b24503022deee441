//! Weighted spell selection without replacement

use crate::config::{MagicType, SpellSpec};
use crate::dice::{evaluate_dice, Substitution};
use crate::error::{EnemyGenError, Result};
use rand::Rng;
use serde::Serialize;

/// Selected spell names per magic type, each list sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpellBook {
    pub folk: Vec<String>,
    pub theism: Vec<String>,
    pub sorcery: Vec<String>,
}

impl SpellBook {
    pub fn get(&self, magic_type: MagicType) -> &[String] {
        match magic_type {
            MagicType::Folk => &self.folk,
            MagicType::Theism => &self.theism,
            MagicType::Sorcery => &self.sorcery,
        }
    }

    pub fn set(&mut self, magic_type: MagicType, spells: Vec<String>) {
        match magic_type {
            MagicType::Folk => self.folk = spells,
            MagicType::Theism => self.theism = spells,
            MagicType::Sorcery => self.sorcery = spells,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.folk.is_empty() && self.theism.is_empty() && self.sorcery.is_empty()
    }
}

/// Pick an index with probability proportional to its weight
///
/// Returns `None` when the slice is empty or every weight is zero.
#[inline]
pub fn weighted_index<R: Rng + ?Sized>(weights: &[u32], rng: &mut R) -> Option<usize> {
    let total: u64 = weights.iter().map(|w| *w as u64).sum();
    if total == 0 {
        return None;
    }

    let mut roll = rng.gen_range(0..total);
    for (i, weight) in weights.iter().enumerate() {
        let weight = *weight as u64;
        if roll < weight {
            return Some(i);
        }
        roll -= weight;
    }

    // Unreachable while roll < total
    None
}

/// Draw `amount` spells of one magic type
///
/// The amount die-set is evaluated against `context`; a negative result
/// draws nothing. Folk magic is capped at the number of selectable folk
/// spells, the other types fail with `EmptyPool` when they run dry.
pub fn select_spells<C, R>(
    spells: &[SpellSpec],
    magic_type: MagicType,
    amount: &str,
    context: &C,
    rng: &mut R,
) -> Result<Vec<String>>
where
    C: Substitution + ?Sized,
    R: Rng + ?Sized,
{
    let mut pool: Vec<&SpellSpec> = spells
        .iter()
        .filter(|s| s.magic_type == magic_type && s.probability > 0)
        .collect();

    let mut want = evaluate_dice(amount, context, rng)?.max(0) as usize;
    if magic_type == MagicType::Folk {
        want = want.min(pool.len());
    }

    let mut selected = Vec::with_capacity(want.min(pool.len()));
    let mut weights: Vec<u32> = pool.iter().map(|s| s.probability).collect();

    for _ in 0..want {
        let index = weighted_index(&weights, rng).ok_or(EnemyGenError::EmptyPool(magic_type))?;
        let spell = pool.remove(index);
        weights.remove(index);
        tracing::trace!(magic_type = %magic_type, spell = %spell.name, "Selected spell");
        selected.push(spell.display_name());
    }

    selected.sort();
    Ok(selected)
}
