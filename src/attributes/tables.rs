//! Lookup tables and formulas for derived attributes

use crate::error::{EnemyGenError, Result};

/// Damage modifier steps indexed by the STR+SIZ band
pub const DAMAGE_MODIFIER_STEPS: [&str; 19] = [
    "-1D8", "-1D6", "-1D4", "-1D2", "+0", "+1D2", "+1D4", "+1D6", "+1D8", "+1D10", "+1D12",
    "+2D6", "+1D8+1D6", "+2D8", "+1D10+1D8", "+2D10", "+2D10+1D2", "+2D10+1D4", "+2D10+1D6",
];

/// Sum two stats, failing with `OutOfRange` instead of wrapping
#[inline]
pub fn stat_sum(label: &str, a: i32, b: i32) -> Result<i32> {
    a.checked_add(b)
        .ok_or_else(|| EnemyGenError::OutOfRange(format!("{} overflows: {} + {}", label, a, b)))
}

/// Action points for a DEX+INT sum
///
/// Bands of 12; sums above 48 have no entry.
#[inline]
pub fn action_points(dex_int: i32) -> Result<i32> {
    match dex_int {
        i32::MIN..=12 => Ok(1),
        13..=24 => Ok(2),
        25..=36 => Ok(3),
        37..=48 => Ok(4),
        _ => Err(EnemyGenError::OutOfRange(format!(
            "DEX+INT {} has no action point entry",
            dex_int
        ))),
    }
}

/// Table index for a STR+SIZ sum: bands of 5 up to 50, bands of 10 above
#[inline]
pub fn damage_modifier_index(str_siz: i32) -> i32 {
    if str_siz <= 50 {
        (str_siz - 1).div_euclid(5)
    } else {
        10 + (str_siz - 51).div_euclid(10)
    }
}

/// Damage modifier die-set for a STR+SIZ sum
#[inline]
pub fn damage_modifier(str_siz: i32) -> Result<&'static str> {
    let index = damage_modifier_index(str_siz);
    usize::try_from(index)
        .ok()
        .and_then(|i| DAMAGE_MODIFIER_STEPS.get(i))
        .copied()
        .ok_or_else(|| {
            EnemyGenError::OutOfRange(format!(
                "STR+SIZ {} has no damage modifier entry",
                str_siz
            ))
        })
}

/// Strike rank bonus, e.g. "+12"
#[inline]
pub fn strike_rank(int: i32, dex: i32) -> Result<String> {
    Ok(format!("+{}", stat_sum("INT+DEX", int, dex)?.div_euclid(2)))
}

/// Hit points of one location
#[inline]
pub fn location_hit_points(con: i32, siz: i32, hp_modifier: i32) -> Result<i32> {
    let hp = (con as i64 + siz as i64 - 1).div_euclid(5) + 1 + hp_modifier as i64;
    i32::try_from(hp).map_err(|_| {
        EnemyGenError::OutOfRange(format!(
            "Hit points overflow: CON {} SIZ {} modifier {}",
            con, siz, hp_modifier
        ))
    })
}

/// Display label of a d20 range: "07" or "01-03"
pub fn location_range(start: i32, end: i32) -> String {
    if start == end {
        format!("{:02}", start)
    } else {
        format!("{:02}-{:02}", start, end)
    }
}
