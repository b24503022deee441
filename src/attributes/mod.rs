//! Derived attribute module
//!
//! Secondary attributes computed from a fully rolled stat block.

mod tables;


pub use tables::*;

use crate::error::Result;
use crate::stats::StatBlock;
use serde::Serialize;

/// Secondary attributes of a generated enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedAttributes {
    pub action_points: i32,
    pub damage_modifier: String,
    pub magic_points: i32,
    pub strike_rank: String,
    pub movement: i32,
}

/// Compute all derived attributes from the stat block
///
/// Fails with `MissingStat` when the block lacks DEX, INT, STR, SIZ or POW.
pub fn derive_attributes(stats: &StatBlock, movement: i32) -> Result<DerivedAttributes> {
    let dex = stats.require("DEX")?;
    let int = stats.require("INT")?;
    let str_ = stats.require("STR")?;
    let siz = stats.require("SIZ")?;
    let pow = stats.require("POW")?;

    Ok(DerivedAttributes {
        action_points: action_points(stat_sum("DEX+INT", dex, int)?)?,
        damage_modifier: damage_modifier(stat_sum("STR+SIZ", str_, siz)?)?.to_string(),
        magic_points: pow,
        strike_rank: strike_rank(int, dex)?,
        movement,
    })
}

/// Hit points of a location for this stat block
pub fn hit_points_for(stats: &StatBlock, hp_modifier: i32) -> Result<i32> {
    let con = stats.require("CON")?;
    let siz = stats.require("SIZ")?;
    location_hit_points(con, siz, hp_modifier)
}
