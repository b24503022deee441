//! Generated enemy structures

use crate::attributes::DerivedAttributes;
use crate::selection::{Armament, SpellBook};
use crate::stats::{RolledValue, StatBlock};
use serde::Serialize;

/// Rolled hit location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolledHitLocation {
    pub name: String,
    /// d20 range label, e.g. "01-03"
    pub range: String,
    pub hp: i32,
    pub armor: i32,
}

/// Rolled combat style with the weapons picked for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolledCombatStyle {
    pub name: String,
    pub value: i32,
    pub weapons: Armament,
}

/// A fully rolled enemy
///
/// Owns all of its data; nothing is shared with the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enemy {
    pub name: String,
    /// Name of the template this enemy was rolled from
    pub template: String,
    pub rank: u8,
    /// "Rubble" .. "Master"; None when the rank is outside 1-5
    pub rank_title: Option<&'static str>,
    pub stats: StatBlock,
    pub skills: Vec<RolledValue>,
    pub spells: SpellBook,
    pub hit_locations: Vec<RolledHitLocation>,
    pub combat_styles: Vec<RolledCombatStyle>,
    pub attributes: DerivedAttributes,
}

impl Enemy {
    pub fn skill(&self, name: &str) -> Option<i32> {
        self.skills
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| s.value)
    }
}
