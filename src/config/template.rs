//! Enemy template configuration structures

use crate::config::WeaponPools;
use crate::dice;
use crate::error::{EnemyGenError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enemy template: everything needed to roll one enemy
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateConfig {
    pub name: String,
    /// 1 Rubble, 2 Novice, 3 Skilled, 4 Veteran, 5 Master
    #[serde(default = "default_rank")]
    pub rank: u8,
    #[serde(default)]
    pub stats: Vec<StatSpec>,
    #[serde(default)]
    pub skills: Vec<SkillSpec>,
    #[serde(default)]
    pub hit_locations: Vec<HitLocationSpec>,
    #[serde(default)]
    pub spells: Vec<SpellSpec>,
    #[serde(default)]
    pub spell_amounts: SpellAmounts,
    #[serde(default)]
    pub combat_styles: Vec<CombatStyleSpec>,
    /// Race movement rate
    #[serde(default = "default_movement")]
    pub movement: i32,
}

fn default_rank() -> u8 {
    2
}

fn default_movement() -> i32 {
    6
}

/// Rank titles, index 0 is rank 1
pub const RANK_TITLES: [&str; 5] = ["Rubble", "Novice", "Skilled", "Veteran", "Master"];

impl TemplateConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rank: default_rank(),
            stats: Vec::new(),
            skills: Vec::new(),
            hit_locations: Vec::new(),
            spells: Vec::new(),
            spell_amounts: SpellAmounts::default(),
            combat_styles: Vec::new(),
            movement: default_movement(),
        }
    }

    pub fn rank_title(&self) -> Option<&'static str> {
        RANK_TITLES.get((self.rank as usize).checked_sub(1)?).copied()
    }

    /// Check every die-set of the template without rolling anything
    ///
    /// Stat and armor die-sets must be self-contained; skill, spell amount
    /// and combat style die-sets may refer to the template's stats.
    pub fn validate(&self) -> Result<()> {
        let stat_names: Vec<&str> = self.stats.iter().map(|s| s.name.as_str()).collect();

        for stat in &self.stats {
            dice::validate(&stat.die_set, &[])?;
        }
        for skill in &self.skills {
            dice::validate(&skill.die_set, &stat_names)?;
        }
        for magic_type in MagicType::ALL {
            dice::validate(self.spell_amounts.for_type(magic_type), &stat_names)?;
        }
        for location in &self.hit_locations {
            dice::validate(&location.armor, &[])?;
            if location.range_start > location.range_end {
                return Err(EnemyGenError::OutOfRange(format!(
                    "Hit location {} range {}-{}",
                    location.name, location.range_start, location.range_end
                )));
            }
        }
        for style in &self.combat_styles {
            dice::validate(&style.die_set, &stat_names)?;
        }
        Ok(())
    }
}

/// Primary stat rolled first, e.g. STR 3D6
#[derive(Debug, Clone, Deserialize)]
pub struct StatSpec {
    pub name: String,
    pub die_set: String,
}

/// Skill rolled against the stat block, e.g. Athletics STR+DEX
#[derive(Debug, Clone, Deserialize)]
pub struct SkillSpec {
    pub name: String,
    pub die_set: String,
    #[serde(default = "default_include")]
    pub include: bool,
}

fn default_include() -> bool {
    true
}

/// Hit location on a d20 table
#[derive(Debug, Clone, Deserialize)]
pub struct HitLocationSpec {
    pub name: String,
    pub range_start: i32,
    pub range_end: i32,
    #[serde(default)]
    pub hp_modifier: i32,
    /// Armor points die-set
    #[serde(default = "default_zero")]
    pub armor: String,
}

fn default_zero() -> String {
    "0".to_string()
}

/// Magic tradition of a spell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MagicType {
    Folk,
    Theism,
    Sorcery,
}

impl MagicType {
    /// Selection order used by the builder
    pub const ALL: [MagicType; 3] = [MagicType::Folk, MagicType::Theism, MagicType::Sorcery];

    pub fn as_str(self) -> &'static str {
        match self {
            MagicType::Folk => "folk",
            MagicType::Theism => "theism",
            MagicType::Sorcery => "sorcery",
        }
    }
}

impl fmt::Display for MagicType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MagicType {
    type Err = EnemyGenError;

    fn from_str(s: &str) -> Result<Self> {
        MagicType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EnemyGenError::DeserializationError(format!("Unknown magic type: {}", s)))
    }
}

/// Spell option with its selection weight
#[derive(Debug, Clone, Deserialize)]
pub struct SpellSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub magic_type: MagicType,
    /// Relative weight; 0 means never selected
    #[serde(default)]
    pub probability: u32,
    pub detail: Option<String>,
}

impl SpellSpec {
    /// "Name" or "Name detail"
    pub fn display_name(&self) -> String {
        match self.detail.as_deref() {
            Some(detail) if !detail.is_empty() => format!("{} {}", self.name, detail),
            _ => self.name.clone(),
        }
    }
}

/// Die-sets for how many spells of each type to pick
#[derive(Debug, Clone, Deserialize)]
pub struct SpellAmounts {
    #[serde(default = "default_zero")]
    pub folk: String,
    #[serde(default = "default_zero")]
    pub theism: String,
    #[serde(default = "default_zero")]
    pub sorcery: String,
}

impl Default for SpellAmounts {
    fn default() -> Self {
        Self {
            folk: default_zero(),
            theism: default_zero(),
            sorcery: default_zero(),
        }
    }
}

impl SpellAmounts {
    pub fn for_type(&self, magic_type: MagicType) -> &str {
        match magic_type {
            MagicType::Folk => &self.folk,
            MagicType::Theism => &self.theism,
            MagicType::Sorcery => &self.sorcery,
        }
    }
}

/// Combat style with its weapon options
#[derive(Debug, Clone, Deserialize)]
pub struct CombatStyleSpec {
    pub name: String,
    #[serde(default = "default_combat_die_set")]
    pub die_set: String,
    #[serde(default)]
    pub weapon_options: WeaponPools,
}

fn default_combat_die_set() -> String {
    "STR+DEX".to_string()
}
