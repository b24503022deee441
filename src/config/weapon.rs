//! Weapon configuration structures

use crate::error::{EnemyGenError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Weapon category; each combat style draws at most one weapon per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    #[serde(rename = "1h-melee")]
    OneHandMelee,
    #[serde(rename = "2h-melee")]
    TwoHandMelee,
    #[serde(rename = "ranged")]
    Ranged,
    #[serde(rename = "shield")]
    Shield,
}

impl WeaponCategory {
    /// Pick order used when arming a combat style
    pub const ALL: [WeaponCategory; 4] = [
        WeaponCategory::OneHandMelee,
        WeaponCategory::TwoHandMelee,
        WeaponCategory::Ranged,
        WeaponCategory::Shield,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponCategory::OneHandMelee => "1h-melee",
            WeaponCategory::TwoHandMelee => "2h-melee",
            WeaponCategory::Ranged => "ranged",
            WeaponCategory::Shield => "shield",
        }
    }
}

impl fmt::Display for WeaponCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeaponCategory {
    type Err = EnemyGenError;

    fn from_str(s: &str) -> Result<Self> {
        WeaponCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                EnemyGenError::DeserializationError(format!("Unknown weapon category: {}", s))
            })
    }
}

/// Weapon size class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponSize {
    S,
    M,
    L,
    H,
    E,
}

impl FromStr for WeaponSize {
    type Err = EnemyGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(WeaponSize::S),
            "M" => Ok(WeaponSize::M),
            "L" => Ok(WeaponSize::L),
            "H" => Ok(WeaponSize::H),
            "E" => Ok(WeaponSize::E),
            _ => Err(EnemyGenError::DeserializationError(format!(
                "Unknown weapon size: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for WeaponSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Weapon reach class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponReach {
    #[serde(rename = "-")]
    None,
    #[serde(rename = "T")]
    Touch,
    #[serde(rename = "S")]
    Short,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Long,
    #[serde(rename = "VL")]
    VeryLong,
}

impl WeaponReach {
    pub fn as_str(self) -> &'static str {
        match self {
            WeaponReach::None => "-",
            WeaponReach::Touch => "T",
            WeaponReach::Short => "S",
            WeaponReach::Medium => "M",
            WeaponReach::Long => "L",
            WeaponReach::VeryLong => "VL",
        }
    }
}

impl FromStr for WeaponReach {
    type Err = EnemyGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "-" => Ok(WeaponReach::None),
            "T" => Ok(WeaponReach::Touch),
            "S" => Ok(WeaponReach::Short),
            "M" => Ok(WeaponReach::Medium),
            "L" => Ok(WeaponReach::Long),
            "VL" => Ok(WeaponReach::VeryLong),
            _ => Err(EnemyGenError::DeserializationError(format!(
                "Unknown weapon reach: {}",
                s
            ))),
        }
    }
}

impl fmt::Display for WeaponReach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weapon definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    #[serde(rename = "type")]
    pub category: WeaponCategory,
    #[serde(default = "default_damage")]
    pub damage: String,
    pub size: WeaponSize,
    pub reach: WeaponReach,
    #[serde(default)]
    pub ap: i32,
    #[serde(default)]
    pub hp: i32,
    /// Whether the wielder's damage modifier applies
    #[serde(default)]
    pub damage_modifier: bool,
}

fn default_damage() -> String {
    "0".to_string()
}

/// Weapon options of a combat style, one pool per category
///
/// Deserializes from a flat weapon list and partitions it by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Vec<Weapon>")]
pub struct WeaponPools {
    pub one_hand_melee: Vec<Arc<Weapon>>,
    pub two_hand_melee: Vec<Arc<Weapon>>,
    pub ranged: Vec<Arc<Weapon>>,
    pub shields: Vec<Arc<Weapon>>,
}

impl WeaponPools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a weapon to the pool of its category
    pub fn push(&mut self, weapon: Arc<Weapon>) {
        match weapon.category {
            WeaponCategory::OneHandMelee => self.one_hand_melee.push(weapon),
            WeaponCategory::TwoHandMelee => self.two_hand_melee.push(weapon),
            WeaponCategory::Ranged => self.ranged.push(weapon),
            WeaponCategory::Shield => self.shields.push(weapon),
        }
    }

    pub fn pool(&self, category: WeaponCategory) -> &[Arc<Weapon>] {
        match category {
            WeaponCategory::OneHandMelee => &self.one_hand_melee,
            WeaponCategory::TwoHandMelee => &self.two_hand_melee,
            WeaponCategory::Ranged => &self.ranged,
            WeaponCategory::Shield => &self.shields,
        }
    }

    pub fn len(&self) -> usize {
        WeaponCategory::ALL.iter().map(|c| self.pool(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<Weapon>> for WeaponPools {
    fn from(weapons: Vec<Weapon>) -> Self {
        let mut pools = WeaponPools::new();
        for weapon in weapons {
            pools.push(Arc::new(weapon));
        }
        pools
    }
}

/// Weapons known by name, shared between combat styles
#[derive(Debug, Clone, Default)]
pub struct WeaponCatalog {
    weapons: AHashMap<String, Arc<Weapon>>,
}

impl WeaponCatalog {
    pub fn new(weapons: Vec<Weapon>) -> Self {
        let mut map = AHashMap::with_capacity(weapons.len());
        for weapon in weapons {
            map.insert(weapon.name.clone(), Arc::new(weapon));
        }
        Self { weapons: map }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Weapon>> {
        self.weapons.get(name)
    }

    /// Look up a weapon that a template refers to by name
    pub fn resolve(&self, name: &str) -> Result<Arc<Weapon>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| EnemyGenError::UnknownWeapon(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}
