//! Ordered stat block

use crate::dice::Substitution;
use crate::error::{EnemyGenError, Result};
use ahash::AHashMap;
use serde::Serialize;

/// A named rolled value (stat, skill)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RolledValue {
    pub name: String,
    pub value: i32,
}

/// Rolled stats in insertion order with a case-insensitive name index
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct StatBlock {
    entries: Vec<RolledValue>,
    #[serde(skip)]
    index: AHashMap<String, usize>,
}

impl StatBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Insert a stat, replacing the value of an existing one in place
    pub fn insert(&mut self, name: &str, value: i32) {
        let key = name.to_ascii_uppercase();
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].value = value;
            return;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(RolledValue {
            name: name.to_string(),
            value,
        });
    }

    /// Look up a stat by name, ignoring case
    #[inline]
    pub fn get(&self, name: &str) -> Option<i32> {
        let pos = match self.index.get(name) {
            Some(pos) => *pos,
            None => *self.index.get(&name.to_ascii_uppercase())?,
        };
        Some(self.entries[pos].value)
    }

    /// Look up a stat that a formula cannot do without
    #[inline]
    pub fn require(&self, name: &str) -> Result<i32> {
        self.get(name)
            .ok_or_else(|| EnemyGenError::MissingStat(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RolledValue> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl PartialEq for StatBlock {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for StatBlock {}

impl Substitution for StatBlock {
    #[inline]
    fn value_of(&self, name: &str) -> Option<i32> {
        self.get(name)
    }
}

impl<'a> FromIterator<(&'a str, i32)> for StatBlock {
    fn from_iter<I: IntoIterator<Item = (&'a str, i32)>>(iter: I) -> Self {
        let mut block = StatBlock::new();
        for (name, value) in iter {
            block.insert(name, value);
        }
        block
    }
}
