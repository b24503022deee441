//! Selection algorithms
//!
//! Weighted sampling without replacement for spells and uniform picks for
//! weapons. Every function takes the RNG explicitly.

mod spell;
mod weapon;

#[cfg(test)]
mod property_tests;

pub use spell::*;
pub use weapon::*;
