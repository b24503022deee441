//! Resolved stat storage
//!
//! A `StatBlock` keeps rolled stats in template order and doubles as the
//! substitution context for every die-set evaluated after the stats.

mod block;

pub use block::*;
