//! Enemy builder module
//!
//! Turns a template into a fully rolled enemy.

mod enemy;
mod engine;
mod session;

#[cfg(test)]
mod property_tests;

pub use enemy::*;
pub use engine::*;
pub use session::*;
