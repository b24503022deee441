//! Uniform weapon selection

use crate::config::{Weapon, WeaponCategory, WeaponPools};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Weapons carried by one combat style, at most one per category
pub type Armament = SmallVec<[Weapon; 4]>;

/// Pick one item uniformly; an empty pool yields nothing
#[inline]
pub fn pick_uniform<'a, T, R: Rng + ?Sized>(pool: &'a [T], rng: &mut R) -> Option<&'a T> {
    pool.choose(rng)
}

/// Pick a weapon from every non-empty category pool
///
/// Weapons are copied out of the shared pools, in category order.
pub fn select_weapons<R: Rng + ?Sized>(pools: &WeaponPools, rng: &mut R) -> Armament {
    let mut weapons = Armament::new();
    for category in WeaponCategory::ALL {
        if let Some(weapon) = pick_uniform(pools.pool(category), rng) {
            tracing::trace!(category = %category, weapon = %weapon.name, "Selected weapon");
            weapons.push(Weapon::clone(weapon.as_ref()));
        }
    }
    weapons
}
