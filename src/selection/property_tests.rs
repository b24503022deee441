//! Property tests for selection module
//!
//! Property 5: Sampling Without Replacement
//! Property 6: Weapon Pick Coverage

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::config::{
    MagicType, SpellSpec, Weapon, WeaponCategory, WeaponPools, WeaponReach, WeaponSize,
};
use crate::error::EnemyGenError;
use crate::selection::{select_spells, select_weapons, weighted_index};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn magic_type_strategy() -> impl Strategy<Value = MagicType> {
    prop_oneof![
        Just(MagicType::Folk),
        Just(MagicType::Theism),
        Just(MagicType::Sorcery),
    ]
}

fn category_strategy() -> impl Strategy<Value = WeaponCategory> {
    prop_oneof![
        Just(WeaponCategory::OneHandMelee),
        Just(WeaponCategory::TwoHandMelee),
        Just(WeaponCategory::Ranged),
        Just(WeaponCategory::Shield),
    ]
}

/// Generate a spell list with unique names and weights in [0, 10]
fn spells_strategy() -> impl Strategy<Value = Vec<SpellSpec>> {
    prop::collection::vec((magic_type_strategy(), 0..=10u32), 0..=12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (magic_type, probability))| SpellSpec {
                name: format!("Spell {:02}", i),
                magic_type,
                probability,
                detail: None,
            })
            .collect()
    })
}

fn weapons_strategy() -> impl Strategy<Value = Vec<Weapon>> {
    prop::collection::vec(category_strategy(), 0..=10).prop_map(|categories| {
        categories
            .into_iter()
            .enumerate()
            .map(|(i, category)| Weapon {
                name: format!("Weapon {}", i),
                category,
                damage: "1D6".to_string(),
                size: WeaponSize::M,
                reach: WeaponReach::Medium,
                ap: 4,
                hp: 6,
                damage_modifier: true,
            })
            .collect()
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Property 5.1: Selected spells are distinct, positive-weight and of the requested type
    #[test]
    fn prop_selection_distinct_and_eligible(
        spells in spells_strategy(),
        magic_type in magic_type_strategy(),
        amount in 0..=6i32,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let eligible: HashSet<String> = spells
            .iter()
            .filter(|s| s.magic_type == magic_type && s.probability > 0)
            .map(|s| s.name.clone())
            .collect();

        match select_spells(&spells, magic_type, &amount.to_string(), &(), &mut rng) {
            Ok(picked) => {
                let unique: HashSet<&String> = picked.iter().collect();
                prop_assert_eq!(unique.len(), picked.len());
                prop_assert!(picked.iter().all(|p| eligible.contains(p)));
                let mut sorted = picked.clone();
                sorted.sort();
                prop_assert_eq!(&sorted, &picked);

                let expected = if magic_type == MagicType::Folk {
                    (amount as usize).min(eligible.len())
                } else {
                    amount as usize
                };
                prop_assert_eq!(picked.len(), expected);
            }
            Err(err) => {
                // Only non-folk types may run dry
                prop_assert_ne!(magic_type, MagicType::Folk);
                prop_assert!(amount as usize > eligible.len());
                prop_assert_eq!(err, EnemyGenError::EmptyPool(magic_type));
            }
        }
    }

    /// Property 5.2: Folk selection never fails on a pool shortage
    #[test]
    fn prop_folk_never_empty_pool(spells in spells_strategy(), amount in 0..=20i32, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert!(select_spells(&spells, MagicType::Folk, &amount.to_string(), &(), &mut rng).is_ok());
    }

    /// Property 5.3: Weighted index only lands on positive weights
    #[test]
    fn prop_weighted_index_positive(weights in prop::collection::vec(0..=5u32, 1..=10), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        match weighted_index(&weights, &mut rng) {
            Some(i) => prop_assert!(weights[i] > 0),
            None => prop_assert!(weights.iter().all(|w| *w == 0)),
        }
    }

    /// Property 6.1: One weapon per non-empty category, in category order
    #[test]
    fn prop_weapons_one_per_category(weapons in weapons_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let pools = WeaponPools::from(weapons);
        let armed = select_weapons(&pools, &mut rng);

        let expected: Vec<WeaponCategory> = WeaponCategory::ALL
            .into_iter()
            .filter(|c| !pools.pool(*c).is_empty())
            .collect();
        let actual: Vec<WeaponCategory> = armed.iter().map(|w| w.category).collect();
        prop_assert_eq!(actual, expected);

        for weapon in &armed {
            prop_assert!(pools.pool(weapon.category).iter().any(|w| w.name == weapon.name));
        }
    }
}
