//! Benchmark for enemy generation performance
//!
//! Target: generating one enemy should complete in well under 50µs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use enemygen_core::builder::{generate, generate_batch, EnemyBuilder};
use enemygen_core::config::{
    CombatStyleSpec, HitLocationSpec, MagicType, SkillSpec, SpellSpec, StatSpec, TemplateConfig,
    Weapon, WeaponCategory, WeaponPools, WeaponReach, WeaponSize,
};
use enemygen_core::dice::{clear_cache, evaluate_dice, parse};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Create a realistic template: 7 stats, 20 skills, 7 locations, 30 spells
fn create_test_template() -> TemplateConfig {
    let mut template = TemplateConfig::new("Benchmark Warrior");

    for (name, die_set) in [
        ("STR", "3D6"),
        ("CON", "3D6"),
        ("SIZ", "2D6+6"),
        ("DEX", "3D6"),
        ("INT", "2D6+6"),
        ("POW", "3D6"),
        ("CHA", "3D6"),
    ] {
        template.stats.push(StatSpec {
            name: name.to_string(),
            die_set: die_set.to_string(),
        });
    }

    let pairs = ["STR+DEX", "CON+POW", "DEX+INT", "INT+CHA", "STR+SIZ"];
    for i in 0..20 {
        template.skills.push(SkillSpec {
            name: format!("Skill {}", i),
            die_set: format!("{}+{}", pairs[i % pairs.len()], i % 10),
            include: i % 4 != 0,
        });
    }

    let locations = [
        ("Right Leg", 1, 3, 0),
        ("Left Leg", 4, 6, 0),
        ("Abdomen", 7, 9, 1),
        ("Chest", 10, 12, 2),
        ("Right Arm", 13, 15, -1),
        ("Left Arm", 16, 18, -1),
        ("Head", 19, 20, 0),
    ];
    for (name, start, end, modifier) in locations {
        template.hit_locations.push(HitLocationSpec {
            name: name.to_string(),
            range_start: start,
            range_end: end,
            hp_modifier: modifier,
            armor: "1D4+1".to_string(),
        });
    }

    for i in 0..30 {
        let magic_type = MagicType::ALL[i % 3];
        template.spells.push(SpellSpec {
            name: format!("{} Spell {}", magic_type, i),
            magic_type,
            probability: (i % 5) as u32,
            detail: if i % 7 == 0 { Some("2".to_string()) } else { None },
        });
    }
    template.spell_amounts.folk = "1D4".to_string();
    template.spell_amounts.theism = "1D2".to_string();
    template.spell_amounts.sorcery = "1".to_string();

    let mut weapons = Vec::new();
    for (i, category) in WeaponCategory::ALL.into_iter().enumerate() {
        for j in 0..3 {
            weapons.push(Weapon {
                name: format!("Weapon {}-{}", i, j),
                category,
                damage: "1D8".to_string(),
                size: WeaponSize::M,
                reach: WeaponReach::Medium,
                ap: 4,
                hp: 8,
                damage_modifier: category != WeaponCategory::Shield,
            });
        }
    }
    template.combat_styles.push(CombatStyleSpec {
        name: "Soldier".to_string(),
        die_set: "STR+DEX".to_string(),
        weapon_options: WeaponPools::from(weapons),
    });

    template
}

fn benchmark_generation(c: &mut Criterion) {
    let template = create_test_template();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("generate_enemy", |b| {
        b.iter(|| {
            let enemy = generate(black_box(&template), &mut rng);
            black_box(enemy)
        })
    });

    let builder = EnemyBuilder::new(&template);
    c.bench_function("builder_reuse", |b| {
        b.iter(|| black_box(builder.build(Some("1"), &mut rng)))
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let template = create_test_template();

    c.bench_function("generate_batch_20", |b| {
        b.iter(|| black_box(generate_batch(black_box(&template), 20, 7)))
    });
}

fn benchmark_dice(c: &mut Criterion) {
    let notation = "2D10+1D6+STR-1D4+3";

    c.bench_function("dice_parsing_cold", |b| {
        b.iter(|| black_box(parse(black_box(notation))))
    });

    let context: std::collections::HashMap<String, i32> =
        [("STR".to_string(), 14)].into_iter().collect();
    let mut rng = StdRng::seed_from_u64(1);
    clear_cache();
    c.bench_function("dice_evaluation_cached", |b| {
        b.iter(|| black_box(evaluate_dice(black_box(notation), &context, &mut rng)))
    });
}

criterion_group!(benches, benchmark_generation, benchmark_batch, benchmark_dice);
criterion_main!(benches);
