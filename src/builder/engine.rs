//! Enemy generation engine

use crate::attributes::{derive_attributes, hit_points_for, location_range};
use crate::config::{MagicType, TemplateConfig};
use crate::dice::evaluate_dice;
use crate::error::Result;
use crate::selection::{select_spells, select_weapons, SpellBook};
use crate::stats::{RolledValue, StatBlock};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Enemy, RolledCombatStyle, RolledHitLocation};

/// Rolls enemies from a borrowed template
///
/// Each build runs the same fixed sequence: stats, skills, spells, derived
/// attributes, hit locations, combat styles. The first error aborts the build.
pub struct EnemyBuilder<'t> {
    template: &'t TemplateConfig,
}

impl<'t> EnemyBuilder<'t> {
    pub fn new(template: &'t TemplateConfig) -> Self {
        Self { template }
    }

    pub fn template(&self) -> &'t TemplateConfig {
        self.template
    }

    /// Roll one enemy, naming it "<template> <suffix>" when a suffix is given
    pub fn build<R: Rng + ?Sized>(&self, suffix: Option<&str>, rng: &mut R) -> Result<Enemy> {
        let template = self.template;

        let stats = self.roll_stats(rng)?;
        let skills = self.roll_skills(&stats, rng)?;
        let spells = self.select_spells(&stats, rng)?;
        let attributes = derive_attributes(&stats, template.movement)?;
        let hit_locations = self.roll_hit_locations(&stats, rng)?;
        let combat_styles = self.roll_combat_styles(&stats, rng)?;

        let name = match suffix {
            Some(suffix) => format!("{} {}", template.name, suffix),
            None => template.name.clone(),
        };

        tracing::debug!(
            enemy = %name,
            rank = template.rank_title().unwrap_or("Unranked"),
            skills = skills.len(),
            hit_locations = hit_locations.len(),
            combat_styles = combat_styles.len(),
            "Generated enemy"
        );

        Ok(Enemy {
            name,
            template: template.name.clone(),
            rank: template.rank,
            rank_title: template.rank_title(),
            stats,
            skills,
            spells,
            hit_locations,
            combat_styles,
            attributes,
        })
    }

    /// Stats are self-contained die-sets, rolled in template order
    fn roll_stats<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StatBlock> {
        let mut stats = StatBlock::with_capacity(self.template.stats.len());
        for spec in &self.template.stats {
            let value = evaluate_dice(&spec.die_set, &(), rng)?;
            stats.insert(&spec.name, value);
        }
        tracing::debug!(template = %self.template.name, stats = ?stats.iter().collect::<Vec<_>>(), "Rolled stats");
        Ok(stats)
    }

    fn roll_skills<R: Rng + ?Sized>(&self, stats: &StatBlock, rng: &mut R) -> Result<Vec<RolledValue>> {
        self.template
            .skills
            .iter()
            .filter(|spec| spec.include)
            .map(|spec| {
                Ok(RolledValue {
                    name: spec.name.clone(),
                    value: evaluate_dice(&spec.die_set, stats, rng)?,
                })
            })
            .collect()
    }

    fn select_spells<R: Rng + ?Sized>(&self, stats: &StatBlock, rng: &mut R) -> Result<SpellBook> {
        let mut book = SpellBook::default();
        for magic_type in MagicType::ALL {
            let amount = self.template.spell_amounts.for_type(magic_type);
            let selected = select_spells(&self.template.spells, magic_type, amount, stats, rng)?;
            book.set(magic_type, selected);
        }
        if !book.is_empty() {
            tracing::debug!(folk = ?book.folk, theism = ?book.theism, sorcery = ?book.sorcery, "Selected spells");
        }
        Ok(book)
    }

    fn roll_hit_locations<R: Rng + ?Sized>(
        &self,
        stats: &StatBlock,
        rng: &mut R,
    ) -> Result<Vec<RolledHitLocation>> {
        self.template
            .hit_locations
            .iter()
            .map(|spec| {
                Ok(RolledHitLocation {
                    name: spec.name.clone(),
                    range: location_range(spec.range_start, spec.range_end),
                    hp: hit_points_for(stats, spec.hp_modifier)?,
                    armor: evaluate_dice(&spec.armor, &(), rng)?,
                })
            })
            .collect()
    }

    fn roll_combat_styles<R: Rng + ?Sized>(
        &self,
        stats: &StatBlock,
        rng: &mut R,
    ) -> Result<Vec<RolledCombatStyle>> {
        self.template
            .combat_styles
            .iter()
            .map(|spec| {
                let value = evaluate_dice(&spec.die_set, stats, rng)?;
                let weapons = select_weapons(&spec.weapon_options, rng);
                Ok(RolledCombatStyle {
                    name: spec.name.clone(),
                    value,
                    weapons,
                })
            })
            .collect()
    }
}

/// Roll one enemy from a template
pub fn generate<R: Rng + ?Sized>(template: &TemplateConfig, rng: &mut R) -> Result<Enemy> {
    EnemyBuilder::new(template).build(None, rng)
}

/// Roll one enemy with an optional name suffix
pub fn generate_named<R: Rng + ?Sized>(
    template: &TemplateConfig,
    suffix: Option<&str>,
    rng: &mut R,
) -> Result<Enemy> {
    EnemyBuilder::new(template).build(suffix, rng)
}

/// Roll `count` enemies, numbered from 1
///
/// Enemy `i` uses its own RNG seeded with `seed + i`, so any single enemy of
/// a batch can be reproduced on its own.
pub fn generate_batch(template: &TemplateConfig, count: usize, seed: u64) -> Result<Vec<Enemy>> {
    let builder = EnemyBuilder::new(template);
    let mut enemies = Vec::with_capacity(count);
    for i in 0..count {
        let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
        let suffix = (i + 1).to_string();
        enemies.push(builder.build(Some(&suffix), &mut rng)?);
    }
    tracing::debug!(template = %template.name, count, seed, "Generated batch");
    Ok(enemies)
}
