//! Configuration module for template and weapon data structures
//!
//! This module handles deserialization of templates and weapons from Python
//! dicts or objects.

mod template;
mod weapon;

pub use template::*;
pub use weapon::*;

use crate::error::EnemyGenError;
use pyo3::types::{PyAnyMethods, PyDict, PyDictMethods, PyList, PyListMethods, PyString};
use pyo3::Bound;
use std::fmt;
use std::sync::Arc;

/// Helper to get attribute from either dict or object
fn get_attr<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> pyo3::PyResult<Bound<'py, pyo3::PyAny>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name)?
            .ok_or_else(|| pyo3::exceptions::PyKeyError::new_err(name.to_string()))
    } else {
        obj.getattr(name)
    }
}

/// Helper to get optional attribute from either dict or object
fn get_attr_opt<'py>(obj: &Bound<'py, pyo3::PyAny>, name: &str) -> Option<Bound<'py, pyo3::PyAny>> {
    let value = if let Ok(dict) = obj.downcast::<PyDict>() {
        dict.get_item(name).ok().flatten()
    } else {
        obj.getattr(name).ok()
    };
    value.filter(|v| !v.is_none())
}

/// Resolve an optional field: absent means `default`, present but
/// unextractable is an error naming the field
fn checked_field<T, E: fmt::Display>(
    name: &str,
    value: Option<Result<T, E>>,
    default: T,
) -> Result<T, EnemyGenError> {
    match value {
        Some(Ok(v)) => Ok(v),
        Some(Err(e)) => Err(EnemyGenError::DeserializationError(format!(
            "Invalid {}: {}",
            name, e
        ))),
        None => Ok(default),
    }
}

/// Extract each item of an optional list attribute
fn extract_list<'py, T>(
    obj: &Bound<'py, pyo3::PyAny>,
    name: &str,
    extract: impl Fn(&Bound<'py, pyo3::PyAny>) -> pyo3::PyResult<T>,
) -> pyo3::PyResult<Vec<T>> {
    match get_attr_opt(obj, name) {
        Some(list_obj) => {
            let list: Bound<'py, PyList> = list_obj.extract()?;
            list.iter().map(|item| extract(&item)).collect()
        }
        None => Ok(Vec::new()),
    }
}

/// Die-set attributes may be given as strings or plain integers
fn extract_die_set(obj: &Bound<'_, pyo3::PyAny>, name: &str, default: &str) -> pyo3::PyResult<String> {
    match get_attr_opt(obj, name) {
        Some(value) => {
            if let Ok(n) = value.extract::<i64>() {
                Ok(n.to_string())
            } else {
                value.extract()
            }
        }
        None => Ok(default.to_string()),
    }
}

/// Deserialize the weapon catalog from a Python list
/// Expected format: [{"name": ..., "type": "1h-melee", "damage": ..., ...}, ...]
pub fn deserialize_weapons(weapons: &Bound<'_, PyList>) -> pyo3::PyResult<Vec<Weapon>> {
    weapons.iter().map(|item| extract_weapon(&item)).collect()
}

fn extract_weapon(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<Weapon> {
    let name: String = get_attr(obj, "name")?.extract()?;
    // Support both "type" and "category" field names
    let category: String = get_attr(obj, "type")
        .or_else(|_| get_attr(obj, "category"))?
        .extract()?;
    let size: String = get_attr(obj, "size")?.extract()?;
    let reach: String = get_attr(obj, "reach")?.extract()?;

    Ok(Weapon {
        name,
        category: category.parse()?,
        damage: extract_die_set(obj, "damage", "0")?,
        size: size.parse()?,
        reach: reach.parse()?,
        ap: checked_field("ap", get_attr_opt(obj, "ap").map(|v| v.extract::<i32>()), 0)?,
        hp: checked_field("hp", get_attr_opt(obj, "hp").map(|v| v.extract::<i32>()), 0)?,
        damage_modifier: checked_field(
            "damage_modifier",
            get_attr_opt(obj, "damage_modifier").map(|v| v.extract::<bool>()),
            false,
        )?,
    })
}

/// Deserialize a template from a Python dict or object
///
/// Weapon options given by name are looked up in `catalog`; inline weapon
/// dicts are used as they are.
pub fn deserialize_template(
    obj: &Bound<'_, pyo3::PyAny>,
    catalog: Option<&WeaponCatalog>,
) -> pyo3::PyResult<TemplateConfig> {
    let name: String = get_attr(obj, "name")?.extract()?;
    let rank = checked_field("rank", get_attr_opt(obj, "rank").map(|v| v.extract::<u8>()), 2)?;
    let movement = checked_field(
        "movement",
        get_attr_opt(obj, "movement").map(|v| v.extract::<i32>()),
        6,
    )?;

    let stats = extract_list(obj, "stats", |item| {
        Ok(StatSpec {
            name: get_attr(item, "name")?.extract()?,
            die_set: extract_die_set(item, "die_set", "0")?,
        })
    })?;

    let skills = extract_list(obj, "skills", |item| {
        Ok(SkillSpec {
            name: get_attr(item, "name")?.extract()?,
            die_set: extract_die_set(item, "die_set", "0")?,
            include: checked_field(
                "include",
                get_attr_opt(item, "include").map(|v| v.extract::<bool>()),
                true,
            )?,
        })
    })?;

    let hit_locations = extract_list(obj, "hit_locations", |item| {
        Ok(HitLocationSpec {
            name: get_attr(item, "name")?.extract()?,
            range_start: get_attr(item, "range_start")?.extract()?,
            range_end: get_attr(item, "range_end")?.extract()?,
            hp_modifier: checked_field(
                "hp_modifier",
                get_attr_opt(item, "hp_modifier").map(|v| v.extract::<i32>()),
                0,
            )?,
            armor: extract_die_set(item, "armor", "0")?,
        })
    })?;

    let spells = extract_list(obj, "spells", extract_spell)?;

    let spell_amounts = match get_attr_opt(obj, "spell_amounts") {
        Some(amounts) => SpellAmounts {
            folk: extract_die_set(&amounts, "folk", "0")?,
            theism: extract_die_set(&amounts, "theism", "0")?,
            sorcery: extract_die_set(&amounts, "sorcery", "0")?,
        },
        None => SpellAmounts::default(),
    };

    let combat_styles = extract_list(obj, "combat_styles", |item| {
        let mut weapon_options = WeaponPools::new();
        for weapon in extract_list(item, "weapon_options", |w| resolve_weapon(w, catalog))? {
            weapon_options.push(weapon);
        }
        Ok(CombatStyleSpec {
            name: get_attr(item, "name")?.extract()?,
            die_set: extract_die_set(item, "die_set", "STR+DEX")?,
            weapon_options,
        })
    })?;

    Ok(TemplateConfig {
        name,
        rank,
        stats,
        skills,
        hit_locations,
        spells,
        spell_amounts,
        combat_styles,
        movement,
    })
}

fn extract_spell(obj: &Bound<'_, pyo3::PyAny>) -> pyo3::PyResult<SpellSpec> {
    let name: String = get_attr(obj, "name")?.extract()?;
    // Support both "type" and "magic_type" field names
    let magic_type: String = get_attr(obj, "type")
        .or_else(|_| get_attr(obj, "magic_type"))?
        .extract()?;
    let probability = checked_field(
        "probability",
        get_attr_opt(obj, "probability").map(|v| v.extract::<u32>()),
        0,
    )?;
    let detail = checked_field(
        "detail",
        get_attr_opt(obj, "detail").map(|v| v.extract::<String>().map(Some)),
        None,
    )?;

    Ok(SpellSpec {
        name,
        magic_type: magic_type.parse()?,
        probability,
        detail,
    })
}

/// A weapon option is either a catalog name or an inline weapon
fn resolve_weapon(
    obj: &Bound<'_, pyo3::PyAny>,
    catalog: Option<&WeaponCatalog>,
) -> pyo3::PyResult<Arc<Weapon>> {
    if let Ok(name) = obj.downcast::<PyString>() {
        let name: String = name.extract()?;
        let weapon = match catalog {
            Some(catalog) => catalog.resolve(&name)?,
            None => return Err(EnemyGenError::UnknownWeapon(name).into()),
        };
        return Ok(weapon);
    }
    Ok(Arc::new(extract_weapon(obj)?))
}
