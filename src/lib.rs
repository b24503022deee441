//! Enemygen Core - Enemy generation engine for percentile tabletop RPGs
//!
//! This crate rolls non-player characters from reusable templates: dice
//! notation, derived attribute tables, spell and weapon selection. Python
//! bindings are provided via PyO3.

use pyo3::prelude::*;

pub mod attributes;
pub mod builder;
pub mod config;
pub mod dice;
pub mod error;
pub mod selection;
pub mod stats;

use crate::builder::GeneratedEnemy;
use crate::config::{TemplateConfig, WeaponCatalog};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use pyo3::types::PyList;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Cached Weapon Catalog
// ============================================================================

/// Global weapon catalog, shared by every template that names its weapons
static CACHED_WEAPONS: OnceCell<Arc<RwLock<WeaponCatalog>>> = OnceCell::new();

// ============================================================================
// Helper Functions
// ============================================================================

/// Seeded RNG when a seed is given, entropy otherwise
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Extract a template, resolving weapon names against the cached catalog
fn load_template(template: &Bound<'_, PyAny>) -> PyResult<TemplateConfig> {
    match CACHED_WEAPONS.get() {
        Some(catalog) => {
            let catalog = catalog.read();
            config::deserialize_template(template, Some(&*catalog))
        }
        None => config::deserialize_template(template, None),
    }
}

// ============================================================================
// Python Functions
// ============================================================================

/// Initialize the weapon catalog (call once at startup)
///
/// Templates may then list weapon options by name instead of repeating the
/// weapon definitions. Calling it again replaces the catalog.
///
/// # Arguments
/// * `weapons` - List of weapon dicts {name, type, damage, size, reach, ap, hp, damage_modifier}
#[pyfunction]
fn init_weapons(weapons: &Bound<'_, PyList>) -> PyResult<()> {
    let catalog = WeaponCatalog::new(config::deserialize_weapons(weapons)?);
    tracing::debug!(weapons = catalog.len(), "Initialized weapon catalog");

    // If already initialized, update the catalog
    if let Some(existing) = CACHED_WEAPONS.get() {
        let mut guard = existing.write();
        *guard = catalog;
    } else {
        let _ = CACHED_WEAPONS.set(Arc::new(RwLock::new(catalog)));
    }

    Ok(())
}

/// Check if the weapon catalog is initialized
#[pyfunction]
fn is_weapons_initialized() -> bool {
    CACHED_WEAPONS.get().is_some()
}

/// Roll a die-set such as "2D6+1D4" or "STR+DEX"
///
/// # Arguments
/// * `expression` - Dice notation
/// * `context` - Optional values for named variables, e.g. {"STR": 12}
/// * `seed` - Optional RNG seed for reproducible rolls
///
/// # Raises
/// ValueError on malformed notation or unknown variables
#[pyfunction]
#[pyo3(signature = (expression, context=None, seed=None))]
fn evaluate_dice(
    expression: &str,
    context: Option<HashMap<String, i32>>,
    seed: Option<u64>,
) -> PyResult<i32> {
    let mut rng = make_rng(seed);
    let context = context.unwrap_or_default();
    Ok(dice::evaluate_dice(expression, &context, &mut rng)?)
}

/// Check a die-set without rolling it
///
/// # Arguments
/// * `expression` - Dice notation
/// * `names` - Variable names the die-set may refer to (default: none)
///
/// # Raises
/// ValueError when the die-set is malformed or uses an unknown name
#[pyfunction]
#[pyo3(signature = (expression, names=None))]
fn validate_dice(expression: &str, names: Option<Vec<String>>) -> PyResult<()> {
    let names = names.unwrap_or_default();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    dice::validate(expression, &names)?;
    Ok(())
}

/// Check every die-set of a template without generating anything
///
/// # Raises
/// ValueError when a die-set is malformed or refers to a stat the template lacks
#[pyfunction]
fn validate_template(template: &Bound<'_, PyAny>) -> PyResult<()> {
    let template = load_template(template)?;
    template.validate()?;
    Ok(())
}

/// Generate one enemy from a template
///
/// # Arguments
/// * `template` - Template dict or object
/// * `seed` - Optional RNG seed for a reproducible enemy
/// * `suffix` - Optional name suffix, e.g. "3" for "Bandit 3"
///
/// # Returns
/// A GeneratedEnemy object
#[pyfunction]
#[pyo3(signature = (template, seed=None, suffix=None))]
fn generate(
    template: &Bound<'_, PyAny>,
    seed: Option<u64>,
    suffix: Option<&str>,
) -> PyResult<GeneratedEnemy> {
    let template = load_template(template)?;
    let mut rng = make_rng(seed);
    let enemy = builder::generate_named(&template, suffix, &mut rng)?;
    Ok(GeneratedEnemy::new(enemy))
}

/// Generate `count` enemies named "<template> 1" .. "<template> count"
///
/// # Arguments
/// * `template` - Template dict or object
/// * `count` - Number of enemies
/// * `seed` - Optional base seed; enemy i is rolled with seed + i
#[pyfunction]
#[pyo3(signature = (template, count, seed=None))]
fn generate_many(
    template: &Bound<'_, PyAny>,
    count: usize,
    seed: Option<u64>,
) -> PyResult<Vec<GeneratedEnemy>> {
    let template = load_template(template)?;
    let seed = seed.unwrap_or_else(rand::random);
    let enemies = builder::generate_batch(&template, count, seed)?;
    Ok(enemies.into_iter().map(GeneratedEnemy::from).collect())
}

/// Generate enemies asynchronously
///
/// The batch is rolled in a background thread using Tokio's spawn_blocking,
/// allowing Python's asyncio event loop to remain responsive.
///
/// # Returns
/// A Python awaitable that resolves to a list of GeneratedEnemy objects
///
/// # Example (Python)
/// ```python
/// enemies = await generate_async(template, 20, seed=7)
/// print(enemies[0].name)
/// ```
#[pyfunction]
#[pyo3(signature = (template, count, seed=None))]
fn generate_async<'py>(
    py: Python<'py>,
    template: &Bound<'py, PyAny>,
    count: usize,
    seed: Option<u64>,
) -> PyResult<Bound<'py, PyAny>> {
    // Extract the template while holding the GIL
    let template = load_template(template)?;
    let seed = seed.unwrap_or_else(rand::random);

    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let enemies = tokio::task::spawn_blocking(move || {
            let enemies = builder::generate_batch(&template, count, seed)?;
            Ok::<Vec<GeneratedEnemy>, PyErr>(
                enemies.into_iter().map(GeneratedEnemy::from).collect(),
            )
        })
        .await
        .map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                "Generation task panicked: {}",
                e
            ))
        })??;

        Ok(enemies)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn enemygen_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(init_weapons, m)?)?;
    m.add_function(wrap_pyfunction!(is_weapons_initialized, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_dice, m)?)?;
    m.add_function(wrap_pyfunction!(validate_dice, m)?)?;
    m.add_function(wrap_pyfunction!(validate_template, m)?)?;
    m.add_function(wrap_pyfunction!(generate, m)?)?;
    m.add_function(wrap_pyfunction!(generate_many, m)?)?;
    m.add_function(wrap_pyfunction!(generate_async, m)?)?;
    m.add_class::<GeneratedEnemy>()?;
    Ok(())
}
