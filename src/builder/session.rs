//! GeneratedEnemy - Python handle to a rolled enemy
//!
//! The enemy stays in Rust memory; Python reads it piecewise through getters
//! or all at once through `to_json`.

use pyo3::prelude::*;
use pyo3::types::{PyAny, PyDict, PyList};

use crate::config::{MagicType, Weapon};

use super::Enemy;

// ============================================================================
// GeneratedEnemy PyClass
// ============================================================================

/// GeneratedEnemy - Rolled enemy held in Rust heap
#[pyclass]
pub struct GeneratedEnemy {
    enemy: Enemy,
}

impl GeneratedEnemy {
    pub fn new(enemy: Enemy) -> Self {
        Self { enemy }
    }
}

impl From<Enemy> for GeneratedEnemy {
    fn from(enemy: Enemy) -> Self {
        Self::new(enemy)
    }
}

fn weapon_to_dict<'py>(py: Python<'py>, weapon: &Weapon) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new(py);
    dict.set_item("name", &weapon.name)?;
    dict.set_item("type", weapon.category.as_str())?;
    dict.set_item("damage", &weapon.damage)?;
    dict.set_item("size", weapon.size.to_string())?;
    dict.set_item("reach", weapon.reach.as_str())?;
    dict.set_item("ap", weapon.ap)?;
    dict.set_item("hp", weapon.hp)?;
    dict.set_item("damage_modifier", weapon.damage_modifier)?;
    Ok(dict)
}

// ============================================================================
// PyMethods Implementation
// ============================================================================

#[pymethods]
impl GeneratedEnemy {
    // ------------------------------------------------------------------------
    // Getter Properties
    // ------------------------------------------------------------------------

    /// Enemy name, including the batch suffix if any
    #[getter]
    fn name(&self) -> &str {
        &self.enemy.name
    }

    /// Source template name
    #[getter]
    fn template(&self) -> &str {
        &self.enemy.template
    }

    /// Template rank, 1 Rubble .. 5 Master
    #[getter]
    fn rank(&self) -> u8 {
        self.enemy.rank
    }

    #[getter]
    fn rank_title(&self) -> Option<&str> {
        self.enemy.rank_title
    }

    #[getter]
    fn action_points(&self) -> i32 {
        self.enemy.attributes.action_points
    }

    #[getter]
    fn damage_modifier(&self) -> &str {
        &self.enemy.attributes.damage_modifier
    }

    #[getter]
    fn magic_points(&self) -> i32 {
        self.enemy.attributes.magic_points
    }

    #[getter]
    fn strike_rank(&self) -> &str {
        &self.enemy.attributes.strike_rank
    }

    #[getter]
    fn movement(&self) -> i32 {
        self.enemy.attributes.movement
    }

    // ------------------------------------------------------------------------
    // Data Access Methods
    // ------------------------------------------------------------------------

    /// Stats as an ordered dict {name: value}
    fn get_stats(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        for stat in self.enemy.stats.iter() {
            dict.set_item(&stat.name, stat.value)?;
        }
        Ok(dict.into())
    }

    /// Included skills as a list of {name, value} dicts
    fn get_skills(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for skill in &self.enemy.skills {
            let dict = PyDict::new(py);
            dict.set_item("name", &skill.name)?;
            dict.set_item("value", skill.value)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Spells as {"folk": [...], "theism": [...], "sorcery": [...]}
    fn get_spells(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let dict = PyDict::new(py);
        for magic_type in MagicType::ALL {
            dict.set_item(magic_type.as_str(), PyList::new(py, self.enemy.spells.get(magic_type))?)?;
        }
        Ok(dict.into())
    }

    /// Hit locations as a list of {name, range, hp, armor} dicts
    fn get_hit_locations(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for location in &self.enemy.hit_locations {
            let dict = PyDict::new(py);
            dict.set_item("name", &location.name)?;
            dict.set_item("range", &location.range)?;
            dict.set_item("hp", location.hp)?;
            dict.set_item("armor", location.armor)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Combat styles with their weapon dicts
    fn get_combat_styles(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let list = PyList::empty(py);
        for style in &self.enemy.combat_styles {
            let dict = PyDict::new(py);
            dict.set_item("name", &style.name)?;
            dict.set_item("value", style.value)?;
            let weapons = PyList::empty(py);
            for weapon in &style.weapons {
                weapons.append(weapon_to_dict(py, weapon)?)?;
            }
            dict.set_item("weapons", weapons)?;
            list.append(dict)?;
        }
        Ok(list.into())
    }

    /// Derived attributes as a dict
    fn get_attributes(&self, py: Python<'_>) -> PyResult<Py<PyAny>> {
        let attributes = &self.enemy.attributes;
        let dict = PyDict::new(py);
        dict.set_item("action_points", attributes.action_points)?;
        dict.set_item("damage_modifier", &attributes.damage_modifier)?;
        dict.set_item("magic_points", attributes.magic_points)?;
        dict.set_item("strike_rank", &attributes.strike_rank)?;
        dict.set_item("movement", attributes.movement)?;
        Ok(dict.into())
    }

    /// Serialize the whole enemy to a JSON string
    fn to_json(&self) -> PyResult<String> {
        serde_json::to_string(&self.enemy).map_err(|e| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
                "Failed to serialize enemy: {}",
                e
            ))
        })
    }

    fn __repr__(&self) -> String {
        format!(
            "GeneratedEnemy(name={:?}, template={:?})",
            self.enemy.name, self.enemy.template
        )
    }
}
