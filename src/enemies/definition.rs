//! Enemy definitions and lookup.
//!
//! Like cards, enemy content is a static catalog the engine only reads
//! by string identifier. The definition carries display and hp data;
//! behavior is keyed off the same identifier in the intent policy.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Static enemy definition from the content catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    /// Catalog identifier; also selects the AI formula.
    pub id: String,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
}

impl EnemyDefinition {
    /// Create a definition with full starting hp.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, hp: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp,
            max_hp: hp,
        }
    }
}

/// Registry of enemy definitions, keyed by string identifier.
#[derive(Clone, Debug, Default)]
pub struct EnemyRegistry {
    enemies: FxHashMap<String, EnemyDefinition>,
}

impl EnemyRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enemy definition.
    ///
    /// Panics if an enemy with the same ID already exists.
    pub fn register(&mut self, enemy: EnemyDefinition) {
        if self.enemies.contains_key(&enemy.id) {
            panic!("Enemy with ID {:?} already registered", enemy.id);
        }
        self.enemies.insert(enemy.id.clone(), enemy);
    }

    /// Get an enemy definition by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(id)
    }

    /// Check if an enemy ID is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.enemies.contains_key(id)
    }

    /// Get the number of registered enemies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Iterate over all enemy definitions.
    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> {
        self.enemies.values()
    }
}
