//! Combat actors: the player, enemies, and enemy intents.
//!
//! Both actor types are plain serializable data owned by the combat
//! snapshot. Block is transient damage absorption that resets to zero
//! at the start of the owner's own turn; status queries used by the
//! damage formula live here as convenience methods.

use serde::{Deserialize, Serialize};

use super::status::{amount_of, has_active, StatusKind, StatusList};

/// The player side of a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub hp: i32,
    pub max_hp: i32,
    /// Transient damage absorption; reset at the start of the player's turn.
    pub block: i32,
    pub energy: i32,
    pub max_energy: i32,
    pub status_effects: StatusList,
}

impl Player {
    /// Create a player with full energy and no statuses.
    #[must_use]
    pub fn new(hp: i32, max_hp: i32, energy: i32) -> Self {
        Self {
            hp,
            max_hp,
            block: 0,
            energy,
            max_energy: energy,
            status_effects: StatusList::new(),
        }
    }

    /// Permanent strength magnitude (0 if none).
    #[must_use]
    pub fn strength(&self) -> i32 {
        amount_of(&self.status_effects, StatusKind::Strength)
    }

    /// Whether the player's outgoing damage is currently weakened.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        has_active(&self.status_effects, StatusKind::Weak)
    }

    /// Whether the player currently takes amplified damage.
    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        has_active(&self.status_effects, StatusKind::Vulnerable)
    }
}

/// Instance-unique identifier for an enemy within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

impl std::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Enemy({})", self.0)
    }
}

/// What an enemy intends to do on its next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Attack,
    Defend,
    Buff,
}

/// An enemy's declared next action.
///
/// `value` is the nominal magnitude; weak/vulnerable modifiers are
/// applied at resolution time, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub kind: IntentKind,
    pub value: i32,
}

impl Intent {
    /// Attack for `value` nominal damage.
    #[must_use]
    pub const fn attack(value: i32) -> Self {
        Self {
            kind: IntentKind::Attack,
            value,
        }
    }

    /// Gain `value` block.
    #[must_use]
    pub const fn defend(value: i32) -> Self {
        Self {
            kind: IntentKind::Defend,
            value,
        }
    }
}

/// One enemy in a battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
    pub name: String,
    pub hp: i32,
    pub max_hp: i32,
    /// Transient damage absorption; reset at the start of the enemy's turn.
    pub block: i32,
    pub intent: Intent,
    pub status_effects: StatusList,
    /// Completed actions by this enemy (0 at creation); drives its AI formula.
    pub turn_count: u32,
    /// Catalog key selecting which AI formula applies.
    pub definition_id: String,
}

impl Enemy {
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Whether the enemy's outgoing damage is currently weakened.
    #[must_use]
    pub fn is_weak(&self) -> bool {
        has_active(&self.status_effects, StatusKind::Weak)
    }

    /// Whether the enemy currently takes amplified damage.
    #[must_use]
    pub fn is_vulnerable(&self) -> bool {
        has_active(&self.status_effects, StatusKind::Vulnerable)
    }
}
