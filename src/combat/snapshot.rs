//! The combat snapshot: one complete, self-contained battle state.
//!
//! Every transition consumes a snapshot and produces a disjoint
//! replacement; nothing is mutated in place between calls. The snapshot
//! is plain serializable data, so a save layer can persist and restore
//! it verbatim without engine cooperation. `im::Vector` gives the
//! clone-per-transition style structural sharing instead of deep
//! copies.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Enemy, EnemyId, Player};
use crate::piles::Piles;

/// Whose actions the battle currently accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    PlayerTurn,
    EnemyTurn,
}

/// Battle outcome. `Victory` and `Defeat` are terminal: the snapshot
/// accepts no further actions once either is set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CombatResult {
    Ongoing,
    Victory,
    Defeat,
}

/// Complete state of one battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatSnapshot {
    pub player: Player,
    /// List order is the default-target order.
    pub enemies: Vector<Enemy>,
    pub piles: Piles,
    /// Battle turn, starting at 1.
    pub turn: u32,
    pub phase: TurnPhase,
    pub result: CombatResult,
}

impl CombatSnapshot {
    /// Whether the battle has reached a terminal result.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.result != CombatResult::Ongoing
    }

    /// Look up an enemy by instance id.
    #[must_use]
    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Total cards across all piles (constant for the whole battle).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.piles.total_cards()
    }

    /// Serialize to the compact binary save format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Deserialize from the compact binary save format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
