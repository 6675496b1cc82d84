//! Combat state machine: the battle snapshot and the engine that
//! transitions it.

pub mod engine;
pub mod snapshot;

pub use engine::{CombatEngine, DEFAULT_PLAYER_HP, HAND_SIZE, STARTING_ENERGY};
pub use snapshot::{CombatResult, CombatSnapshot, TurnPhase};
