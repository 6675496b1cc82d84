//! Core engine types: actors, status effects, and RNG.
//!
//! These are the leaf building blocks the combat state machine is
//! assembled from. Everything here is plain data plus small pure
//! functions.

pub mod actors;
pub mod rng;
pub mod status;

pub use actors::{Enemy, EnemyId, Intent, IntentKind, Player};
pub use rng::{GameRng, GameRngState};
pub use status::{add_or_stack, amount_of, has_active, tick, StatusEffect, StatusKind, StatusList};
