//! # deckbound
//!
//! A deterministic turn-based combat engine for card-driven roguelikes.
//!
//! ## Design Principles
//!
//! 1. **Snapshot-In, Snapshot-Out**: Every transition takes a combat
//!    snapshot and returns a replacement. The input is never mutated,
//!    so callers keep full history for undo, replay, and save files.
//!
//! 2. **Content Is Data**: The engine reads cards and enemies out of
//!    registries the caller supplies. Nothing in the resolution code
//!    knows a specific card; `catalog` ships a starter set but is
//!    optional.
//!
//! 3. **Deterministic Replay**: All randomness flows through a seeded
//!    [`GameRng`] whose state serializes alongside the snapshot. The
//!    same seed and the same action sequence reproduce the same fight.
//!
//! 4. **Degrade, Don't Panic**: Invalid actions (wrong phase, not
//!    enough energy, card not in hand) return the input snapshot
//!    unchanged rather than erroring.
//!
//! ## Modules
//!
//! - `core`: RNG, status effects, player and enemy actors
//! - `cards`: Card definitions, instances, and the card registry
//! - `enemies`: Enemy definitions, registry, and intent AI
//! - `piles`: The four card piles and draw/discard/reshuffle flow
//! - `effects`: Damage math and the card effect resolver
//! - `combat`: The engine itself and the combat snapshot
//! - `preview`: Damage preview for UI without mutating state
//! - `catalog`: Built-in starter cards and enemies

pub mod cards;
pub mod catalog;
pub mod combat;
pub mod core;
pub mod effects;
pub mod enemies;
pub mod piles;
pub mod preview;

// Re-export commonly used types
pub use crate::core::{
    Enemy, EnemyId, GameRng, GameRngState, Intent, IntentKind, Player, StatusEffect, StatusKind,
};

pub use crate::cards::{
    CardDefinition, CardEffect, CardId, CardInstance, CardRegistry, CardType, InstanceId,
    TargetMode,
};

pub use crate::enemies::{decide_intent, EnemyDefinition, EnemyRegistry};

pub use crate::piles::Piles;

pub use crate::effects::{absorb_damage, calculate_damage};

pub use crate::combat::{
    CombatEngine, CombatResult, CombatSnapshot, TurnPhase, DEFAULT_PLAYER_HP, HAND_SIZE,
    STARTING_ENERGY,
};

pub use crate::preview::{preview_damage, preview_description};
