//! Enemy content and behavior: definitions, registry, and intent policy.

pub mod ai;
pub mod definition;

pub use ai::{decide_intent, Archetype, FALLBACK_ATTACK};
pub use definition::{EnemyDefinition, EnemyRegistry};
