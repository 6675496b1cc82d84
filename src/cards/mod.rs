//! Card system: definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: string-keyed identifier for card definitions
//! - `CardDefinition`: static card data (cost, type, ordered effects)
//! - `CardEffect`: the closed sum type of effect kinds
//! - `CardInstance`: one physical copy of a card in a battle
//! - `CardRegistry`: card definition lookup

pub mod definition;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardEffect, CardId, CardType, EffectList, TargetMode};
pub use instance::{CardInstance, InstanceId};
pub use registry::CardRegistry;
