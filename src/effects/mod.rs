//! Effect application: the shared damage formula and the per-effect
//! resolver driven by the combat state machine.

pub mod damage;
pub(crate) mod resolver;

pub use damage::{absorb_damage, calculate_damage};
