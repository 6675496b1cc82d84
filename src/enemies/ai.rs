//! Enemy intent policy.
//!
//! `decide_intent` maps (archetype, turn counter) to the enemy's next
//! action. Each archetype is a small fixed formula over the enemy's own
//! completed-action count; the only randomness is the bounded attack
//! roll of the louse, drawn from the injected `GameRng`.
//!
//! Unknown archetype identifiers fall back to a fixed default attack
//! rather than failing.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Intent};

/// Nominal attack value used for unrecognized archetypes.
pub const FALLBACK_ATTACK: i32 = 6;

/// The closed set of enemy behavior archetypes.
///
/// Parsed from the enemy definition identifier; the intent table is an
/// exhaustive match over this enum, so adding an archetype is a
/// compile-time-checked decision point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    JawWorm,
    Cultist,
    LouseRed,
    FungiBeast,
    GremlinNob,
    Lagavulin,
    SlimeBoss,
    Unknown,
}

impl Archetype {
    /// Parse an archetype from an enemy definition identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "jaw_worm" => Self::JawWorm,
            "cultist" => Self::Cultist,
            "louse_red" => Self::LouseRed,
            "fungi_beast" => Self::FungiBeast,
            "gremlin_nob" => Self::GremlinNob,
            "lagavulin" => Self::Lagavulin,
            "slime_boss" => Self::SlimeBoss,
            _ => Self::Unknown,
        }
    }
}

/// Decide an enemy's next intent from its archetype and turn counter.
///
/// `turn_count` is the number of actions the enemy has completed
/// (0 at creation); callers recompute the intent immediately after
/// incrementing it.
pub fn decide_intent(definition_id: &str, turn_count: u32, rng: &mut GameRng) -> Intent {
    match Archetype::from_id(definition_id) {
        Archetype::JawWorm => jaw_worm(turn_count),
        Archetype::Cultist => cultist(turn_count),
        Archetype::LouseRed => louse_red(rng),
        Archetype::FungiBeast => fungi_beast(turn_count),
        Archetype::GremlinNob => gremlin_nob(turn_count),
        Archetype::Lagavulin => lagavulin(turn_count),
        Archetype::SlimeBoss => slime_boss(turn_count),
        Archetype::Unknown => Intent::attack(FALLBACK_ATTACK),
    }
}

/// Jaw Worm: attack 9 / defend 5, alternating.
fn jaw_worm(turn_count: u32) -> Intent {
    if turn_count % 2 == 0 {
        Intent::attack(9)
    } else {
        Intent::defend(5)
    }
}

/// Cultist: attack scaling linearly each turn (5, 6, 7, ...).
fn cultist(turn_count: u32) -> Intent {
    Intent::attack(5 + turn_count as i32)
}

/// Red Louse: always attacks for a uniform roll in 4..=7.
fn louse_red(rng: &mut GameRng) -> Intent {
    Intent::attack(rng.gen_range(4..8))
}

/// Fungi Beast: attack 5, attack 5, defend 3, repeating.
fn fungi_beast(turn_count: u32) -> Intent {
    if turn_count % 3 == 2 {
        Intent::defend(3)
    } else {
        Intent::attack(5)
    }
}

/// Gremlin Nob (elite): attack 14 / attack 18, alternating.
fn gremlin_nob(turn_count: u32) -> Intent {
    if turn_count % 2 == 0 {
        Intent::attack(14)
    } else {
        Intent::attack(18)
    }
}

/// Lagavulin (elite): sleeps behind defend 15 for three turns, then
/// attacks 18 every turn.
fn lagavulin(turn_count: u32) -> Intent {
    if turn_count < 3 {
        Intent::defend(15)
    } else {
        Intent::attack(18)
    }
}

/// Slime Boss: attack 35 / defend 10, alternating.
fn slime_boss(turn_count: u32) -> Intent {
    if turn_count % 2 == 0 {
        Intent::attack(35)
    } else {
        Intent::defend(10)
    }
}
