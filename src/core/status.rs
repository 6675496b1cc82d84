//! Status effects: stacking and per-turn decay.
//!
//! The engine supports a closed set of status kinds. `Vulnerable` and
//! `Weak` are turn-countdown effects; `Strength` is permanent and its
//! `duration` field is read as a magnitude instead.
//!
//! Same-kind effects on the same actor always merge by summing; they
//! never coexist as duplicate entries.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The closed set of status effect kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    /// Incoming damage to the afflicted actor is multiplied by 1.5.
    Vulnerable,
    /// Outgoing damage dealt by the afflicted actor is multiplied by 0.75.
    Weak,
    /// Permanent additive bonus to damage dealt; never decays.
    Strength,
}

/// A single status entry on an actor.
///
/// For `Strength` the `duration` field is the magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    pub duration: i32,
}

/// Status effect list for one actor. Rarely holds more than 3 entries.
pub type StatusList = SmallVec<[StatusEffect; 3]>;

/// Add a status to the list, merging into an existing same-kind entry
/// by summing durations (or magnitude, for `Strength`).
pub fn add_or_stack(effects: &mut StatusList, kind: StatusKind, amount: i32) {
    if let Some(existing) = effects.iter_mut().find(|e| e.kind == kind) {
        existing.duration += amount;
    } else {
        effects.push(StatusEffect {
            kind,
            duration: amount,
        });
    }
}

/// End-of-turn decay tick for one actor's statuses.
///
/// Every non-`Strength` entry loses one turn of duration and is removed
/// at zero. Applied once per owning actor at the end of that actor's
/// own turn.
pub fn tick(effects: &mut StatusList) {
    for effect in effects.iter_mut() {
        if effect.kind != StatusKind::Strength {
            effect.duration -= 1;
        }
    }
    effects.retain(|e| e.kind == StatusKind::Strength || e.duration > 0);
}

/// Current amount of a status kind (0 if absent).
#[must_use]
pub fn amount_of(effects: &[StatusEffect], kind: StatusKind) -> i32 {
    effects
        .iter()
        .find(|e| e.kind == kind)
        .map_or(0, |e| e.duration)
}

/// Whether a countdown status is present with remaining duration.
#[must_use]
pub fn has_active(effects: &[StatusEffect], kind: StatusKind) -> bool {
    effects.iter().any(|e| e.kind == kind && e.duration > 0)
}
