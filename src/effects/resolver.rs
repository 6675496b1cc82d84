//! Effect resolution - applying one card effect to the combat snapshot.
//!
//! The state machine hands the resolver a working copy of the snapshot
//! and runs a played card's effects through it in declared order, so
//! each effect observes the cumulative result of the ones before it
//! (a strength gain raises the damage of a later effect on the same
//! card; a draw sees the pile state left by an earlier draw).

use tracing::trace;

use crate::cards::{CardEffect, TargetMode};
use crate::combat::CombatSnapshot;
use crate::core::{add_or_stack, Enemy, EnemyId, GameRng, StatusKind};

use super::damage::{absorb_damage, calculate_damage};

/// Apply a single card effect to the working snapshot.
///
/// Unresolvable targets degrade to a no-op; no effect ever fails.
pub(crate) fn resolve_effect(
    effect: &CardEffect,
    state: &mut CombatSnapshot,
    target: Option<EnemyId>,
    rng: &mut GameRng,
) {
    trace!(?effect, "resolving effect");

    match *effect {
        CardEffect::Damage { value, target: mode } => {
            let strength = state.player.strength();
            let weak = state.player.is_weak();
            for index in resolve_targets(state, mode, target) {
                if let Some(enemy) = state.enemies.get_mut(index) {
                    damage_enemy(enemy, value, strength, weak);
                }
            }
        }

        CardEffect::Block { value } => {
            state.player.block += value;
        }

        CardEffect::Draw { count } => {
            state.piles.draw(count, rng);
        }

        CardEffect::ApplyStatus {
            kind,
            turns,
            target: mode,
        } => {
            for index in resolve_targets(state, mode, target) {
                if let Some(enemy) = state.enemies.get_mut(index) {
                    add_or_stack(&mut enemy.status_effects, kind, turns);
                }
            }
        }

        CardEffect::GainStrength { value } => {
            add_or_stack(&mut state.player.status_effects, StatusKind::Strength, value);
        }

        CardEffect::GainEnergy { value } => {
            state.player.energy += value;
        }

        CardEffect::SelfDamage { value } => {
            // Bypasses block entirely
            state.player.hp = (state.player.hp - value).max(0);
        }

        CardEffect::Heal { value } => {
            state.player.hp = (state.player.hp + value).min(state.player.max_hp);
        }
    }
}

/// Resolve an effect's target mode to enemy indices.
///
/// `All` hits every living enemy. `Single` hits the supplied enemy by
/// id even if a prior effect of the same card already downed it
/// (overkill is wasted, not redistributed); with no supplied target it
/// hits the first enemy in the sequence. A supplied id that matches no
/// enemy yields no targets.
fn resolve_targets(
    state: &CombatSnapshot,
    mode: TargetMode,
    target: Option<EnemyId>,
) -> Vec<usize> {
    match mode {
        TargetMode::All => state
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_alive())
            .map(|(i, _)| i)
            .collect(),
        TargetMode::Single => match target {
            Some(id) => state
                .enemies
                .iter()
                .position(|e| e.id == id)
                .into_iter()
                .collect(),
            None if state.enemies.is_empty() => Vec::new(),
            None => vec![0],
        },
    }
}

fn damage_enemy(enemy: &mut Enemy, base: i32, strength: i32, attacker_weak: bool) {
    let amount = calculate_damage(base, strength, attacker_weak, enemy.is_vulnerable());
    absorb_damage(&mut enemy.block, &mut enemy.hp, amount);
}
