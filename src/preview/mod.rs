//! Read-only damage preview.
//!
//! Projects the same damage formula the resolver uses onto a card's
//! description so the UI can show "6(9)" style forecasts. Pure: never
//! mutates anything and must not be used as a source of truth; the
//! resolver recomputes from scratch when the card is actually played.

use im::Vector;

use crate::cards::{CardDefinition, CardEffect};
use crate::core::{amount_of, has_active, Enemy, EnemyId, StatusEffect, StatusKind};
use crate::effects::calculate_damage;

/// Projected damage for each damage effect of a card, in declared
/// order, against the resolved target.
///
/// Returns an empty vec when the card has no damage effects or there
/// is no enemy to resolve against.
#[must_use]
pub fn preview_damage(
    definition: &CardDefinition,
    player_statuses: &[StatusEffect],
    enemies: &Vector<Enemy>,
    target: Option<EnemyId>,
) -> Vec<i32> {
    let Some(enemy) = resolve_target(enemies, target) else {
        return Vec::new();
    };

    let strength = amount_of(player_statuses, StatusKind::Strength);
    let weak = has_active(player_statuses, StatusKind::Weak);
    let vulnerable = has_active(&enemy.status_effects, StatusKind::Vulnerable);

    definition
        .effects
        .iter()
        .filter_map(|effect| match *effect {
            CardEffect::Damage { value, .. } => {
                Some(calculate_damage(value, strength, weak, vulnerable))
            }
            _ => None,
        })
        .collect()
}

/// Card description with each damage number annotated as
/// `base(modified)` where the formula changes it.
///
/// A number is rewritten when the next word starts with "damage"; the
/// card's damage effects are consumed in declared order, one per
/// rewritten number.
#[must_use]
pub fn preview_description(
    definition: &CardDefinition,
    player_statuses: &[StatusEffect],
    enemies: &Vector<Enemy>,
    target: Option<EnemyId>,
) -> String {
    let projected = preview_damage(definition, player_statuses, enemies, target);
    if projected.is_empty() {
        return definition.description.clone();
    }

    let bases: Vec<i32> = definition
        .effects
        .iter()
        .filter_map(|effect| match *effect {
            CardEffect::Damage { value, .. } => Some(value),
            _ => None,
        })
        .collect();

    let words: Vec<&str> = definition.description.split(' ').collect();
    let mut out: Vec<String> = Vec::with_capacity(words.len());
    let mut next_effect = 0;

    for (i, word) in words.iter().enumerate() {
        let is_damage_number = word.parse::<i32>().is_ok()
            && words.get(i + 1).is_some_and(|w| w.starts_with("damage"));

        if is_damage_number && next_effect < bases.len() {
            let base = bases[next_effect];
            let modified = projected[next_effect];
            next_effect += 1;
            if modified != base {
                out.push(format!("{base}({modified})"));
                continue;
            }
        }
        out.push((*word).to_string());
    }

    out.join(" ")
}

fn resolve_target(enemies: &Vector<Enemy>, target: Option<EnemyId>) -> Option<&Enemy> {
    if enemies.is_empty() {
        return None;
    }
    target
        .and_then(|id| enemies.iter().find(|e| e.id == id))
        .or_else(|| enemies.front())
}
