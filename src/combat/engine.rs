//! The combat state machine.
//!
//! `CombatEngine` owns the catalog handles and the injected RNG, and
//! drives battles through the three transitions: `init_combat`,
//! `play_card`, `end_player_turn`. Each transition takes a snapshot by
//! reference and returns a complete replacement; every precondition
//! failure returns the input unchanged instead of erroring.

use im::Vector;
use tracing::{debug, warn};

use crate::cards::{CardId, CardRegistry, CardType, InstanceId};
use crate::core::{status, Enemy, EnemyId, GameRng, GameRngState, IntentKind, Player, StatusList};
use crate::effects::damage::{absorb_damage, calculate_damage};
use crate::effects::resolver::resolve_effect;
use crate::enemies::{decide_intent, EnemyRegistry};
use crate::piles::Piles;

use super::snapshot::{CombatResult, CombatSnapshot, TurnPhase};

/// Cards drawn at the start of each player turn.
pub const HAND_SIZE: usize = 5;
/// Player energy refilled each turn.
pub const STARTING_ENERGY: i32 = 3;
/// Default player hp when the caller does not supply one.
pub const DEFAULT_PLAYER_HP: i32 = 80;

/// Drives battles against the card and enemy catalogs.
///
/// The engine holds no battle state of its own beyond the RNG; all
/// battle state lives in the snapshots it hands back.
#[derive(Clone, Debug)]
pub struct CombatEngine {
    cards: CardRegistry,
    enemies: EnemyRegistry,
    rng: GameRng,
}

impl CombatEngine {
    /// Create an engine over the given catalogs with a seeded RNG.
    #[must_use]
    pub fn new(cards: CardRegistry, enemies: EnemyRegistry, seed: u64) -> Self {
        Self {
            cards,
            enemies,
            rng: GameRng::new(seed),
        }
    }

    /// The card catalog this engine reads from.
    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    /// The enemy catalog this engine reads from.
    #[must_use]
    pub fn enemy_definitions(&self) -> &EnemyRegistry {
        &self.enemies
    }

    /// Capture the RNG state for checkpointing alongside a snapshot.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a previously captured RNG state.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Start a battle with the default player hp.
    pub fn init_combat(&mut self, deck_ids: &[&str], enemy_ids: &[&str]) -> CombatSnapshot {
        self.init_combat_with_hp(deck_ids, enemy_ids, DEFAULT_PLAYER_HP, DEFAULT_PLAYER_HP)
    }

    /// Start a battle.
    ///
    /// Deck or enemy identifiers with no catalog entry are skipped.
    /// Each enemy's first intent is decided at a turn counter of 0, and
    /// the opening hand of [`HAND_SIZE`] cards is drawn immediately.
    pub fn init_combat_with_hp(
        &mut self,
        deck_ids: &[&str],
        enemy_ids: &[&str],
        player_hp: i32,
        player_max_hp: i32,
    ) -> CombatSnapshot {
        let known_ids: Vec<CardId> = deck_ids
            .iter()
            .filter(|id| {
                let known = self.cards.contains(id);
                if !known {
                    warn!(card = %id, "skipping unknown card in deck list");
                }
                known
            })
            .map(|&id| CardId::new(id))
            .collect();

        let mut piles = Piles::build(known_ids, &mut self.rng);
        piles.draw(HAND_SIZE, &mut self.rng);

        let mut enemies: Vector<Enemy> = Vector::new();
        for (index, id) in enemy_ids.iter().enumerate() {
            let Some(def) = self.enemies.get(id) else {
                warn!(enemy = %id, "skipping unknown enemy in encounter list");
                continue;
            };
            let mut enemy = Enemy {
                id: EnemyId(index as u32),
                name: def.name.clone(),
                hp: def.hp,
                max_hp: def.max_hp,
                block: 0,
                intent: crate::core::Intent::attack(0),
                status_effects: StatusList::new(),
                turn_count: 0,
                definition_id: def.id.clone(),
            };
            enemy.intent = decide_intent(&enemy.definition_id, enemy.turn_count, &mut self.rng);
            enemies.push_back(enemy);
        }

        debug!(
            deck = piles.total_cards(),
            enemies = enemies.len(),
            "combat initialized"
        );

        CombatSnapshot {
            player: Player::new(player_hp, player_max_hp, STARTING_ENERGY),
            enemies,
            piles,
            turn: 1,
            phase: TurnPhase::PlayerTurn,
            result: CombatResult::Ongoing,
        }
    }

    /// Play a card from the hand.
    ///
    /// No-op (the input snapshot is returned unchanged) unless it is
    /// the player's turn, the battle is ongoing, the card is in hand,
    /// its definition resolves, and the player can pay its cost.
    pub fn play_card(
        &mut self,
        state: &CombatSnapshot,
        card: InstanceId,
        target: Option<EnemyId>,
    ) -> CombatSnapshot {
        if state.phase != TurnPhase::PlayerTurn || state.is_terminal() {
            return state.clone();
        }

        let Some(instance) = state.piles.hand.iter().find(|c| c.instance_id == card) else {
            return state.clone();
        };
        let Some(definition) = self.cards.get(instance.definition_id.as_str()) else {
            return state.clone();
        };
        if state.player.energy < definition.cost {
            return state.clone();
        }
        let definition = definition.clone();

        let mut next = state.clone();
        next.player.energy -= definition.cost;

        // Checked above; take_from_hand cannot miss here
        let Some(played) = next.piles.take_from_hand(card) else {
            return state.clone();
        };

        debug!(card = %definition.id, cost = definition.cost, "card played");

        // Exhausting cards and powers leave circulation for the battle
        if definition.exhaust || definition.card_type == CardType::Power {
            next.piles.exhaust.push_back(played);
        } else {
            next.piles.discard.push_back(played);
        }

        for effect in &definition.effects {
            resolve_effect(effect, &mut next, target, &mut self.rng);
        }

        next.enemies.retain(Enemy::is_alive);
        if next.enemies.is_empty() {
            debug!("all enemies defeated");
            next.result = CombatResult::Victory;
        }

        next
    }

    /// End the player's turn, resolve every enemy's intent, and set up
    /// the next turn.
    ///
    /// No-op unless it is the player's turn and the battle is ongoing.
    /// If the enemy actions reduce the player to 0 hp the battle ends
    /// immediately in defeat, skipping status ticks and the redraw.
    pub fn end_player_turn(&mut self, state: &CombatSnapshot) -> CombatSnapshot {
        if state.phase != TurnPhase::PlayerTurn || state.is_terminal() {
            return state.clone();
        }

        let mut next = state.clone();
        next.piles.discard_hand();

        for enemy in next.enemies.iter() {
            match enemy.intent.kind {
                IntentKind::Attack => {
                    let amount = calculate_damage(
                        enemy.intent.value,
                        0,
                        enemy.is_weak(),
                        next.player.is_vulnerable(),
                    );
                    absorb_damage(&mut next.player.block, &mut next.player.hp, amount);
                    debug!(enemy = %enemy.name, amount, "enemy attacks");
                }
                // No player-facing effect in this model
                IntentKind::Defend | IntentKind::Buff => {}
            }
        }

        if next.player.hp <= 0 {
            debug!("player defeated");
            next.player.hp = 0;
            next.phase = TurnPhase::EnemyTurn;
            next.result = CombatResult::Defeat;
            return next;
        }

        for index in 0..next.enemies.len() {
            if let Some(enemy) = next.enemies.get_mut(index) {
                enemy.block = 0;
                status::tick(&mut enemy.status_effects);
                enemy.turn_count += 1;
                enemy.intent = decide_intent(&enemy.definition_id, enemy.turn_count, &mut self.rng);
            }
        }

        next.player.block = 0;
        next.player.energy = next.player.max_energy;
        status::tick(&mut next.player.status_effects);

        next.piles.draw(HAND_SIZE, &mut self.rng);
        next.turn += 1;
        next.phase = TurnPhase::PlayerTurn;

        debug!(turn = next.turn, "player turn begins");
        next
    }
}
