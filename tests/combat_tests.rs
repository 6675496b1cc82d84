//! End-to-end combat flow tests.
//!
//! These drive full battles through the public engine API: playing
//! cards, ending turns, and checking the snapshot the engine hands
//! back. Decks of exactly [`HAND_SIZE`] cards are used where a test
//! needs specific cards in the opening hand, since the whole deck is
//! drawn regardless of shuffle order.

use deckbound::catalog::{starter_cards, starter_enemies};
use deckbound::core::add_or_stack;
use deckbound::{
    CombatEngine, CombatResult, CombatSnapshot, EnemyDefinition, EnemyId, EnemyRegistry,
    InstanceId, IntentKind, StatusKind, TurnPhase, HAND_SIZE, STARTING_ENERGY,
};

fn engine(seed: u64) -> CombatEngine {
    CombatEngine::new(starter_cards(), starter_enemies(), seed)
}

/// Find a card in hand by definition identifier.
fn in_hand(state: &CombatSnapshot, definition_id: &str) -> InstanceId {
    state
        .piles
        .hand
        .iter()
        .find(|c| c.definition_id.as_str() == definition_id)
        .map(|c| c.instance_id)
        .unwrap_or_else(|| panic!("{definition_id} not in hand"))
}

#[test]
fn test_strike_deals_six() {
    let mut engine = engine(42);
    let state = engine.init_combat(&["strike"; 10], &["jaw_worm"]);

    assert_eq!(state.piles.hand.len(), HAND_SIZE);
    assert_eq!(state.enemies[0].hp, 38);
    assert_eq!(state.player.energy, STARTING_ENERGY);

    let card = in_hand(&state, "strike");
    let next = engine.play_card(&state, card, Some(EnemyId(0)));

    assert_eq!(next.enemies[0].hp, 32);
    assert_eq!(next.player.energy, STARTING_ENERGY - 1);
    assert_eq!(next.piles.hand.len(), HAND_SIZE - 1);
    assert_eq!(next.piles.discard.len(), 1);

    // The input snapshot is untouched
    assert_eq!(state.enemies[0].hp, 38);
    assert_eq!(state.player.energy, STARTING_ENERGY);
}

#[test]
fn test_insufficient_energy_is_a_no_op() {
    let mut engine = engine(7);
    // Bludgeon costs 3; one play drains the turn's energy entirely
    let state = engine.init_combat(&["bludgeon"; 10], &["slime_boss"]);

    let after_first = engine.play_card(&state, in_hand(&state, "bludgeon"), None);
    assert_eq!(after_first.player.energy, 0);

    let card = in_hand(&after_first, "bludgeon");
    let after_second = engine.play_card(&after_first, card, None);
    assert_eq!(after_second, after_first);
}

#[test]
fn test_card_not_in_hand_is_a_no_op() {
    let mut engine = engine(7);
    let state = engine.init_combat(&["strike"; 10], &["jaw_worm"]);

    let next = engine.play_card(&state, InstanceId(999), Some(EnemyId(0)));
    assert_eq!(next, state);
}

#[test]
fn test_victory_freezes_the_snapshot() {
    let mut enemies = EnemyRegistry::new();
    enemies.register(EnemyDefinition::new("jaw_worm", "Jaw Worm", 5));
    let mut engine = CombatEngine::new(starter_cards(), enemies, 11);

    let state = engine.init_combat(&["strike"; 5], &["jaw_worm"]);
    let won = engine.play_card(&state, in_hand(&state, "strike"), Some(EnemyId(0)));

    assert_eq!(won.result, CombatResult::Victory);
    assert!(won.enemies.is_empty());

    // Terminal snapshots pass through every transition unchanged
    let card = in_hand(&won, "strike");
    assert_eq!(engine.play_card(&won, card, None), won);
    assert_eq!(engine.end_player_turn(&won), won);
}

#[test]
fn test_defeat_short_circuits_the_enemy_phase() {
    let mut engine = engine(3);
    // Gremlin Nob opens with a 14 attack
    let state = engine.init_combat_with_hp(&["strike"; 10], &["gremlin_nob"], 10, 10);

    let next = engine.end_player_turn(&state);

    assert_eq!(next.result, CombatResult::Defeat);
    assert_eq!(next.player.hp, 0);
    assert_eq!(next.phase, TurnPhase::EnemyTurn);
    // Defeat skips the redraw; the discarded hand stays down
    assert!(next.piles.hand.is_empty());
    assert_eq!(next.turn, state.turn);
}

#[test]
fn test_turn_rollover_resets_energy_and_block() {
    let mut engine = engine(42);
    let state = engine.init_combat(&["defend"; 10], &["jaw_worm"]);

    let defended = engine.play_card(&state, in_hand(&state, "defend"), None);
    assert_eq!(defended.player.block, 5);

    // Jaw Worm opens with a 9 attack: 5 absorbed, 4 through
    let next = engine.end_player_turn(&defended);

    assert_eq!(next.player.hp, 76);
    assert_eq!(next.player.block, 0);
    assert_eq!(next.player.energy, STARTING_ENERGY);
    assert_eq!(next.piles.hand.len(), HAND_SIZE);
    assert_eq!(next.turn, 2);
    assert_eq!(next.phase, TurnPhase::PlayerTurn);
    // Jaw Worm alternates into its defend turn
    assert_eq!(next.enemies[0].turn_count, 1);
}

#[test]
fn test_weak_reduces_enemy_damage_then_decays() {
    let mut engine = engine(9);
    // Cultist attacks for 5 + turn counter every turn
    let state = engine.init_combat(&["clothesline"; 10], &["cultist"]);

    let card = in_hand(&state, "clothesline");
    let cursed = engine.play_card(&state, card, Some(EnemyId(0)));
    assert_eq!(cursed.enemies[0].hp, 42 - 12);

    // Weak 2: attack 5 lands for floor(5 * 0.75) = 3
    let turn2 = engine.end_player_turn(&cursed);
    assert_eq!(turn2.player.hp, 77);

    // Weak 1: attack 6 lands for floor(6 * 0.75) = 4
    let turn3 = engine.end_player_turn(&turn2);
    assert_eq!(turn3.player.hp, 73);
    assert!(!turn3.enemies[0].is_weak());

    // Weak expired: attack 7 lands in full
    let turn4 = engine.end_player_turn(&turn3);
    assert_eq!(turn4.player.hp, 66);
}

#[test]
fn test_strength_raises_damage_and_persists() {
    let mut engine = engine(5);
    let deck = ["inflame", "strike", "strike", "strike", "strike"];
    let state = engine.init_combat(&deck, &["jaw_worm"]);

    let powered = engine.play_card(&state, in_hand(&state, "inflame"), None);
    assert_eq!(powered.player.strength(), 2);
    // Powers leave circulation for the rest of the battle
    assert_eq!(powered.piles.exhaust.len(), 1);
    assert!(powered.piles.discard.is_empty());

    let hit = engine.play_card(&powered, in_hand(&powered, "strike"), Some(EnemyId(0)));
    assert_eq!(hit.enemies[0].hp, 38 - 8);

    // Strength does not tick away at end of turn
    let next = engine.end_player_turn(&hit);
    assert_eq!(next.player.strength(), 2);

    let hit2 = engine.play_card(&next, in_hand(&next, "strike"), Some(EnemyId(0)));
    assert_eq!(hit2.enemies[0].hp, 38 - 8 - 8);
}

#[test]
fn test_vulnerable_amplifies_follow_up() {
    let mut engine = engine(13);
    let deck = ["bash", "strike", "strike", "strike", "strike"];
    let state = engine.init_combat(&deck, &["jaw_worm"]);

    let bashed = engine.play_card(&state, in_hand(&state, "bash"), Some(EnemyId(0)));
    assert_eq!(bashed.enemies[0].hp, 38 - 8);
    assert!(bashed.enemies[0].is_vulnerable());

    // Vulnerable: 6 becomes floor(6 * 1.5) = 9
    let followed = engine.play_card(&bashed, in_hand(&bashed, "strike"), Some(EnemyId(0)));
    assert_eq!(followed.enemies[0].hp, 38 - 8 - 9);
}

#[test]
fn test_exhaust_card_leaves_circulation() {
    let mut engine = engine(21);
    let state = engine.init_combat(&["uppercut"; 5], &["lagavulin"]);

    let next = engine.play_card(&state, in_hand(&state, "uppercut"), Some(EnemyId(0)));

    assert_eq!(next.piles.exhaust.len(), 1);
    assert!(next.piles.discard.is_empty());
    assert_eq!(next.enemies[0].hp, 112 - 13);
}

#[test]
fn test_cards_are_conserved_across_reshuffles() {
    let mut engine = engine(77);
    let state = engine.init_combat(&["strike"; 6], &["lagavulin"]);
    assert_eq!(state.total_cards(), 6);

    // Lagavulin defends for its first three turns; cycle freely
    let mut state = state;
    for _ in 0..4 {
        state = engine.end_player_turn(&state);
        assert_eq!(state.total_cards(), 6);
        assert_eq!(state.piles.hand.len(), HAND_SIZE);
    }
}

#[test]
fn test_unknown_identifiers_are_skipped() {
    let mut engine = engine(1);
    let state = engine.init_combat(&["strike", "no_such_card"], &["jaw_worm", "no_such_enemy"]);

    assert_eq!(state.total_cards(), 1);
    assert_eq!(state.enemies.len(), 1);
    assert_eq!(state.enemies[0].definition_id, "jaw_worm");
}

#[test]
fn test_all_target_damage_hits_every_enemy() {
    let mut engine = engine(31);
    let state = engine.init_combat(&["flame_wave"; 5], &["jaw_worm", "cultist"]);

    let next = engine.play_card(&state, in_hand(&state, "flame_wave"), None);

    assert_eq!(next.enemies[0].hp, 38 - 7);
    assert_eq!(next.enemies[1].hp, 42 - 7);
}

#[test]
fn test_missing_target_defaults_to_first_enemy() {
    let mut engine = engine(31);
    let state = engine.init_combat(&["strike"; 5], &["jaw_worm", "cultist"]);

    let next = engine.play_card(&state, in_hand(&state, "strike"), None);
    assert_eq!(next.enemies[0].hp, 38 - 6);
    assert_eq!(next.enemies[1].hp, 42);
}

#[test]
fn test_mid_card_overkill_is_wasted_on_the_target() {
    let mut enemies = EnemyRegistry::new();
    enemies.register(EnemyDefinition::new("cultist", "Cultist", 5));
    enemies.register(EnemyDefinition::new("jaw_worm", "Jaw Worm", 38));
    let mut engine = CombatEngine::new(starter_cards(), enemies, 31);

    // Twin Strike: 5 damage twice. The first hit downs the cultist;
    // the second lands on the downed target, not the bystander
    let state = engine.init_combat(&["twin_strike"; 5], &["cultist", "jaw_worm"]);
    let next = engine.play_card(&state, in_hand(&state, "twin_strike"), Some(EnemyId(0)));

    assert_eq!(next.enemies.len(), 1);
    assert_eq!(next.enemies[0].hp, 38);

    // Once the downed enemy is pruned, its stale id matches nothing
    // and the effect fizzles
    let fizzled = engine.play_card(&next, in_hand(&next, "twin_strike"), Some(EnemyId(0)));
    assert_eq!(fizzled.enemies[0].hp, 38);
    assert_eq!(fizzled.player.energy, next.player.energy - 1);
}

#[test]
fn test_cultist_scales_and_jaw_worm_alternates() {
    let mut engine = engine(2);
    let state = engine.init_combat(&["defend"; 10], &["jaw_worm", "cultist"]);

    assert_eq!(state.enemies[0].intent.value, 9);
    assert_eq!(state.enemies[1].intent.value, 5);

    let next = engine.end_player_turn(&state);
    assert_eq!(next.enemies[0].intent.value, 5); // defend turn
    assert_eq!(next.enemies[1].intent.value, 6);

    let next = engine.end_player_turn(&next);
    assert_eq!(next.enemies[0].intent.value, 9);
    assert_eq!(next.enemies[1].intent.value, 7);
}

#[test]
fn test_lagavulin_sleeps_then_wakes() {
    let mut engine = engine(8);
    let state = engine.init_combat(&["strike"; 10], &["lagavulin"]);
    assert_eq!(state.enemies[0].intent.kind, IntentKind::Defend);

    // Three sleeping turns deal no damage, then 18 every turn
    let mut state = state;
    for _ in 0..3 {
        state = engine.end_player_turn(&state);
    }
    assert_eq!(state.player.hp, 80);
    assert_eq!(state.enemies[0].intent.kind, IntentKind::Attack);
    assert_eq!(state.enemies[0].intent.value, 18);

    let next = engine.end_player_turn(&state);
    assert_eq!(next.player.hp, 80 - 18);
}

#[test]
fn test_player_statuses_decay_at_turn_rollover() {
    let mut engine = engine(6);
    // Lagavulin sleeps, so nothing else touches the player
    let mut state = engine.init_combat(&["strike"; 10], &["lagavulin"]);
    add_or_stack(&mut state.player.status_effects, StatusKind::Weak, 2);
    add_or_stack(&mut state.player.status_effects, StatusKind::Strength, 3);

    state = engine.end_player_turn(&state);
    assert!(state.player.is_weak());

    state = engine.end_player_turn(&state);
    assert!(!state.player.is_weak());
    assert_eq!(state.player.strength(), 3);
}

#[test]
fn test_offering_trades_hp_for_energy_and_cards() {
    let mut engine = engine(50);
    let deck = [
        "offering", "strike", "strike", "strike", "strike", "strike", "strike",
    ];
    let state = engine.init_combat(&deck, &["jaw_worm"]);

    // 7-card deck, 5 in hand; offering may start in the draw pile
    let mut state = state;
    while state
        .piles
        .hand
        .iter()
        .all(|c| c.definition_id.as_str() != "offering")
    {
        state = engine.end_player_turn(&state);
    }

    let hp_before = state.player.hp;
    let hand_before = state.piles.hand.len();
    let next = engine.play_card(&state, in_hand(&state, "offering"), None);

    assert_eq!(next.player.hp, hp_before - 6);
    assert_eq!(next.player.energy, STARTING_ENERGY + 2);
    assert_eq!(next.piles.hand.len(), hand_before - 1 + 3);
}
