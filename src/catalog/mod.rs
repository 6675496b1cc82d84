//! Built-in starter content.
//!
//! The engine itself only reads catalogs by identifier; this module
//! ships the base warrior card set and the act-one enemy roster so the
//! crate is playable and testable out of the box. Callers with their
//! own content simply build their own registries instead.

use crate::cards::{CardDefinition, CardEffect, CardRegistry, CardType};
use crate::core::StatusKind;
use crate::enemies::{EnemyDefinition, EnemyRegistry};

/// The starter deck: 5x strike, 4x defend, 1x bash.
pub const STARTER_DECK: [&str; 10] = [
    "strike", "strike", "strike", "strike", "strike", "defend", "defend", "defend", "defend",
    "bash",
];

/// Registry with the base warrior card set.
#[must_use]
pub fn starter_cards() -> CardRegistry {
    let mut registry = CardRegistry::new();

    registry.register(
        CardDefinition::new("strike", "Strike", CardType::Attack, 1)
            .with_description("Deal 6 damage.")
            .with_effect(CardEffect::damage(6))
            .with_upgrade("strike+"),
    );
    registry.register(
        CardDefinition::new("defend", "Defend", CardType::Skill, 1)
            .with_description("Gain 5 Block.")
            .with_effect(CardEffect::block(5))
            .with_upgrade("defend+"),
    );
    registry.register(
        CardDefinition::new("bash", "Bash", CardType::Attack, 2)
            .with_description("Deal 8 damage. Apply 2 Vulnerable.")
            .with_effect(CardEffect::damage(8))
            .with_effect(CardEffect::apply_status(StatusKind::Vulnerable, 2))
            .with_upgrade("bash+"),
    );
    registry.register(
        CardDefinition::new("cleave", "Cleave", CardType::Attack, 1)
            .with_description("Deal 8 damage.")
            .with_effect(CardEffect::damage(8)),
    );
    registry.register(
        CardDefinition::new("shrug_it_off", "Shrug It Off", CardType::Skill, 1)
            .with_description("Gain 8 Block. Draw 1 card.")
            .with_effect(CardEffect::block(8))
            .with_effect(CardEffect::draw(1)),
    );
    registry.register(
        CardDefinition::new("pommel_strike", "Pommel Strike", CardType::Attack, 1)
            .with_description("Deal 9 damage. Draw 1 card.")
            .with_effect(CardEffect::damage(9))
            .with_effect(CardEffect::draw(1)),
    );
    registry.register(
        CardDefinition::new("twin_strike", "Twin Strike", CardType::Attack, 1)
            .with_description("Deal 5 damage twice.")
            .with_effect(CardEffect::damage(5))
            .with_effect(CardEffect::damage(5)),
    );
    registry.register(
        CardDefinition::new("iron_wave", "Iron Wave", CardType::Attack, 1)
            .with_description("Gain 5 Block. Deal 5 damage.")
            .with_effect(CardEffect::block(5))
            .with_effect(CardEffect::damage(5)),
    );
    registry.register(
        CardDefinition::new("clothesline", "Clothesline", CardType::Attack, 2)
            .with_description("Deal 12 damage. Apply 2 Weak.")
            .with_effect(CardEffect::damage(12))
            .with_effect(CardEffect::apply_status(StatusKind::Weak, 2)),
    );
    registry.register(
        CardDefinition::new("true_grit", "True Grit", CardType::Skill, 1)
            .with_description("Gain 7 Block.")
            .with_effect(CardEffect::block(7)),
    );
    registry.register(
        CardDefinition::new("battle_trance", "Battle Trance", CardType::Skill, 0)
            .with_description("Draw 3 cards.")
            .with_effect(CardEffect::draw(3)),
    );
    registry.register(
        CardDefinition::new("carnage", "Carnage", CardType::Attack, 2)
            .with_description("Deal 20 damage.")
            .with_effect(CardEffect::damage(20)),
    );
    registry.register(
        CardDefinition::new("bloodletting", "Bloodletting", CardType::Skill, 0)
            .with_description("Lose 3 HP. Gain 2 energy.")
            .with_effect(CardEffect::SelfDamage { value: 3 })
            .with_effect(CardEffect::GainEnergy { value: 2 })
            .with_exhaust(),
    );
    registry.register(
        CardDefinition::new("heavy_blade", "Heavy Blade", CardType::Attack, 2)
            .with_description("Deal 14 damage.")
            .with_effect(CardEffect::damage(14)),
    );
    registry.register(
        CardDefinition::new("inflame", "Inflame", CardType::Power, 1)
            .with_description("Gain 2 Strength.")
            .with_effect(CardEffect::GainStrength { value: 2 }),
    );
    registry.register(
        CardDefinition::new("bludgeon", "Bludgeon", CardType::Attack, 3)
            .with_description("Deal 32 damage.")
            .with_effect(CardEffect::damage(32)),
    );
    registry.register(
        CardDefinition::new("uppercut", "Uppercut", CardType::Attack, 2)
            .with_description("Deal 13 damage. Apply 1 Weak. Apply 1 Vulnerable.")
            .with_effect(CardEffect::damage(13))
            .with_effect(CardEffect::apply_status(StatusKind::Weak, 1))
            .with_effect(CardEffect::apply_status(StatusKind::Vulnerable, 1))
            .with_exhaust(),
    );
    registry.register(
        CardDefinition::new("anger", "Anger", CardType::Attack, 0)
            .with_description("Deal 6 damage.")
            .with_effect(CardEffect::damage(6)),
    );
    registry.register(
        CardDefinition::new("impervious", "Impervious", CardType::Skill, 2)
            .with_description("Gain 30 Block.")
            .with_effect(CardEffect::block(30))
            .with_exhaust(),
    );
    registry.register(
        CardDefinition::new("offering", "Offering", CardType::Skill, 0)
            .with_description("Lose 6 HP. Gain 2 energy. Draw 3 cards.")
            .with_effect(CardEffect::SelfDamage { value: 6 })
            .with_effect(CardEffect::GainEnergy { value: 2 })
            .with_effect(CardEffect::draw(3))
            .with_exhaust(),
    );
    registry.register(
        CardDefinition::new("sword_boomerang", "Sword Boomerang", CardType::Attack, 1)
            .with_description("Deal 3 damage three times.")
            .with_effect(CardEffect::damage(3))
            .with_effect(CardEffect::damage(3))
            .with_effect(CardEffect::damage(3)),
    );
    registry.register(
        CardDefinition::new("flame_wave", "Flame Wave", CardType::Attack, 2)
            .with_description("Deal 7 damage to all enemies.")
            .with_effect(CardEffect::damage_all(7)),
    );

    // Upgrades
    registry.register(
        CardDefinition::new("strike+", "Strike+", CardType::Attack, 1)
            .with_description("Deal 9 damage.")
            .with_effect(CardEffect::damage(9))
            .as_upgraded(),
    );
    registry.register(
        CardDefinition::new("defend+", "Defend+", CardType::Skill, 1)
            .with_description("Gain 8 Block.")
            .with_effect(CardEffect::block(8))
            .as_upgraded(),
    );
    registry.register(
        CardDefinition::new("bash+", "Bash+", CardType::Attack, 2)
            .with_description("Deal 10 damage. Apply 3 Vulnerable.")
            .with_effect(CardEffect::damage(10))
            .with_effect(CardEffect::apply_status(StatusKind::Vulnerable, 3))
            .as_upgraded(),
    );

    registry
}

/// Registry with the act-one enemy roster.
#[must_use]
pub fn starter_enemies() -> EnemyRegistry {
    let mut registry = EnemyRegistry::new();

    registry.register(EnemyDefinition::new("jaw_worm", "Jaw Worm", 38));
    registry.register(EnemyDefinition::new("cultist", "Cultist", 42));
    registry.register(EnemyDefinition::new("louse_red", "Red Louse", 24));
    registry.register(EnemyDefinition::new("fungi_beast", "Fungi Beast", 24));
    registry.register(EnemyDefinition::new("gremlin_nob", "Gremlin Nob", 82));
    registry.register(EnemyDefinition::new("lagavulin", "Lagavulin", 112));
    registry.register(EnemyDefinition::new("slime_boss", "Slime Boss", 150));

    registry
}
