//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card type as
//! read from the content catalog: cost, type, and the ordered list of
//! effects it resolves when played. Instance identity lives separately
//! in `CardInstance`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::StatusKind;

/// Identifier for a card definition.
///
/// The catalog is keyed by string identifiers ("strike", "bash+");
/// this newtype keeps them from mixing with other string data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Card type. Powers are exhausted on play rather than discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Attack,
    Skill,
    Power,
}

/// Which enemies an offensive effect hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMode {
    /// The supplied target enemy (even at 0 hp mid-card), or the first
    /// enemy in the sequence when none is supplied.
    Single,
    /// Every living enemy.
    All,
}

/// One atomic card effect.
///
/// A card's effect list resolves strictly in declared order, each
/// effect seeing the cumulative result of the ones before it: a
/// strength gain earlier in the list raises the damage computed by a
/// later damage effect of the same card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardEffect {
    /// Deal damage, modified by attacker strength/weak and target vulnerable.
    Damage { value: i32, target: TargetMode },
    /// Add to the player's block (no cap).
    Block { value: i32 },
    /// Draw cards, reshuffling the discard pile if the draw pile runs out.
    Draw { count: usize },
    /// Apply a countdown status to the resolved enemy target.
    ApplyStatus {
        kind: StatusKind,
        turns: i32,
        target: TargetMode,
    },
    /// Stack permanent strength on the player.
    GainStrength { value: i32 },
    /// Add player energy (no cap).
    GainEnergy { value: i32 },
    /// Reduce player hp, bypassing block, floored at 0.
    SelfDamage { value: i32 },
    /// Increase player hp, capped at max hp.
    Heal { value: i32 },
}

impl CardEffect {
    /// Single-target damage.
    #[must_use]
    pub const fn damage(value: i32) -> Self {
        Self::Damage {
            value,
            target: TargetMode::Single,
        }
    }

    /// Damage to every living enemy.
    #[must_use]
    pub const fn damage_all(value: i32) -> Self {
        Self::Damage {
            value,
            target: TargetMode::All,
        }
    }

    /// Gain block.
    #[must_use]
    pub const fn block(value: i32) -> Self {
        Self::Block { value }
    }

    /// Draw cards.
    #[must_use]
    pub const fn draw(count: usize) -> Self {
        Self::Draw { count }
    }

    /// Apply a status to the single resolved target.
    #[must_use]
    pub const fn apply_status(kind: StatusKind, turns: i32) -> Self {
        Self::ApplyStatus {
            kind,
            turns,
            target: TargetMode::Single,
        }
    }
}

/// Effect list for one card. Almost every card has 1-3 effects.
pub type EffectList = SmallVec<[CardEffect; 2]>;

/// Static card definition from the content catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Display description; the damage preview rewrites its numbers.
    pub description: String,

    /// Card type.
    pub card_type: CardType,

    /// Energy cost to play.
    pub cost: i32,

    /// Effects resolved in declared order when the card is played.
    pub effects: EffectList,

    /// Once played, route to the exhaust pile instead of the discard pile.
    pub exhaust: bool,

    /// Upgraded version of this card, if one exists.
    pub upgrade_id: Option<CardId>,

    /// Whether this definition is itself an upgrade.
    pub upgraded: bool,
}

impl CardDefinition {
    /// Create a new card definition with no effects.
    #[must_use]
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        card_type: CardType,
        cost: i32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            card_type,
            cost,
            effects: EffectList::new(),
            exhaust: false,
            upgrade_id: None,
            upgraded: false,
        }
    }

    /// Set the display description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: CardEffect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Mark the card as exhausting on play.
    #[must_use]
    pub fn with_exhaust(mut self) -> Self {
        self.exhaust = true;
        self
    }

    /// Link the upgraded version of this card.
    #[must_use]
    pub fn with_upgrade(mut self, id: impl Into<CardId>) -> Self {
        self.upgrade_id = Some(id.into());
        self
    }

    /// Mark this definition as an upgrade.
    #[must_use]
    pub fn as_upgraded(mut self) -> Self {
        self.upgraded = true;
        self
    }
}
