//! The four card piles of a battle and the operations that move cards
//! between them.
//!
//! Cards are never created or destroyed mid-battle, only relocated, so
//! `draw + hand + discard + exhaust` is constant for the whole fight.
//! The draw pile's back (`Vector` tail) is its top; drawing past the
//! end reshuffles the discard pile back in.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::{CardId, CardInstance, InstanceId};
use crate::core::GameRng;

/// The draw/hand/discard/exhaust piles of one battle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Piles {
    /// Face-down pile drawn from; the tail of the vector is the top.
    pub draw: Vector<CardInstance>,
    /// Cards currently playable.
    pub hand: Vector<CardInstance>,
    /// Played and end-of-turn discards; reshuffled into draw on demand.
    pub discard: Vector<CardInstance>,
    /// Cards removed from circulation for the rest of the battle.
    pub exhaust: Vector<CardInstance>,
}

impl Piles {
    /// Build a shuffled draw pile from a deck list.
    ///
    /// One `CardInstance` is created per definition id, with instance
    /// ids allocated sequentially before the shuffle so identity is
    /// independent of deck order randomness.
    #[must_use]
    pub fn build(deck_ids: impl IntoIterator<Item = CardId>, rng: &mut GameRng) -> Self {
        let mut cards: Vec<CardInstance> = deck_ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| CardInstance::new(InstanceId(i as u32), id))
            .collect();
        rng.shuffle(&mut cards);

        Self {
            draw: cards.into_iter().collect(),
            hand: Vector::new(),
            discard: Vector::new(),
            exhaust: Vector::new(),
        }
    }

    /// Draw up to `count` cards from the draw pile into the hand.
    ///
    /// When the draw pile runs out mid-draw, the discard pile is
    /// shuffled and becomes the new draw pile; if both are empty,
    /// drawing stops early. Returns the number actually drawn.
    pub fn draw(&mut self, count: usize, rng: &mut GameRng) -> usize {
        let mut drawn = 0;

        for _ in 0..count {
            if self.draw.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
            }
            if let Some(card) = self.draw.pop_back() {
                self.hand.push_back(card);
                drawn += 1;
            }
        }

        drawn
    }

    /// Move every card from the hand to the end of the discard pile,
    /// preserving hand order.
    pub fn discard_hand(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.discard.append(hand);
    }

    /// Remove a card from the hand by instance id.
    pub fn take_from_hand(&mut self, instance_id: InstanceId) -> Option<CardInstance> {
        let index = self
            .hand
            .iter()
            .position(|c| c.instance_id == instance_id)?;
        Some(self.hand.remove(index))
    }

    /// Total cards across all four piles.
    ///
    /// Constant for the lifetime of a battle: cards are only ever
    /// relocated, never deleted.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw.len() + self.hand.len() + self.discard.len() + self.exhaust.len()
    }

    fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        trace!(count = self.discard.len(), "reshuffling discard into draw");
        let mut cards: Vec<CardInstance> = std::mem::take(&mut self.discard).into_iter().collect();
        rng.shuffle(&mut cards);
        self.draw = cards.into_iter().collect();
    }
}
