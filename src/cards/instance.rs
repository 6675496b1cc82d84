//! Card instances - runtime card identity.
//!
//! A `CardInstance` is one physical copy of a card inside a battle.
//! Two copies of "strike" in the same deck share a definition but have
//! distinct instance IDs, and that identity follows the card as it
//! moves between piles.

use serde::{Deserialize, Serialize};

use super::definition::CardId;

/// Globally unique identifier for one card instance within a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One copy of a card in circulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique per instance, not per definition.
    pub instance_id: InstanceId,
    /// Foreign key into the card catalog.
    pub definition_id: CardId,
}

impl CardInstance {
    /// Create an instance of a definition.
    #[must_use]
    pub fn new(instance_id: InstanceId, definition_id: impl Into<CardId>) -> Self {
        Self {
            instance_id,
            definition_id: definition_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instances_share_definition() {
        let a = CardInstance::new(InstanceId(0), "strike");
        let b = CardInstance::new(InstanceId(1), "strike");

        assert_eq!(a.definition_id, b.definition_id);
        assert_ne!(a.instance_id, b.instance_id);
    }

    #[test]
    fn test_instance_serde() {
        let card = CardInstance::new(InstanceId(7), "bash");

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
