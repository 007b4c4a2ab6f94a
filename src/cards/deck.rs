//! Deck entries - the unit moved between piles.
//!
//! Decks are authored as `DeckCard`s (owned by run-level progression,
//! outside this engine) and cloned into per-combat `DeckEntry`s at configure
//! time. Each entry gets a combat-unique `EntryId`, which is how callers name
//! cards when issuing play commands.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;
use super::dual::{DualCardDefinition, WorldSide};

/// Combat-unique identifier for a deck entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl EntryId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entry({})", self.0)
    }
}

/// Authored deck slot: a single card or a dual pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DeckCard {
    Single(CardDefinition),
    Dual(DualCardDefinition),
}

impl DeckCard {
    /// The card active on the given world side.
    ///
    /// Re-resolved on every call; a dual entry changes faces when the world
    /// switches, even while held in hand.
    #[must_use]
    pub fn active_card(&self, world: WorldSide) -> &CardDefinition {
        match self {
            DeckCard::Single(card) => card,
            DeckCard::Dual(dual) => dual.side(world),
        }
    }

    /// Display name for the slot.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            DeckCard::Single(card) => &card.name,
            DeckCard::Dual(dual) => &dual.display_name,
        }
    }
}

/// A per-combat card instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckEntry {
    id: EntryId,
    card: DeckCard,
}

impl DeckEntry {
    #[must_use]
    pub fn new(id: EntryId, card: DeckCard) -> Self {
        Self { id, card }
    }

    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn card(&self) -> &DeckCard {
        &self.card
    }

    /// The card active on the given world side.
    #[must_use]
    pub fn active_card(&self, world: WorldSide) -> &CardDefinition {
        self.card.active_card(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry_ignores_world_side() {
        let entry = DeckEntry::new(
            EntryId::new(0),
            DeckCard::Single(CardDefinition::new("strike", "Strike", 1)),
        );

        assert_eq!(entry.active_card(WorldSide::A).id, "strike");
        assert_eq!(entry.active_card(WorldSide::B).id, "strike");
    }

    #[test]
    fn test_dual_entry_follows_world_side() {
        let entry = DeckEntry::new(
            EntryId::new(1),
            DeckCard::Dual(DualCardDefinition::new(
                "sun-moon",
                "Sun / Moon",
                CardDefinition::new("sun", "Sun", 1),
                CardDefinition::new("moon", "Moon", 2),
            )),
        );

        assert_eq!(entry.active_card(WorldSide::A).id, "sun");
        assert_eq!(entry.active_card(WorldSide::B).id, "moon");
        // Active face re-resolves per query, never fixed at draw time.
        assert_eq!(entry.active_card(WorldSide::A).id, "sun");
    }

    #[test]
    fn test_display_name() {
        let single = DeckCard::Single(CardDefinition::new("strike", "Strike", 1));
        assert_eq!(single.display_name(), "Strike");

        let dual = DeckCard::Dual(DualCardDefinition::new(
            "sun-moon",
            "Sun / Moon",
            CardDefinition::new("sun", "Sun", 1),
            CardDefinition::new("moon", "Moon", 2),
        ));
        assert_eq!(dual.display_name(), "Sun / Moon");
    }
}
