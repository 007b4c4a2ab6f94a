//! Dual cards and world sides.
//!
//! A dual card occupies one deck slot but carries two full card definitions,
//! one per world side. The active face is chosen by the combat's current
//! `WorldSide` at the moment of every query, so a held entry can present a
//! different card after a world switch.

use serde::{Deserialize, Serialize};

use super::definition::CardDefinition;

/// Which face of every dual card is currently playable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldSide {
    #[default]
    A,
    B,
}

impl WorldSide {
    /// The opposite side.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            WorldSide::A => WorldSide::B,
            WorldSide::B => WorldSide::A,
        }
    }
}

/// A two-faced card: side A and side B share one deck slot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DualCardDefinition {
    /// Stable identifier for the pair.
    pub id: String,

    /// Display name for the slot (faces keep their own names).
    pub display_name: String,

    pub side_a: CardDefinition,
    pub side_b: CardDefinition,
}

impl DualCardDefinition {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        side_a: CardDefinition,
        side_b: CardDefinition,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            side_a,
            side_b,
        }
    }

    /// The face active on the given world side.
    #[must_use]
    pub fn side(&self, world: WorldSide) -> &CardDefinition {
        match world {
            WorldSide::A => &self.side_a,
            WorldSide::B => &self.side_b,
        }
    }
}
