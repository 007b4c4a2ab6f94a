//! Card definitions, dual cards, and deck entries.
//!
//! `CardDefinition` is static authored data. A `DualCardDefinition` pairs two
//! definitions behind a single deck slot; which face is active depends on the
//! current world side and is re-resolved on every query, never fixed at draw
//! time. `DeckEntry` is the per-combat instance moved between piles.

mod deck;
mod definition;
mod dual;

pub use deck::{DeckCard, DeckEntry, EntryId};
pub use definition::{CardDefinition, CardRarity, CardTargetRule, CardType};
pub use dual::{DualCardDefinition, WorldSide};
