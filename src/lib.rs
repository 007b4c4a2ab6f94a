//! # dualdeck
//!
//! Deterministic resolution engine for a turn-based dual-card battler.
//!
//! Given a deck snapshot, an adversary definition, and a stream of player
//! decisions, the engine computes every state transition (damage, blocking,
//! card draw, turn advancement, victory/defeat) for a presentation layer to
//! render. Rendering, input, save formats, and map progression live outside
//! this crate; they configure a combat, issue commands, and observe events.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: all randomness flows through a seeded RNG; a combat
//!    replayed with the same seed and inputs resolves identically.
//!
//! 2. **Declined, not thrown**: illegal commands (wrong phase, card not in
//!    hand, insufficient resources, switch ration exhausted) return a
//!    declined result with zero mutation. Only configure-time problems are
//!    errors.
//!
//! 3. **Events are optional**: notifications exist for presentation;
//!    correctness never depends on anyone consuming them.
//!
//! ## Modules
//!
//! - `core`: seeded RNG with independent context streams
//! - `cards`: card definitions, dual cards, deck entries, world sides
//! - `effects`: inert effect descriptors
//! - `elements`: elemental matchup matrix and damage adjustment
//! - `enemies`: adversary definitions, intents, move selection
//! - `combat`: actors, action queue, events, and the turn engine
//!
//! ## Example
//!
//! ```
//! use dualdeck::cards::{CardDefinition, DeckCard};
//! use dualdeck::combat::CombatBuilder;
//! use dualdeck::effects::EffectSpec;
//! use dualdeck::elements::Element;
//! use dualdeck::enemies::{EnemyDefinition, EnemyMove, IntentKind};
//!
//! let deck: Vec<DeckCard> = (0..5)
//!     .map(|_| {
//!         DeckCard::Single(
//!             CardDefinition::new("strike", "Strike", 1)
//!                 .with_element(Element::Rojo)
//!                 .with_effect(EffectSpec::damage(6)),
//!         )
//!     })
//!     .collect();
//!
//! let slime = EnemyDefinition::new("slime", "Slime", 20)
//!     .with_element(Element::Azul)
//!     .with_move(
//!         EnemyMove::new("tackle", "Tackle")
//!             .with_intent(IntentKind::Attack)
//!             .with_effect(EffectSpec::damage(5)),
//!     );
//!
//! let mut engine = CombatBuilder::new(deck, slime).seed(42).build().unwrap();
//!
//! let first = engine.hand()[0].id();
//! assert!(engine.play_card(first)); // Rojo vs Azul: 6 * 1.5 = 9 damage
//! assert_eq!(engine.enemy_hp(), 11);
//! assert_eq!(engine.momentum(), 1);
//! ```

pub mod cards;
pub mod combat;
pub mod core;
pub mod effects;
pub mod elements;
pub mod enemies;
mod error;

// Re-export commonly used types
pub use crate::cards::{
    CardDefinition, CardRarity, CardTargetRule, CardType, DeckCard, DeckEntry,
    DualCardDefinition, EntryId, WorldSide,
};

pub use crate::combat::{
    ActionContext, ActionQueue, ActorRole, CombatActor, CombatBuilder, CombatConfig,
    CombatEngine, CombatEvent, DrawOutcome, EnemyActor, GameAction, Phase, PlayerActor,
    PreparedPlay,
};

pub use crate::core::GameRng;

pub use crate::effects::{EffectKind, EffectSpec, EffectTarget, StatusKind};

pub use crate::elements::{adjusted_damage, effectiveness, Effectiveness, Element};

pub use crate::enemies::{AiPattern, EnemyDefinition, EnemyMove, IntentKind, MoveSelector};

pub use crate::error::ConfigError;
