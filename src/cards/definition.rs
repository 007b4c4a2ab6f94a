//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: cost, category,
//! element, and the ordered effect list the engine enqueues when the card is
//! played. Per-combat data (which pile the card sits in) lives in
//! [`DeckEntry`](super::DeckEntry), not here.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::EffectSpec;
use crate::elements::Element;

/// Categorization of card behaviors for gameplay and UI filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    #[default]
    Attack,
    Skill,
    Power,
    Curse,
    Status,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Legendary,
}

/// Primary targeting intent for a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardTargetRule {
    None,
    Slf,
    #[default]
    SingleOpponent,
    AllOpponents,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use dualdeck::cards::{CardDefinition, CardType};
/// use dualdeck::effects::EffectSpec;
/// use dualdeck::elements::Element;
///
/// let strike = CardDefinition::new("strike", "Strike", 1)
///     .with_element(Element::Rojo)
///     .with_effect(EffectSpec::damage(6));
///
/// assert_eq!(strike.cost, 1);
/// assert_eq!(strike.card_type, CardType::Attack);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Stable identifier for this card (e.g. "strike").
    pub id: String,

    /// Display name.
    pub name: String,

    /// Flavor/rules text shown on the card face.
    #[serde(default)]
    pub description: String,

    /// Energy cost to play.
    pub cost: u32,

    pub card_type: CardType,

    pub rarity: CardRarity,

    /// Default target when the caller supplies none.
    pub target: CardTargetRule,

    /// Elemental tag, used for effectiveness against the adversary.
    pub element: Element,

    /// Ordered effects enqueued when the card resolves.
    pub effects: SmallVec<[EffectSpec; 4]>,

    /// Free-form tags for deck building and filtering.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CardDefinition {
    /// Create a card definition with defaults (Attack, Common, single
    /// opponent target, no element).
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            cost,
            card_type: CardType::default(),
            rarity: CardRarity::default(),
            target: CardTargetRule::default(),
            element: Element::None,
            effects: SmallVec::new(),
            tags: Vec::new(),
        }
    }

    /// Set the card type (builder pattern).
    #[must_use]
    pub fn with_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }

    /// Set the rarity (builder pattern).
    #[must_use]
    pub fn with_rarity(mut self, rarity: CardRarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the default target rule (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: CardTargetRule) -> Self {
        self.target = target;
        self
    }

    /// Set the elemental tag (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a tag (builder pattern).
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether this card counts as an attack for momentum purposes.
    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.card_type == CardType::Attack
    }
}
