//! Adversary definitions - static authored data.
//!
//! An `EnemyDefinition` describes one adversary: HP, starting block, element,
//! and a move set with the pattern used to pick the next move. Definitions
//! are immutable; per-combat state lives in
//! [`EnemyActor`](crate::combat::EnemyActor).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::effects::{EffectKind, EffectSpec};
use crate::elements::Element;

/// Forward-looking classification of a move, shown to the player before the
/// adversary acts. Display only; never affects resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentKind {
    #[default]
    Unknown,
    Attack,
    Defend,
}

/// How an adversary picks its next move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AiPattern {
    /// Weighted random draw over the move set.
    #[default]
    RandomWeighted,
    /// Cycle through moves in list order.
    Sequence,
    /// Uniform random choice.
    Uniform,
}

/// One move in an adversary's move set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyMove {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,

    /// Ordered effects enqueued when the move executes.
    pub effects: SmallVec<[EffectSpec; 4]>,

    /// Selection weight for `RandomWeighted` (values below 1 count as 1).
    pub weight: u32,

    /// Authored position for `Sequence` patterns.
    #[serde(default)]
    pub sequence_index: i32,

    pub intent: IntentKind,
}

impl EnemyMove {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            effects: SmallVec::new(),
            weight: 1,
            sequence_index: -1,
            intent: IntentKind::Unknown,
        }
    }

    /// Append an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectSpec) -> Self {
        self.effects.push(effect);
        self
    }

    /// Set the selection weight (builder pattern).
    #[must_use]
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the intent classification (builder pattern).
    #[must_use]
    pub fn with_intent(mut self, intent: IntentKind) -> Self {
        self.intent = intent;
        self
    }

    /// Aggregate magnitude across effects matching this move's intent.
    ///
    /// Attack intents sum damage effects, defend intents sum block effects.
    /// Display only.
    #[must_use]
    pub fn intent_value(&self) -> u32 {
        let matching = match self.intent {
            IntentKind::Attack => EffectKind::Damage,
            IntentKind::Defend => EffectKind::Block,
            IntentKind::Unknown => return 0,
        };

        self.effects
            .iter()
            .filter(|e| e.kind == matching)
            .map(|e| e.magnitude)
            .sum()
    }
}

/// Static adversary definition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyDefinition {
    pub id: String,
    pub name: String,

    /// Maximum HP (clamped to at least 1 at combat setup).
    pub max_hp: u32,

    /// Block the adversary starts the combat with.
    pub base_block: u32,

    pub ai_pattern: AiPattern,

    pub element: Element,

    #[serde(default)]
    pub tags: Vec<String>,

    pub moves: Vec<EnemyMove>,
}

impl EnemyDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_hp: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_hp,
            base_block: 0,
            ai_pattern: AiPattern::default(),
            element: Element::None,
            tags: Vec::new(),
            moves: Vec::new(),
        }
    }

    /// Set starting block (builder pattern).
    #[must_use]
    pub fn with_base_block(mut self, block: u32) -> Self {
        self.base_block = block;
        self
    }

    /// Set the selection pattern (builder pattern).
    #[must_use]
    pub fn with_pattern(mut self, pattern: AiPattern) -> Self {
        self.ai_pattern = pattern;
        self
    }

    /// Set the elemental tag (builder pattern).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = element;
        self
    }

    /// Append a move (builder pattern).
    #[must_use]
    pub fn with_move(mut self, enemy_move: EnemyMove) -> Self {
        self.moves.push(enemy_move);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_value_attack_sums_damage_only() {
        let mv = EnemyMove::new("claw", "Claw")
            .with_intent(IntentKind::Attack)
            .with_effect(EffectSpec::damage(6))
            .with_effect(EffectSpec::damage(4))
            .with_effect(EffectSpec::block(5));

        assert_eq!(mv.intent_value(), 10);
    }

    #[test]
    fn test_intent_value_defend_sums_block_only() {
        let mv = EnemyMove::new("harden", "Harden")
            .with_intent(IntentKind::Defend)
            .with_effect(EffectSpec::block(8))
            .with_effect(EffectSpec::damage(3));

        assert_eq!(mv.intent_value(), 8);
    }

    #[test]
    fn test_intent_value_unknown_is_zero() {
        let mv = EnemyMove::new("howl", "Howl")
            .with_effect(EffectSpec::damage(12));

        assert_eq!(mv.intent_value(), 0);
    }

    #[test]
    fn test_definition_builder() {
        let def = EnemyDefinition::new("slime", "Slime", 30)
            .with_base_block(5)
            .with_pattern(AiPattern::Sequence)
            .with_element(Element::Azul)
            .with_move(EnemyMove::new("tackle", "Tackle"));

        assert_eq!(def.max_hp, 30);
        assert_eq!(def.base_block, 5);
        assert_eq!(def.ai_pattern, AiPattern::Sequence);
        assert_eq!(def.element, Element::Azul);
        assert_eq!(def.moves.len(), 1);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let def = EnemyDefinition::new("slime", "Slime", 30)
            .with_move(EnemyMove::new("tackle", "Tackle").with_effect(EffectSpec::damage(5)));

        let json = serde_json::to_string(&def).unwrap();
        let back: EnemyDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, back);
    }
}
