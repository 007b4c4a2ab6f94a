//! Effect descriptor types.
//!
//! An `EffectSpec` describes one gameplay effect (deal damage, gain block,
//! draw cards) without naming concrete actors. Target resolution happens at
//! play time, so the same descriptor works on cards and adversary moves.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// What an effect does when it resolves.
///
/// Only `Damage`, `Block`, and `DrawCards` currently map to queued actions;
/// the remaining kinds are authored data reserved for upcoming mechanics and
/// are skipped (with a warning) at play time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    Damage,
    Block,
    DrawCards,
    GainEnergy,
    ApplyStatus,
    Heal,
}

/// Who an effect applies to, relative to its source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectTarget {
    /// The actor playing the card / executing the move.
    Slf,
    /// The source's primary opponent.
    #[default]
    SingleOpponent,
    /// Every opponent of the source.
    AllOpponents,
}

/// Status ailment tag carried by `ApplyStatus` effects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    #[default]
    None,
    Poison,
    Weak,
    Vulnerable,
    Custom,
}

/// A single authored gameplay effect.
///
/// Immutable once authored. `params` holds free-form key/value data for
/// effect kinds that need extra configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub kind: EffectKind,
    /// Magnitude of the effect (damage dealt, block gained, cards drawn).
    pub magnitude: u32,
    pub target: EffectTarget,
    #[serde(default)]
    pub status: StatusKind,
    #[serde(default)]
    pub params: FxHashMap<String, String>,
}

impl EffectSpec {
    /// Create an effect with the default target for its kind.
    #[must_use]
    pub fn new(kind: EffectKind, magnitude: u32, target: EffectTarget) -> Self {
        Self {
            kind,
            magnitude,
            target,
            status: StatusKind::None,
            params: FxHashMap::default(),
        }
    }

    /// Damage the source's opponent.
    #[must_use]
    pub fn damage(magnitude: u32) -> Self {
        Self::new(EffectKind::Damage, magnitude, EffectTarget::SingleOpponent)
    }

    /// Grant block to the source.
    #[must_use]
    pub fn block(magnitude: u32) -> Self {
        Self::new(EffectKind::Block, magnitude, EffectTarget::Slf)
    }

    /// Draw cards for the source.
    #[must_use]
    pub fn draw(magnitude: u32) -> Self {
        Self::new(EffectKind::DrawCards, magnitude, EffectTarget::Slf)
    }

    /// Attach a status tag (builder pattern).
    #[must_use]
    pub fn with_status(mut self, status: StatusKind) -> Self {
        self.status = status;
        self
    }

    /// Attach a free-form parameter (builder pattern).
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_helper() {
        let effect = EffectSpec::damage(6);
        assert_eq!(effect.kind, EffectKind::Damage);
        assert_eq!(effect.magnitude, 6);
        assert_eq!(effect.target, EffectTarget::SingleOpponent);
    }

    #[test]
    fn test_block_and_draw_target_self() {
        assert_eq!(EffectSpec::block(5).target, EffectTarget::Slf);
        assert_eq!(EffectSpec::draw(2).target, EffectTarget::Slf);
    }

    #[test]
    fn test_with_param() {
        let effect = EffectSpec::new(EffectKind::ApplyStatus, 2, EffectTarget::SingleOpponent)
            .with_status(StatusKind::Poison)
            .with_param("duration", "3");

        assert_eq!(effect.status, StatusKind::Poison);
        assert_eq!(effect.params.get("duration").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let effect = EffectSpec::damage(10).with_param("pierce", "true");
        let json = serde_json::to_string(&effect).unwrap();
        let back: EffectSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }
}
