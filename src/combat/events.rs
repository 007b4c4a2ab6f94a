//! Outbound combat notifications.
//!
//! The engine buffers events as it mutates state; the presentation layer
//! drains them with [`CombatEngine::drain_events`](super::CombatEngine::drain_events)
//! whenever it likes. Nothing in the engine depends on them being consumed.

use crate::elements::Effectiveness;

use super::queue::GameAction;

/// A notification fired on a state change, consumed by presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatEvent {
    /// A queued action was dequeued and is about to execute.
    ActionStarted(GameAction),

    /// A queued action finished executing.
    ActionCompleted(GameAction),

    /// A player attack hit the adversary; carries the matchup tier and
    /// whether the hit banked a momentum charge.
    HitEffectiveness {
        tier: Effectiveness,
        momentum_granted: bool,
    },

    /// The adversary lost HP; `amount` is the final HP delta after block.
    EnemyDamaged { amount: u32 },

    /// A draw batch stopped because the hand was full.
    HandLimitReached { limit: usize },
}
