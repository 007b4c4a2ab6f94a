//! The action queue.
//!
//! A strictly-ordered backlog of executable actions, drained FIFO one action
//! per step. Draining tolerates actions enqueued *during* the drain (an
//! executing action can push follow-ups through its context) by re-checking
//! the queue after every dequeue instead of iterating a snapshot. A boolean
//! guard makes a nested full drain a no-op.

use std::collections::VecDeque;

use super::actor::CombatActor;
use super::enemy::EnemyActor;
use super::events::CombatEvent;
use super::player::PlayerActor;

/// Which of the combat's two actors an action addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorRole {
    Player,
    Enemy,
}

impl ActorRole {
    /// The other side.
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            ActorRole::Player => ActorRole::Enemy,
            ActorRole::Enemy => ActorRole::Player,
        }
    }
}

/// One executable combat action.
///
/// Damage amounts are final: elemental adjustment happens when the action is
/// created, not when it executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameAction {
    Damage {
        source: ActorRole,
        target: ActorRole,
        amount: u32,
    },
    Block {
        target: ActorRole,
        amount: u32,
    },
    Draw {
        target: ActorRole,
        amount: u32,
    },
}

impl GameAction {
    fn execute(self, ctx: &mut ActionContext<'_>) {
        match self {
            GameAction::Damage { source, target, amount } => {
                if amount == 0 {
                    return;
                }

                let hp_before = ctx.actor(target).hp();
                ctx.actor_mut(target).take_damage(amount);
                let lost = hp_before - ctx.actor(target).hp();

                if source == ActorRole::Player && target == ActorRole::Enemy && lost > 0 {
                    ctx.events.push(CombatEvent::EnemyDamaged { amount: lost });
                }
            }
            GameAction::Block { target, amount } => {
                if amount == 0 {
                    return;
                }
                ctx.actor_mut(target).gain_block(amount);
            }
            GameAction::Draw { target, amount } => {
                if amount == 0 {
                    return;
                }
                let outcome = ctx.actor_mut(target).draw_cards(amount);
                if let Some(limit) = outcome.hand_limit {
                    ctx.events.push(CombatEvent::HandLimitReached { limit });
                }
            }
        }
    }
}

/// Mutable state handed to each executing action.
///
/// `followups` lets an action enqueue further work mid-drain; the queue
/// splices them in after the action completes, preserving FIFO order.
pub struct ActionContext<'a> {
    pub player: &'a mut PlayerActor,
    pub enemy: &'a mut EnemyActor,
    pub events: &'a mut Vec<CombatEvent>,
    pub followups: Vec<GameAction>,
}

impl<'a> ActionContext<'a> {
    #[must_use]
    pub fn new(
        player: &'a mut PlayerActor,
        enemy: &'a mut EnemyActor,
        events: &'a mut Vec<CombatEvent>,
    ) -> Self {
        Self {
            player,
            enemy,
            events,
            followups: Vec::new(),
        }
    }

    #[must_use]
    pub fn actor(&self, role: ActorRole) -> &dyn CombatActor {
        match role {
            ActorRole::Player => &*self.player,
            ActorRole::Enemy => &*self.enemy,
        }
    }

    #[must_use]
    pub fn actor_mut(&mut self, role: ActorRole) -> &mut dyn CombatActor {
        match role {
            ActorRole::Player => &mut *self.player,
            ActorRole::Enemy => &mut *self.enemy,
        }
    }

    /// Enqueue a follow-up action behind everything already pending.
    pub fn enqueue(&mut self, action: GameAction) {
        self.followups.push(action);
    }
}

/// Deterministic FIFO queue that resolves gameplay actions one at a time.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: VecDeque<GameAction>,
    draining: bool,
}

impl ActionQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the backlog.
    pub fn enqueue(&mut self, action: GameAction) {
        self.pending.push_back(action);
    }

    /// Append several actions in order.
    pub fn enqueue_all(&mut self, actions: impl IntoIterator<Item = GameAction>) {
        self.pending.extend(actions);
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Dequeue and execute a single action. Returns false when empty.
    ///
    /// Emits `ActionStarted`/`ActionCompleted` around the execution and
    /// splices any follow-ups the action enqueued into the backlog.
    pub fn process_next(&mut self, ctx: &mut ActionContext<'_>) -> bool {
        let Some(action) = self.pending.pop_front() else {
            return false;
        };

        ctx.events.push(CombatEvent::ActionStarted(action));
        action.execute(ctx);
        self.pending.extend(ctx.followups.drain(..));
        ctx.events.push(CombatEvent::ActionCompleted(action));
        true
    }

    /// Drain the backlog in FIFO order until it is empty.
    ///
    /// Re-checks the queue after every dequeue, so actions enqueued during
    /// the drain are executed too. A no-op if a drain is already running.
    pub fn process_all(&mut self, ctx: &mut ActionContext<'_>) {
        if self.draining {
            return;
        }

        self.draining = true;
        while self.process_next(ctx) {}
        self.draining = false;
    }

    /// Discard all pending actions.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
