//! Combat runtime: actors, action queue, events, and the turn engine.
//!
//! A combat instance owns exactly two actors and one action queue; nothing
//! here is shared across combats. The deck survives combats at the
//! run-progression layer and is cloned in at configure time.

mod actor;
mod config;
mod engine;
mod enemy;
mod events;
mod player;
mod queue;

pub use actor::{CombatActor, DrawOutcome};
pub use config::CombatConfig;
pub use engine::{CombatBuilder, CombatEngine, Phase, PreparedPlay};
pub use enemy::EnemyActor;
pub use events::CombatEvent;
pub use player::PlayerActor;
pub use queue::{ActionContext, ActionQueue, ActorRole, GameAction};
