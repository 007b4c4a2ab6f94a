//! Adversary definitions and move selection.

mod definition;
mod selector;

pub use definition::{AiPattern, EnemyDefinition, EnemyMove, IntentKind};
pub use selector::MoveSelector;
