//! Configuration error taxonomy.
//!
//! Only *configuration* problems are errors: a combat that cannot start.
//! Illegal commands during a running combat (wrong phase, card not in hand,
//! insufficient resources, switch ration exhausted) are declined results on
//! the command itself, never `Err` and never a panic.

use thiserror::Error;

/// A combat instance could not be configured.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The starter deck snapshot was empty.
    #[error("starter deck is empty")]
    EmptyDeck,
}
