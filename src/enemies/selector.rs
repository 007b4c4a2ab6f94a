//! Adversary move selection.
//!
//! Pure policy over an `EnemyDefinition`'s move set. The selector owns the
//! sequence cursor; randomness comes from the caller's `GameRng` stream so
//! selection stays deterministic per seed.

use crate::core::GameRng;

use super::definition::{AiPattern, EnemyDefinition};

/// Chooses the adversary's next move per its definition's pattern.
#[derive(Clone, Debug, Default)]
pub struct MoveSelector {
    sequence_cursor: usize,
}

impl MoveSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the index of the next move, or `None` for an empty move set.
    ///
    /// - `RandomWeighted`: cumulative weights (each clamped to >= 1), uniform
    ///   roll in `[0, total)`, first move whose running total exceeds the roll.
    /// - `Sequence`: cursor modulo move count, advancing by one per selection
    ///   regardless of combat outcome.
    /// - `Uniform`: uniform index.
    pub fn select(&mut self, definition: &EnemyDefinition, rng: &mut GameRng) -> Option<usize> {
        let moves = &definition.moves;
        if moves.is_empty() {
            return None;
        }

        match definition.ai_pattern {
            AiPattern::RandomWeighted => {
                let total: u32 = moves.iter().map(|m| m.weight.max(1)).sum();
                let roll = rng.gen_range_u32(0..total.max(1));

                let mut accumulator = 0;
                for (index, mv) in moves.iter().enumerate() {
                    accumulator += mv.weight.max(1);
                    if roll < accumulator {
                        return Some(index);
                    }
                }

                Some(moves.len() - 1)
            }
            AiPattern::Sequence => {
                let index = self.sequence_cursor % moves.len();
                self.sequence_cursor += 1;
                Some(index)
            }
            AiPattern::Uniform => Some(rng.gen_range_usize(0..moves.len())),
        }
    }
}
