//! Core utilities: deterministic random number generation.

mod rng;

pub use rng::GameRng;
