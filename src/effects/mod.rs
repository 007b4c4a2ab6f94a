//! Effect descriptors.
//!
//! Effects are inert, authored data: a card or adversary move carries an
//! ordered list of `EffectSpec`s, and the combat engine converts them into
//! queued actions at play time. Nothing in this module mutates state.

mod spec;

pub use spec::{EffectKind, EffectSpec, EffectTarget, StatusKind};
