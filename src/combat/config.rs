//! Combat configuration.

use serde::{Deserialize, Serialize};

/// Tunable parameters for one combat instance.
///
/// Defaults match the standard encounter setup; builders and tests override
/// individual knobs with the `with_*` setters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Display name for the player actor.
    pub player_name: String,

    pub player_max_hp: u32,

    /// Energy restored at the start of each player turn.
    pub energy_per_turn: u32,

    /// Cards drawn when the combat opens (larger than the per-turn draw).
    pub starting_hand_size: u32,

    /// Cards drawn at the start of every later player turn.
    pub cards_per_turn: u32,

    pub max_hand_size: usize,

    /// World-switch ration for the whole combat.
    pub max_world_switches: u32,

    /// Diagnostic override: bypasses the ration cap and the usage counter.
    pub unlimited_world_switches: bool,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            player_name: "Test Pilot".to_string(),
            player_max_hp: 60,
            energy_per_turn: 3,
            starting_hand_size: 5,
            cards_per_turn: 5,
            max_hand_size: 10,
            max_world_switches: 1,
            unlimited_world_switches: false,
        }
    }
}

impl CombatConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    #[must_use]
    pub fn with_player_max_hp(mut self, hp: u32) -> Self {
        self.player_max_hp = hp.max(1);
        self
    }

    #[must_use]
    pub fn with_energy_per_turn(mut self, energy: u32) -> Self {
        self.energy_per_turn = energy;
        self
    }

    #[must_use]
    pub fn with_starting_hand_size(mut self, size: u32) -> Self {
        self.starting_hand_size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_cards_per_turn(mut self, count: u32) -> Self {
        self.cards_per_turn = count.max(1);
        self
    }

    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size.max(1);
        self
    }

    #[must_use]
    pub fn with_max_world_switches(mut self, count: u32) -> Self {
        self.max_world_switches = count.max(1);
        self
    }

    #[must_use]
    pub fn with_unlimited_world_switches(mut self, unlimited: bool) -> Self {
        self.unlimited_world_switches = unlimited;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.player_max_hp, 60);
        assert_eq!(config.energy_per_turn, 3);
        assert_eq!(config.starting_hand_size, 5);
        assert_eq!(config.cards_per_turn, 5);
        assert_eq!(config.max_world_switches, 1);
        assert!(!config.unlimited_world_switches);
    }

    #[test]
    fn test_setters_clamp_minimums() {
        let config = CombatConfig::new()
            .with_player_max_hp(0)
            .with_starting_hand_size(0)
            .with_cards_per_turn(0)
            .with_max_hand_size(0)
            .with_max_world_switches(0);

        assert_eq!(config.player_max_hp, 1);
        assert_eq!(config.starting_hand_size, 1);
        assert_eq!(config.cards_per_turn, 1);
        assert_eq!(config.max_hand_size, 1);
        assert_eq!(config.max_world_switches, 1);
    }
}
