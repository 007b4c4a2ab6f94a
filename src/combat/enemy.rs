//! The adversary's combat actor.

use crate::elements::Element;
use crate::enemies::EnemyDefinition;

use super::actor::{CombatActor, DrawOutcome};

#[derive(Debug)]
pub struct EnemyActor {
    id: String,
    display_name: String,
    hp: u32,
    max_hp: u32,
    block: u32,
    element: Element,
}

impl EnemyActor {
    /// Create the adversary for one combat from its definition.
    #[must_use]
    pub fn new(definition: &EnemyDefinition) -> Self {
        let max_hp = definition.max_hp.max(1);
        Self {
            id: definition.id.clone(),
            display_name: definition.name.clone(),
            hp: max_hp,
            max_hp,
            block: definition.base_block,
            element: definition.element,
        }
    }

    #[must_use]
    pub fn element(&self) -> Element {
        self.element
    }
}

impl CombatActor for EnemyActor {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    fn block(&self) -> u32 {
        self.block
    }

    fn take_damage(&mut self, amount: u32) {
        if amount == 0 || self.hp == 0 {
            return;
        }

        let absorbed = self.block.min(amount);
        self.block -= absorbed;
        self.hp = self.hp.saturating_sub(amount - absorbed);
    }

    fn gain_block(&mut self, amount: u32) {
        self.block += amount;
    }

    fn lose_block(&mut self, amount: u32) {
        self.block = self.block.saturating_sub(amount);
    }

    fn draw_cards(&mut self, _amount: u32) -> DrawOutcome {
        // Basic adversaries have no piles; reserved for future mechanics.
        DrawOutcome::default()
    }
}
