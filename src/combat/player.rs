//! The player's combat actor.
//!
//! Owns HP, block, energy, and the three piles (draw, hand, discard) over
//! `DeckEntry`s. The engine drives the flow (drawing, playing, discarding);
//! this type enforces the pile and resource invariants.

use crate::cards::{DeckEntry, EntryId};
use crate::core::GameRng;

use super::actor::{CombatActor, DrawOutcome};

#[derive(Debug)]
pub struct PlayerActor {
    id: String,
    display_name: String,
    hp: u32,
    max_hp: u32,
    block: u32,
    energy: u32,
    max_energy: u32,
    draw_pile: Vec<DeckEntry>,
    discard_pile: Vec<DeckEntry>,
    hand: Vec<DeckEntry>,
    max_hand_size: usize,
    rng: GameRng,
}

impl PlayerActor {
    /// Create the player for one combat and shuffle the starting deck.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        max_hp: u32,
        base_energy: u32,
        starting_deck: Vec<DeckEntry>,
        max_hand_size: usize,
        rng: GameRng,
    ) -> Self {
        let max_hp = max_hp.max(1);
        let mut actor = Self {
            id: id.into(),
            display_name: display_name.into(),
            hp: max_hp,
            max_hp,
            block: 0,
            energy: base_energy,
            max_energy: base_energy,
            draw_pile: starting_deck,
            discard_pile: Vec::new(),
            hand: Vec::new(),
            max_hand_size: max_hand_size.max(1),
            rng,
        };
        let mut pile = std::mem::take(&mut actor.draw_pile);
        actor.rng.shuffle(&mut pile);
        actor.draw_pile = pile;
        actor
    }

    // === Energy ===

    pub fn reset_energy(&mut self) {
        self.energy = self.max_energy;
    }

    #[must_use]
    pub fn can_pay(&self, cost: u32) -> bool {
        self.energy >= cost
    }

    /// Spend energy; declines (returns false) without mutation if short.
    pub fn spend_energy(&mut self, amount: u32) -> bool {
        if !self.can_pay(amount) {
            return false;
        }
        self.energy -= amount;
        true
    }

    /// Gain energy, capped at the maximum.
    pub fn gain_energy(&mut self, amount: u32) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }

    #[must_use]
    pub fn energy(&self) -> u32 {
        self.energy
    }

    #[must_use]
    pub fn max_energy(&self) -> u32 {
        self.max_energy
    }

    // === Piles ===

    #[must_use]
    pub fn hand(&self) -> &[DeckEntry] {
        &self.hand
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    #[must_use]
    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }

    #[must_use]
    pub fn is_card_in_hand(&self, id: EntryId) -> bool {
        self.hand.iter().any(|entry| entry.id() == id)
    }

    /// Remove a card from the hand, handing ownership to the caller.
    ///
    /// The entry belongs to no pile until discarded, which is what keeps a
    /// card from ever appearing in two piles at once.
    pub fn remove_card_from_hand(&mut self, id: EntryId) -> Option<DeckEntry> {
        let position = self.hand.iter().position(|entry| entry.id() == id)?;
        Some(self.hand.remove(position))
    }

    /// Place an entry on the discard pile.
    pub fn discard_entry(&mut self, entry: DeckEntry) {
        self.discard_pile.push(entry);
    }

    /// Move the entire hand to the discard pile.
    pub fn discard_hand(&mut self) {
        self.discard_pile.append(&mut self.hand);
    }

    /// Shuffle the discard pile back into the draw pile.
    pub fn shuffle_discard_into_draw(&mut self) {
        if self.discard_pile.is_empty() {
            return;
        }
        self.draw_pile.append(&mut self.discard_pile);
        let mut pile = std::mem::take(&mut self.draw_pile);
        self.rng.shuffle(&mut pile);
        self.draw_pile = pile;
    }

    /// Draw one card from the tail of the draw pile, reshuffling the discard
    /// in first if the draw pile is empty.
    fn draw_single(&mut self) -> Option<DeckEntry> {
        if self.draw_pile.is_empty() {
            self.shuffle_discard_into_draw();
        }
        self.draw_pile.pop()
    }
}

impl CombatActor for PlayerActor {
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

    fn draw_cards(&mut self, amount: u32) -> DrawOutcome {
        let mut outcome = DrawOutcome::default();

        for _ in 0..amount {
            if self.hand.len() >= self.max_hand_size {
                // One notification per batch, not per card.
                outcome.hand_limit = Some(self.max_hand_size);
                break;
            }

            match self.draw_single() {
                Some(entry) => {
                    self.hand.push(entry);
                    outcome.drawn += 1;
                }
                None => break,
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, DeckCard};

    fn deck(count: u32) -> Vec<DeckEntry> {
        (0..count)
            .map(|i| {
                DeckEntry::new(
                    EntryId::new(i),
                    DeckCard::Single(CardDefinition::new(format!("card-{i}"), "Card", 1)),
                )
            })
            .collect()
    }

    fn player(deck_size: u32, max_hand: usize) -> PlayerActor {
        PlayerActor::new("player", "Pilot", 60, 3, deck(deck_size), max_hand, GameRng::new(42))
    }

    #[test]
    fn test_damage_absorbed_by_block_first() {
        let mut p = player(5, 10);
        p.gain_block(4);

        p.take_damage(6);

        assert_eq!(p.block(), 0);
        assert_eq!(p.hp(), 58);
    }

    #[test]
    fn test_damage_fully_blocked_leaves_hp_untouched() {
        let mut p = player(5, 10);
        p.gain_block(10);

        p.take_damage(6);

        assert_eq!(p.block(), 4);
        assert_eq!(p.hp(), 60);
    }

    #[test]
    fn test_hp_floors_at_zero() {
        let mut p = player(5, 10);

        p.take_damage(1000);
        assert_eq!(p.hp(), 0);

        // Further damage against a downed actor is ignored.
        p.take_damage(10);
        assert_eq!(p.hp(), 0);
    }

    #[test]
    fn test_lose_block_floors_at_zero() {
        let mut p = player(5, 10);
        p.gain_block(3);
        p.lose_block(10);
        assert_eq!(p.block(), 0);
    }

    #[test]
    fn test_energy_spend_and_decline() {
        let mut p = player(5, 10);

        assert!(p.spend_energy(2));
        assert_eq!(p.energy(), 1);

        assert!(!p.spend_energy(2));
        assert_eq!(p.energy(), 1);

        p.reset_energy();
        assert_eq!(p.energy(), 3);
    }

    #[test]
    fn test_gain_energy_caps_at_max() {
        let mut p = player(5, 10);
        p.spend_energy(1);
        p.gain_energy(5);
        assert_eq!(p.energy(), 3);
    }

    #[test]
    fn test_draw_moves_cards_to_hand() {
        let mut p = player(5, 10);

        let outcome = p.draw_cards(3);

        assert_eq!(outcome.drawn, 3);
        assert_eq!(outcome.hand_limit, None);
        assert_eq!(p.hand_count(), 3);
        assert_eq!(p.draw_pile_count(), 2);
    }

    #[test]
    fn test_draw_reshuffles_discard_when_draw_pile_empty() {
        let mut p = player(3, 10);
        p.draw_cards(3);
        p.discard_hand();

        assert_eq!(p.draw_pile_count(), 0);
        assert_eq!(p.discard_pile_count(), 3);

        let outcome = p.draw_cards(2);

        assert_eq!(outcome.drawn, 2);
        assert_eq!(p.discard_pile_count(), 0);
        assert_eq!(p.hand_count(), 2);
        assert_eq!(p.draw_pile_count(), 1);
    }

    #[test]
    fn test_draw_stops_silently_when_everything_is_empty() {
        let mut p = player(2, 10);

        let outcome = p.draw_cards(5);

        assert_eq!(outcome.drawn, 2);
        assert_eq!(outcome.hand_limit, None);
        assert_eq!(p.hand_count(), 2);
    }

    #[test]
    fn test_hand_limit_reported_once_per_batch() {
        let mut p = player(8, 3);

        let outcome = p.draw_cards(6);

        assert_eq!(outcome.drawn, 3);
        assert_eq!(outcome.hand_limit, Some(3));
        assert_eq!(p.hand_count(), 3);
        assert_eq!(p.draw_pile_count(), 5);
    }

    #[test]
    fn test_removed_card_is_in_no_pile() {
        let mut p = player(3, 10);
        p.draw_cards(3);
        let id = p.hand()[0].id();

        let entry = p.remove_card_from_hand(id).unwrap();

        assert!(!p.is_card_in_hand(id));
        assert_eq!(p.hand_count() + p.draw_pile_count() + p.discard_pile_count(), 2);

        p.discard_entry(entry);
        assert_eq!(p.discard_pile_count(), 1);
    }

    #[test]
    fn test_remove_missing_card_returns_none() {
        let mut p = player(3, 10);
        assert!(p.remove_card_from_hand(EntryId::new(99)).is_none());
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut p1 = PlayerActor::new("p", "P", 60, 3, deck(10), 10, GameRng::new(7));
        let mut p2 = PlayerActor::new("p", "P", 60, 3, deck(10), 10, GameRng::new(7));

        p1.draw_cards(5);
        p2.draw_cards(5);

        let ids1: Vec<_> = p1.hand().iter().map(DeckEntry::id).collect();
        let ids2: Vec<_> = p2.hand().iter().map(DeckEntry::id).collect();
        assert_eq!(ids1, ids2);
    }
}
