//! The turn/phase state machine.
//!
//! `CombatEngine` orchestrates one combat: phase transitions, energy and
//! block resets, draws, card legality, the momentum economy, world-switch
//! rationing, and end-of-combat detection. Every public command runs to
//! completion synchronously; invalid requests decline with no mutation.
//!
//! ## Two-phase card play
//!
//! `prepare_card_play` validates the request, pays the cost (momentum before
//! energy), removes the card from hand, and enqueues its effects. The caller
//! gets back an immutable [`PreparedPlay`] token and resolves it whenever it
//! likes — typically after a presentation-layer animation —
//! via `resolve_prepared_play`, which drains the queue, discards the card,
//! and checks end conditions. The split never changes the outcome.

use tracing::{debug, warn};

use crate::cards::{CardDefinition, DeckCard, DeckEntry, EntryId, WorldSide};
use crate::core::GameRng;
use crate::effects::{EffectKind, EffectSpec, EffectTarget};
use crate::elements::{adjusted_damage, effectiveness, Effectiveness, Element};
use crate::enemies::{EnemyDefinition, IntentKind, MoveSelector};
use crate::error::ConfigError;

use super::actor::CombatActor;
use super::config::CombatConfig;
use super::enemy::EnemyActor;
use super::events::CombatEvent;
use super::player::PlayerActor;
use super::queue::{ActionContext, ActionQueue, ActorRole, GameAction};

/// Combat phase. `Victory` and `Defeat` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    None,
    PlayerTurn,
    EnemyTurn,
    Victory,
    Defeat,
}

/// A validated, cost-already-paid card play awaiting resolution.
///
/// Created by [`CombatEngine::prepare_card_play`]; consumed by
/// [`CombatEngine::resolve_prepared_play`]. Holding the token is what keeps
/// the card out of every pile between the two calls.
#[derive(Debug)]
pub struct PreparedPlay {
    entry: DeckEntry,
    card: CardDefinition,
    is_attack: bool,
    used_free_play: bool,
}

impl PreparedPlay {
    #[must_use]
    pub fn entry_id(&self) -> EntryId {
        self.entry.id()
    }

    /// The face that was active when the play was prepared.
    #[must_use]
    pub fn card(&self) -> &CardDefinition {
        &self.card
    }

    #[must_use]
    pub fn is_attack(&self) -> bool {
        self.is_attack
    }

    /// Whether the cost was covered by a momentum charge instead of energy.
    #[must_use]
    pub fn used_free_play(&self) -> bool {
        self.used_free_play
    }
}

/// Builder for a combat instance (deck snapshot + adversary definition).
///
/// ```
/// use dualdeck::cards::{CardDefinition, DeckCard};
/// use dualdeck::combat::CombatBuilder;
/// use dualdeck::effects::EffectSpec;
/// use dualdeck::enemies::{EnemyDefinition, EnemyMove, IntentKind};
///
/// let deck = vec![DeckCard::Single(
///     CardDefinition::new("strike", "Strike", 1).with_effect(EffectSpec::damage(6)),
/// )];
/// let slime = EnemyDefinition::new("slime", "Slime", 20).with_move(
///     EnemyMove::new("tackle", "Tackle")
///         .with_intent(IntentKind::Attack)
///         .with_effect(EffectSpec::damage(5)),
/// );
///
/// let engine = CombatBuilder::new(deck, slime).seed(42).build().unwrap();
/// assert_eq!(engine.player_hp(), 60);
/// ```
pub struct CombatBuilder {
    deck: Vec<DeckCard>,
    enemy: EnemyDefinition,
    config: CombatConfig,
    seed: u64,
    player_hp_override: Option<u32>,
    player_max_hp_override: Option<u32>,
}

impl CombatBuilder {
    #[must_use]
    pub fn new(deck: Vec<DeckCard>, enemy: EnemyDefinition) -> Self {
        Self {
            deck,
            enemy,
            config: CombatConfig::default(),
            seed: 0,
            player_hp_override: None,
            player_max_hp_override: None,
        }
    }

    #[must_use]
    pub fn config(mut self, config: CombatConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Carry the player's current HP in from the run layer.
    #[must_use]
    pub fn player_hp(mut self, hp: u32) -> Self {
        self.player_hp_override = Some(hp);
        self
    }

    /// Carry the player's max HP in from the run layer.
    #[must_use]
    pub fn player_max_hp(mut self, hp: u32) -> Self {
        self.player_max_hp_override = Some(hp);
        self
    }

    /// Build and initialize the combat: actors created, first adversary move
    /// planned, player turn begun with the starting hand drawn.
    pub fn build(self) -> Result<CombatEngine, ConfigError> {
        if self.deck.is_empty() {
            return Err(ConfigError::EmptyDeck);
        }

        let max_hp = self
            .player_max_hp_override
            .map(|hp| hp.max(1))
            .unwrap_or(self.config.player_max_hp);

        let entries: Vec<DeckEntry> = self
            .deck
            .into_iter()
            .enumerate()
            .map(|(index, card)| DeckEntry::new(EntryId::new(index as u32), card))
            .collect();

        let rng = GameRng::new(self.seed);
        let mut player = PlayerActor::new(
            "player",
            self.config.player_name.clone(),
            max_hp,
            self.config.energy_per_turn,
            entries,
            self.config.max_hand_size,
            rng.for_context("shuffle"),
        );

        if let Some(desired) = self.player_hp_override {
            // Carried-over HP is applied as direct damage so no other
            // mechanic is touched.
            let desired = desired.clamp(1, player.max_hp());
            let damage = player.max_hp() - desired;
            if damage > 0 {
                player.take_damage(damage);
            }
        }

        let enemy = EnemyActor::new(&self.enemy);

        let mut engine = CombatEngine {
            config: self.config,
            enemy_def: self.enemy,
            player,
            enemy,
            queue: ActionQueue::new(),
            phase: Phase::None,
            selector: MoveSelector::new(),
            move_rng: rng.for_context("enemy-moves"),
            planned_move: None,
            world_side: WorldSide::A,
            world_switches_used: 0,
            momentum: 0,
            events: Vec::new(),
        };

        engine.plan_next_enemy_move();
        engine.begin_player_turn(true);
        Ok(engine)
    }
}

/// One combat instance: two actors, one queue, one phase machine.
#[derive(Debug)]
pub struct CombatEngine {
    config: CombatConfig,
    enemy_def: EnemyDefinition,
    player: PlayerActor,
    enemy: EnemyActor,
    queue: ActionQueue,
    phase: Phase,
    selector: MoveSelector,
    move_rng: GameRng,
    planned_move: Option<usize>,
    world_side: WorldSide,
    world_switches_used: u32,
    momentum: u32,
    events: Vec<CombatEvent>,
}

impl CombatEngine {
    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Victory | Phase::Defeat)
    }

    #[must_use]
    pub fn is_player_turn(&self) -> bool {
        self.phase == Phase::PlayerTurn
    }

    #[must_use]
    pub fn player_hp(&self) -> u32 {
        self.player.hp()
    }

    #[must_use]
    pub fn player_max_hp(&self) -> u32 {
        self.player.max_hp()
    }

    #[must_use]
    pub fn player_block(&self) -> u32 {
        self.player.block()
    }

    #[must_use]
    pub fn player_energy(&self) -> u32 {
        self.player.energy()
    }

    #[must_use]
    pub fn player_max_energy(&self) -> u32 {
        self.player.max_energy()
    }

    #[must_use]
    pub fn draw_pile_count(&self) -> usize {
        self.player.draw_pile_count()
    }

    #[must_use]
    pub fn discard_pile_count(&self) -> usize {
        self.player.discard_pile_count()
    }

    #[must_use]
    pub fn hand_count(&self) -> usize {
        self.player.hand_count()
    }

    /// The current hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &[DeckEntry] {
        self.player.hand()
    }

    #[must_use]
    pub fn enemy_hp(&self) -> u32 {
        self.enemy.hp()
    }

    #[must_use]
    pub fn enemy_max_hp(&self) -> u32 {
        self.enemy.max_hp()
    }

    #[must_use]
    pub fn enemy_block(&self) -> u32 {
        self.enemy.block()
    }

    #[must_use]
    pub fn enemy_element(&self) -> Element {
        self.enemy.element()
    }

    #[must_use]
    pub fn world_side(&self) -> WorldSide {
        self.world_side
    }

    #[must_use]
    pub fn world_switches_used(&self) -> u32 {
        self.world_switches_used
    }

    #[must_use]
    pub fn max_world_switches(&self) -> u32 {
        self.config.max_world_switches
    }

    #[must_use]
    pub fn unlimited_world_switches(&self) -> bool {
        self.config.unlimited_world_switches
    }

    /// Banked momentum charges (free plays).
    #[must_use]
    pub fn momentum(&self) -> u32 {
        self.momentum
    }

    /// Intent classification of the adversary's planned move.
    #[must_use]
    pub fn planned_intent(&self) -> IntentKind {
        self.planned_move
            .and_then(|index| self.enemy_def.moves.get(index))
            .map(|mv| mv.intent)
            .unwrap_or(IntentKind::Unknown)
    }

    /// Aggregated magnitude of the planned move's intent-matching effects.
    #[must_use]
    pub fn planned_intent_value(&self) -> u32 {
        self.planned_move
            .and_then(|index| self.enemy_def.moves.get(index))
            .map(|mv| mv.intent_value())
            .unwrap_or(0)
    }

    /// The face a held entry presents under the current world side.
    #[must_use]
    pub fn active_card(&self, id: EntryId) -> Option<&CardDefinition> {
        self.player
            .hand()
            .iter()
            .find(|entry| entry.id() == id)
            .map(|entry| entry.active_card(self.world_side))
    }

    /// Whether a card play would currently be accepted.
    #[must_use]
    pub fn can_play_card(&self, id: EntryId) -> bool {
        if self.phase != Phase::PlayerTurn {
            return false;
        }
        match self.active_card(id) {
            Some(card) => self.momentum > 0 || self.player.can_pay(card.cost),
            None => false,
        }
    }

    /// Drain buffered notifications for the presentation layer.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Validate and pay for a card play, removing the card from hand and
    /// enqueueing its effects. Declines with `None` (and no mutation) on
    /// wrong phase, card not in hand, or insufficient resources.
    pub fn prepare_card_play(&mut self, id: EntryId) -> Option<PreparedPlay> {
        if self.phase != Phase::PlayerTurn {
            debug!(?id, phase = ?self.phase, "card play declined: not the player's turn");
            return None;
        }

        if !self.player.is_card_in_hand(id) {
            warn!(%id, "card play declined: card not in hand");
            return None;
        }

        let Some(card) = self.active_card(id).cloned() else {
            warn!(%id, "card play declined: no resolvable active card");
            return None;
        };

        let mut used_free_play = false;
        if self.momentum > 0 {
            self.momentum -= 1;
            used_free_play = true;
        } else if !self.player.spend_energy(card.cost) {
            warn!(%id, cost = card.cost, energy = self.player.energy(),
                "card play declined: not enough energy");
            return None;
        }

        let Some(entry) = self.player.remove_card_from_hand(id) else {
            return None;
        };

        let effects = card.effects.clone();
        self.queue_effects(&effects, ActorRole::Player, card.element);

        Some(PreparedPlay {
            entry,
            is_attack: card.is_attack(),
            used_free_play,
            card,
        })
    }

    /// Drain the actions enqueued for a prepared play, discard the card,
    /// and check end conditions.
    pub fn resolve_prepared_play(&mut self, prepared: PreparedPlay) {
        self.process_queue();
        self.player.discard_entry(prepared.entry);
        self.check_end_conditions();
    }

    /// Convenience: prepare and resolve in one call.
    pub fn play_card(&mut self, id: EntryId) -> bool {
        match self.prepare_card_play(id) {
            Some(prepared) => {
                self.resolve_prepared_play(prepared);
                true
            }
            None => false,
        }
    }

    /// Discard the hand and hand the turn to the adversary. The enemy turn
    /// executes synchronously; unless the combat ends, control returns to
    /// the player with a fresh draw.
    pub fn end_player_turn(&mut self) {
        if self.phase != Phase::PlayerTurn {
            return;
        }

        self.player.discard_hand();
        self.phase = Phase::EnemyTurn;
        self.execute_enemy_turn();
    }

    /// Toggle the world side, changing which face every dual card presents.
    ///
    /// Rationed per combat; returns false (no state change) once the ration
    /// is spent. The unlimited override bypasses both the cap and the
    /// usage counter.
    pub fn try_change_world(&mut self) -> bool {
        let unlimited = self.config.unlimited_world_switches;
        if !unlimited && self.world_switches_used >= self.config.max_world_switches {
            warn!(
                used = self.world_switches_used,
                max = self.config.max_world_switches,
                "world switch declined: ration exhausted"
            );
            return false;
        }

        self.world_side = self.world_side.flipped();
        if !unlimited {
            self.world_switches_used += 1;
        }

        debug!(side = ?self.world_side, "world switched");
        true
    }

    // === Internals ===

    fn begin_player_turn(&mut self, starting_hand: bool) {
        if self.is_finished() {
            return;
        }

        self.phase = Phase::PlayerTurn;
        self.player.reset_energy();
        let block = self.player.block();
        self.player.lose_block(block);

        let cards_to_draw = if starting_hand {
            self.config.starting_hand_size
        } else {
            self.config.cards_per_turn
        };

        if cards_to_draw > 0 {
            let outcome = self.player.draw_cards(cards_to_draw);
            if let Some(limit) = outcome.hand_limit {
                self.events.push(CombatEvent::HandLimitReached { limit });
            }
        }
    }

    fn execute_enemy_turn(&mut self) {
        if self.is_finished() {
            return;
        }

        let block = self.enemy.block();
        self.enemy.lose_block(block);

        let move_index = self
            .planned_move
            .take()
            .or_else(|| self.selector.select(&self.enemy_def, &mut self.move_rng));

        if let Some(index) = move_index {
            if let Some(mv) = self.enemy_def.moves.get(index) {
                let effects = mv.effects.clone();
                let element = self.enemy_def.element;
                self.queue_effects(&effects, ActorRole::Enemy, element);
                self.process_queue();
            }
        }

        self.check_end_conditions();

        if !self.is_finished() {
            self.plan_next_enemy_move();
            self.begin_player_turn(false);
        }
    }

    fn plan_next_enemy_move(&mut self) {
        self.planned_move = self.selector.select(&self.enemy_def, &mut self.move_rng);
    }

    /// Convert effect descriptors into queued actions against resolved
    /// targets, applying elemental adjustment for player attacks.
    fn queue_effects(&mut self, effects: &[EffectSpec], source: ActorRole, element: Element) {
        for effect in effects {
            for target in resolve_targets(effect.target, source) {
                if let Some(action) = self.create_action(effect, source, target, element) {
                    self.queue.enqueue(action);
                }
            }
        }
    }

    fn create_action(
        &mut self,
        effect: &EffectSpec,
        source: ActorRole,
        target: ActorRole,
        element: Element,
    ) -> Option<GameAction> {
        match effect.kind {
            EffectKind::Damage => {
                let amount = self.adjust_damage(source, target, element, effect.magnitude);
                Some(GameAction::Damage { source, target, amount })
            }
            EffectKind::Block => Some(GameAction::Block { target, amount: effect.magnitude }),
            EffectKind::DrawCards => Some(GameAction::Draw { target, amount: effect.magnitude }),
            kind => {
                warn!(?kind, "effect kind has no queue action yet; skipped");
                None
            }
        }
    }

    /// Apply the elemental matchup to a damage amount.
    ///
    /// Only player-sourced damage against the adversary is adjusted. A
    /// super-effective hit with positive final damage banks exactly one
    /// momentum charge; every adjusted hit raises an effectiveness event.
    fn adjust_damage(
        &mut self,
        source: ActorRole,
        target: ActorRole,
        element: Element,
        base: u32,
    ) -> u32 {
        if base == 0 {
            return 0;
        }

        if source != ActorRole::Player || target != ActorRole::Enemy {
            return base;
        }

        let tier = effectiveness(element, self.enemy_def.element);
        let amount = adjusted_damage(base, tier);

        let momentum_granted = tier == Effectiveness::SuperEffective && amount > 0;
        if momentum_granted {
            self.momentum += 1;
            debug!(momentum = self.momentum, "momentum banked");
        }

        self.events.push(CombatEvent::HitEffectiveness { tier, momentum_granted });
        amount
    }

    fn process_queue(&mut self) {
        let mut ctx = ActionContext::new(&mut self.player, &mut self.enemy, &mut self.events);
        self.queue.process_all(&mut ctx);
    }

    /// Run after every queue drain. Victory wins ties: once the adversary is
    /// down, the player's HP is not consulted.
    fn check_end_conditions(&mut self) {
        if self.enemy.hp() == 0 {
            self.phase = Phase::Victory;
            debug!("combat ended: victory");
            return;
        }

        if self.player.hp() == 0 {
            self.phase = Phase::Defeat;
            debug!("combat ended: defeat");
        }
    }
}

fn resolve_targets(target: EffectTarget, source: ActorRole) -> Vec<ActorRole> {
    match target {
        EffectTarget::Slf => vec![source],
        // With exactly two actors, "all opponents" is the single opponent.
        EffectTarget::SingleOpponent | EffectTarget::AllOpponents => vec![source.opponent()],
    }
}
