//! The shared actor capability.
//!
//! Player and adversary behave polymorphically behind this narrow interface;
//! queued actions only ever see a `&mut dyn CombatActor`.

/// Result of a batch draw request.
///
/// `hand_limit` is set at most once per batch, when drawing stopped because
/// the hand was full. Actors without a hand return the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawOutcome {
    /// Cards actually added to the hand.
    pub drawn: u32,
    /// Hand size cap that stopped the batch, if it did.
    pub hand_limit: Option<usize>,
}

/// Anything that can be targeted by queued gameplay actions.
pub trait CombatActor {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    fn hp(&self) -> u32;
    fn max_hp(&self) -> u32;
    fn block(&self) -> u32;

    /// Apply damage: block absorbs first, the remainder hits HP.
    ///
    /// Both block and HP floor at zero. Damage against an actor already at
    /// zero HP is ignored.
    fn take_damage(&mut self, amount: u32);

    fn gain_block(&mut self, amount: u32);

    fn lose_block(&mut self, amount: u32);

    /// Draw up to `amount` cards. A no-op for actors without piles.
    fn draw_cards(&mut self, amount: u32) -> DrawOutcome;
}
