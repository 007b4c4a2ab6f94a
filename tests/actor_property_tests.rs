//! Property tests for the damage and block arithmetic shared by both actors.

use proptest::prelude::*;

use dualdeck::{CombatActor, Element, EnemyActor, EnemyDefinition, EnemyMove};

fn actor(max_hp: u32, block: u32) -> EnemyActor {
    let definition = EnemyDefinition::new("target", "Target", max_hp)
        .with_base_block(block)
        .with_element(Element::None)
        .with_move(EnemyMove::new("wait", "Wait"));
    EnemyActor::new(&definition)
}

proptest! {
    #[test]
    fn prop_block_absorbs_before_hp(max_hp in 1u32..10_000, block in 0u32..10_000, damage in 0u32..20_000) {
        let mut target = actor(max_hp, block);
        let hp_before = target.hp();

        target.take_damage(damage);

        let absorbed = block.min(damage);
        prop_assert_eq!(target.block(), block - absorbed);
        prop_assert_eq!(target.hp(), hp_before.saturating_sub(damage - absorbed));
    }

    #[test]
    fn prop_hp_and_block_never_underflow(max_hp in 1u32..1_000, block in 0u32..1_000, hits in proptest::collection::vec(0u32..5_000, 0..20)) {
        let mut target = actor(max_hp, block);

        for damage in hits {
            target.take_damage(damage);
            prop_assert!(target.hp() <= target.max_hp());
            prop_assert!(target.block() <= block);
        }
    }

    #[test]
    fn prop_zero_damage_is_a_no_op(max_hp in 1u32..10_000, block in 0u32..10_000) {
        let mut target = actor(max_hp, block);

        target.take_damage(0);

        prop_assert_eq!(target.hp(), max_hp);
        prop_assert_eq!(target.block(), block);
    }

    #[test]
    fn prop_downed_actor_ignores_further_damage(max_hp in 1u32..1_000, damage in 0u32..5_000) {
        let mut target = actor(max_hp, 0);
        target.take_damage(u32::MAX);
        prop_assert_eq!(target.hp(), 0);

        let block_after_down = target.block();
        target.take_damage(damage);

        prop_assert_eq!(target.hp(), 0);
        prop_assert_eq!(target.block(), block_after_down);
    }

    #[test]
    fn prop_lose_block_floors_at_zero(block in 0u32..10_000, loss in 0u32..20_000) {
        let mut target = actor(50, block);

        target.lose_block(loss);

        prop_assert_eq!(target.block(), block.saturating_sub(loss));
    }

    #[test]
    fn prop_split_damage_never_beats_one_hit(max_hp in 1u32..10_000, block in 0u32..5_000, first in 0u32..5_000, second in 0u32..5_000) {
        // Leftover block carries between hits, so splitting a hit can never
        // leave the victim with more HP than taking it in one lump.
        let mut lump = actor(max_hp, block);
        lump.take_damage(first + second);

        let mut split = actor(max_hp, block);
        split.take_damage(first);
        split.take_damage(second);

        prop_assert!(split.hp() <= lump.hp());
    }
}
