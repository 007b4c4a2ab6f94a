//! Elemental type system.
//!
//! Six named elements plus a `None` tag, with an asymmetric attacker/defender
//! effectiveness matrix. Each element has exactly two strong matchups, two
//! weak matchups, and one neutral non-self matchup among the other five.
//!
//! The multiplier applies only to player-sourced damage against the
//! adversary; the combat engine enforces that rule, this module just answers
//! the pure matchup and arithmetic questions.

use serde::{Deserialize, Serialize};

/// Elemental tag carried by cards and adversaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    #[default]
    None,
    Rojo,
    Amarillo,
    Azul,
    Morado,
    Negro,
    Blanco,
}

/// Outcome of attacking with one element against another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effectiveness {
    LessEffective,
    Neutral,
    SuperEffective,
}

impl Effectiveness {
    /// Damage multiplier for this tier.
    #[must_use]
    pub fn multiplier(self) -> f32 {
        match self {
            Effectiveness::SuperEffective => 1.5,
            Effectiveness::Neutral => 1.0,
            Effectiveness::LessEffective => 0.75,
        }
    }
}

/// Look up the attacker/defender matchup.
///
/// Identical elements, or either side being `None`, is always `Neutral`.
#[must_use]
pub fn effectiveness(attacker: Element, defender: Element) -> Effectiveness {
    use Effectiveness::{LessEffective, Neutral, SuperEffective};
    use Element::{Amarillo, Azul, Blanco, Morado, Negro, Rojo};

    if attacker == defender || attacker == Element::None || defender == Element::None {
        return Neutral;
    }

    match (attacker, defender) {
        (Rojo, Azul) | (Rojo, Blanco) => SuperEffective,
        (Rojo, Amarillo) | (Rojo, Negro) => LessEffective,

        (Amarillo, Rojo) | (Amarillo, Morado) => SuperEffective,
        (Amarillo, Azul) | (Amarillo, Blanco) => LessEffective,

        (Azul, Amarillo) | (Azul, Negro) => SuperEffective,
        (Azul, Rojo) | (Azul, Morado) => LessEffective,

        (Morado, Amarillo) | (Morado, Negro) => SuperEffective,
        (Morado, Azul) | (Morado, Blanco) => LessEffective,

        (Negro, Azul) | (Negro, Blanco) => SuperEffective,
        (Negro, Rojo) | (Negro, Morado) => LessEffective,

        (Blanco, Rojo) | (Blanco, Morado) => SuperEffective,
        (Blanco, Amarillo) | (Blanco, Negro) => LessEffective,

        _ => Neutral,
    }
}

/// Apply an effectiveness multiplier to a base damage amount.
///
/// Rounds half away from zero, matching the authored damage tables.
#[must_use]
pub fn adjusted_damage(base: u32, tier: Effectiveness) -> u32 {
    if base == 0 {
        return 0;
    }

    (base as f32 * tier.multiplier()).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Element; 7] = [
        Element::None,
        Element::Rojo,
        Element::Amarillo,
        Element::Azul,
        Element::Morado,
        Element::Negro,
        Element::Blanco,
    ];

    const NAMED: [Element; 6] = [
        Element::Rojo,
        Element::Amarillo,
        Element::Azul,
        Element::Morado,
        Element::Negro,
        Element::Blanco,
    ];

    #[test]
    fn test_same_element_is_neutral() {
        for e in ALL {
            assert_eq!(effectiveness(e, e), Effectiveness::Neutral);
        }
    }

    #[test]
    fn test_none_is_always_neutral() {
        for e in ALL {
            assert_eq!(effectiveness(Element::None, e), Effectiveness::Neutral);
            assert_eq!(effectiveness(e, Element::None), Effectiveness::Neutral);
        }
    }

    #[test]
    fn test_each_element_has_two_strong_two_weak_one_neutral() {
        for attacker in NAMED {
            let mut strong = 0;
            let mut weak = 0;
            let mut neutral = 0;

            for defender in NAMED {
                if attacker == defender {
                    continue;
                }
                match effectiveness(attacker, defender) {
                    Effectiveness::SuperEffective => strong += 1,
                    Effectiveness::LessEffective => weak += 1,
                    Effectiveness::Neutral => neutral += 1,
                }
            }

            assert_eq!(strong, 2, "{attacker:?} strong matchups");
            assert_eq!(weak, 2, "{attacker:?} weak matchups");
            assert_eq!(neutral, 1, "{attacker:?} neutral matchups");
        }
    }

    #[test]
    fn test_known_matchups() {
        assert_eq!(
            effectiveness(Element::Rojo, Element::Azul),
            Effectiveness::SuperEffective
        );
        assert_eq!(
            effectiveness(Element::Azul, Element::Rojo),
            Effectiveness::LessEffective
        );
        assert_eq!(
            effectiveness(Element::Rojo, Element::Morado),
            Effectiveness::Neutral
        );
        assert_eq!(
            effectiveness(Element::Blanco, Element::Morado),
            Effectiveness::SuperEffective
        );
    }

    #[test]
    fn test_adjusted_damage_rounding() {
        // 10 * 1.5 = 15
        assert_eq!(adjusted_damage(10, Effectiveness::SuperEffective), 15);
        // 10 * 0.75 = 7.5, rounds half away from zero to 8
        assert_eq!(adjusted_damage(10, Effectiveness::LessEffective), 8);
        // 2 * 0.75 = 1.5 -> 2
        assert_eq!(adjusted_damage(2, Effectiveness::LessEffective), 2);
        // 1 * 1.5 = 1.5 -> 2
        assert_eq!(adjusted_damage(1, Effectiveness::SuperEffective), 2);
        assert_eq!(adjusted_damage(7, Effectiveness::Neutral), 7);
        assert_eq!(adjusted_damage(0, Effectiveness::SuperEffective), 0);
    }
}
