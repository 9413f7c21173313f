//! Damage resolution - applying hits and heals to a unit's HP

use super::result::CombatOutcome;
use crate::config::CombatConstants;
use crate::defense::{run_magical_pipeline, run_physical_pipeline};
use crate::types::{round_half_even, MoveCategory};
use crate::unit::Unit;
use rand::Rng;

/// Apply incoming damage of a category to a target
///
/// The reported damage is exactly the HP removed. HP may go below zero; death
/// is reported when it reaches zero or less. Non-damaging categories are a
/// logged no-op.
pub fn apply_incoming_damage(
    target: &mut Unit,
    raw: f64,
    category: MoveCategory,
    constants: &CombatConstants,
    rng: &mut impl Rng,
) -> CombatOutcome {
    let breakdown = match category {
        MoveCategory::Physical => run_physical_pipeline(target, raw, constants, rng),
        MoveCategory::Magical => run_magical_pipeline(target, raw, constants),
        MoveCategory::Suffer => return apply_true_damage(target, raw),
        other => {
            tracing::warn!(category = %other, unit = %target.name, "attempted to damage with wrong category");
            return CombatOutcome::no_damage(target.id());
        }
    };

    if breakdown.dodged {
        return CombatOutcome::dodged(target.id());
    }

    target.current_hp -= f64::from(breakdown.final_damage);
    tracing::debug!(
        unit = %target.name,
        raw,
        damage = breakdown.final_damage,
        hp = target.current_hp,
        "damage taken"
    );

    CombatOutcome {
        target: target.id(),
        is_dead: target.current_hp <= 0.0,
        damage: breakdown.final_damage,
        dodged: false,
        critical: false,
    }
}

/// Apply true damage with no reductions
pub fn apply_true_damage(target: &mut Unit, raw: f64) -> CombatOutcome {
    let damage = round_half_even(raw.max(0.0)) as u32;
    target.current_hp -= f64::from(damage);

    CombatOutcome {
        target: target.id(),
        is_dead: target.current_hp <= 0.0,
        damage,
        dodged: false,
        critical: false,
    }
}

/// Heal a target, capped at max HP
///
/// The result is only rounded when the cap is not reached. Returns the HP
/// actually gained.
pub fn heal(target: &mut Unit, amount: f64) -> f64 {
    let before = target.current_hp;
    if before + amount > target.current_max_hp {
        target.current_hp = target.current_max_hp;
    } else {
        target.current_hp = round_half_even(before + amount);
    }
    target.current_hp - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{BaseStats, StatRatios, UnitTemplate};
    use crate::types::UnitKind;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn unit(hp: f64, defense: f64, dodge: f64) -> Unit {
        let base = BaseStats {
            max_hp: hp,
            physical_defense: defense,
            magical_defense: defense,
            dodge_chance: dodge,
            speed: 1.0,
            ..Default::default()
        };
        Unit::from_template(
            &UnitTemplate::new("target", UnitKind::Enemy, base).with_ratios(StatRatios::none()),
            1,
        )
    }

    #[test]
    fn test_physical_hit() {
        let mut target = unit(50.0, 3.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let outcome = apply_incoming_damage(
            &mut target,
            15.0,
            MoveCategory::Physical,
            &CombatConstants::default(),
            &mut rng,
        );
        assert_eq!(outcome.damage, 12);
        assert!((target.current_hp - 38.0).abs() < f64::EPSILON);
        assert!(!outcome.is_dead);
    }

    #[test]
    fn test_lethal_hit_goes_negative() {
        let mut target = unit(5.0, 0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let outcome = apply_incoming_damage(
            &mut target,
            9.0,
            MoveCategory::Physical,
            &CombatConstants::default(),
            &mut rng,
        );
        assert!(outcome.is_dead);
        assert!((target.current_hp + 4.0).abs() < f64::EPSILON);
        assert_eq!(target.displayed_hp(), 0);
    }

    #[test]
    fn test_true_damage_skips_defense() {
        let mut target = unit(20.0, 50.0, 1.0);
        let outcome = apply_true_damage(&mut target, 6.0);
        assert_eq!(outcome.damage, 6);
        assert!((target.current_hp - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wrong_category_is_noop() {
        let mut target = unit(20.0, 0.0, 0.0);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let outcome = apply_incoming_damage(
            &mut target,
            99.0,
            MoveCategory::Heal,
            &CombatConstants::default(),
            &mut rng,
        );
        assert_eq!(outcome.damage, 0);
        assert!((target.current_hp - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_heal_rounding_asymmetry() {
        let mut target = unit(20.0, 0.0, 0.0).with_current_hp(10.0);
        let gained = heal(&mut target, 2.6);
        assert!((target.current_hp - 13.0).abs() < f64::EPSILON);
        assert!((gained - 3.0).abs() < f64::EPSILON);

        let mut capped = unit(20.0, 0.0, 0.0).with_current_hp(19.5);
        heal(&mut capped, 5.0);
        assert!((capped.current_hp - 20.0).abs() < f64::EPSILON);
    }

    proptest! {
        #[test]
        fn prop_damage_non_negative_and_matches_hp_delta(
            raw in -50.0f64..500.0,
            defense in -5.0f64..40.0,
            dodge in 0.0f64..1.0,
            physical in any::<bool>(),
            seed in any::<u64>(),
        ) {
            let mut target = unit(1000.0, defense, dodge);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let category = if physical { MoveCategory::Physical } else { MoveCategory::Magical };
            let before = target.current_hp;

            let outcome = apply_incoming_damage(
                &mut target, raw, category, &CombatConstants::default(), &mut rng,
            );

            prop_assert!((before - target.current_hp - f64::from(outcome.damage)).abs() < 1e-9);
            prop_assert_eq!(outcome.is_dead, target.current_hp <= 0.0);
        }

        #[test]
        fn prop_dodge_means_no_damage(raw in 0.0f64..10_000.0, seed in any::<u64>()) {
            let mut target = unit(100.0, 0.0, 1.0);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let outcome = apply_incoming_damage(
                &mut target, raw, MoveCategory::Physical, &CombatConstants::default(), &mut rng,
            );
            prop_assert!(outcome.dodged);
            prop_assert_eq!(outcome.damage, 0);
            prop_assert!(!outcome.is_dead);
        }

        #[test]
        fn prop_heal_never_exceeds_max(hp in -20.0f64..100.0, amount in 0.0f64..200.0) {
            let mut target = unit(100.0, 0.0, 0.0).with_current_hp(hp);
            heal(&mut target, amount);
            prop_assert!(target.current_hp <= target.current_max_hp);
        }
    }
}
