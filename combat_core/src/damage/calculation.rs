//! Damage calculation - turning a move + attacker stats into raw damage

use crate::defense::roll_percent;
use crate::moves::MoveTemplate;
use crate::types::MoveCategory;
use crate::unit::Unit;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Raw damage leaving the attacker, before any defenses
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingDamage {
    pub amount: f64,
    pub is_critical: bool,
}

/// Roll damage for a move used by an attacker
///
/// Physical adds current attack power, magical adds current ability power,
/// and a crit multiplies the sum by the attacker's crit multiplier. Suffer
/// moves deal their power unmodified. Any other category deals nothing.
pub fn roll_outgoing_damage(
    template: &MoveTemplate,
    attacker: &Unit,
    rng: &mut impl Rng,
) -> OutgoingDamage {
    let power = f64::from(template.power);

    let (base, crit_chance) = match template.category {
        MoveCategory::Physical => (
            power + attacker.current_attack_power(),
            attacker.current_physical_crit_chance,
        ),
        MoveCategory::Magical => (
            power + attacker.current_ability_power(),
            attacker.current_magical_crit_chance,
        ),
        MoveCategory::Suffer => {
            return OutgoingDamage {
                amount: power,
                is_critical: false,
            }
        }
        other => {
            tracing::warn!(
                category = %other,
                move_id = %template.id,
                "attempted to roll damage for a non-damaging move"
            );
            return OutgoingDamage::default();
        }
    };

    let is_critical = roll_percent(crit_chance, rng);
    let amount = if is_critical {
        base * attacker.crit_multiplier
    } else {
        base
    };

    OutgoingDamage {
        amount,
        is_critical,
    }
}
