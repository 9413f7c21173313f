//! Move execution - fan a move out to its targets

use super::MoveTemplate;
use crate::combat::{apply_incoming_damage, apply_true_damage, heal, CombatOutcome};
use crate::config::CombatConstants;
use crate::damage::roll_outgoing_damage;
use crate::encounter::{CombatEvent, CombatLog, EncounterError};
use crate::roster::Roster;
use crate::types::{EffectKind, MoveCategory, TargetMode, UnitId};
use crate::unit::Unit;
use rand::Rng;

/// Resolves moves against a roster
#[derive(Debug, Clone, Default)]
pub struct MoveExecutor {
    constants: CombatConstants,
}

impl MoveExecutor {
    pub fn new(constants: CombatConstants) -> Self {
        MoveExecutor { constants }
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Use the move in `slot` of `user`'s move list
    ///
    /// The move goes on cooldown before anything else happens, whatever it
    /// ends up doing. A call rejected for bad input (unknown unit or slot, or
    /// a Singular/Adjacent move without a target) is not a use and leaves
    /// the cooldown alone. Self-targeted moves return `None`; every other
    /// mode returns one outcome per affected unit, in target order.
    pub fn execute(
        &self,
        roster: &mut Roster,
        log: &mut CombatLog,
        user: UnitId,
        slot: usize,
        target: Option<UnitId>,
        rng: &mut impl Rng,
    ) -> Result<Option<Vec<CombatOutcome>>, EncounterError> {
        let unit = roster.unit_mut(user).ok_or(EncounterError::UnknownUnit(user))?;
        let combat_move = unit.moves.get_mut(slot).ok_or(EncounterError::UnknownMove(slot))?;

        let template = combat_move.template.clone();
        if template.targets.needs_target() && target.is_none() {
            return Err(EncounterError::MissingTarget);
        }
        combat_move.put_on_cooldown();

        log.push(CombatEvent::MoveUsed {
            user: unit.name.clone(),
            move_name: template.name.clone(),
        });

        let targets = match (template.targets, target) {
            (TargetMode::Caster, _) => {
                self.execute_on_self(unit, &template, log);
                return Ok(None);
            }
            (TargetMode::Singular, Some(target)) => vec![target],
            (TargetMode::Adjacent, Some(target)) => roster.target_and_adjacent(target),
            (TargetMode::Global, _) => roster.active_opponents(user),
            (_, None) => return Err(EncounterError::MissingTarget),
        };

        let outcomes = targets
            .into_iter()
            .map(|target| self.execute_on_target(roster, log, &template, user, target, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(outcomes))
    }

    /// Apply a self-targeted move
    pub fn execute_on_self(&self, unit: &mut Unit, template: &MoveTemplate, log: &mut CombatLog) {
        match template.category {
            MoveCategory::Heal if template.effect == EffectKind::Renew => {
                apply_effect(unit, template, log);
            }
            MoveCategory::Heal => {
                let amount = heal(unit, f64::from(template.power));
                log.push(CombatEvent::Healed {
                    unit: unit.name.clone(),
                    amount,
                });
            }
            MoveCategory::Block => {
                unit.current_physical_block = f64::from(template.power);
                apply_effect(unit, template, log);
            }
            MoveCategory::Mitigate => {
                let fraction = f64::from(template.power) / 100.0;
                match template.effect {
                    EffectKind::PhysMitigation => unit.current_physical_mitigation = fraction,
                    EffectKind::MagicMitigation => unit.current_magical_mitigation = fraction,
                    EffectKind::AllMitigation => {
                        unit.current_physical_mitigation = fraction;
                        unit.current_magical_mitigation = fraction;
                    }
                    other => {
                        tracing::warn!(effect = %other, move_id = %template.id, "mitigate move without mitigation effect");
                    }
                }
                apply_effect(unit, template, log);
            }
            MoveCategory::Buff => apply_effect(unit, template, log),
            other => {
                tracing::warn!(category = %other, move_id = %template.id, "move cannot target its user");
            }
        }
    }

    /// Apply a move to one target
    ///
    /// Debuffs land their effect and report no damage. Suffer moves deal
    /// their power as true damage. Everything else rolls and resolves damage.
    pub fn execute_on_target(
        &self,
        roster: &mut Roster,
        log: &mut CombatLog,
        template: &MoveTemplate,
        attacker: UnitId,
        target: UnitId,
        rng: &mut impl Rng,
    ) -> Result<CombatOutcome, EncounterError> {
        let attacker_unit = roster.unit(attacker).ok_or(EncounterError::UnknownUnit(attacker))?;
        let attacker_name = attacker_unit.name.clone();
        let outgoing = match template.category {
            MoveCategory::Debuff | MoveCategory::Suffer => None,
            _ => Some(roll_outgoing_damage(template, attacker_unit, rng)),
        };

        let target_unit = roster.unit_mut(target).ok_or(EncounterError::UnknownUnit(target))?;

        let outcome = match (template.category, outgoing) {
            (MoveCategory::Debuff, _) => {
                apply_effect(target_unit, template, log);
                return Ok(CombatOutcome::no_damage(target));
            }
            (MoveCategory::Suffer, _) => apply_true_damage(target_unit, f64::from(template.power)),
            (category, Some(outgoing)) => {
                let mut outcome = apply_incoming_damage(
                    target_unit,
                    outgoing.amount,
                    category,
                    &self.constants,
                    rng,
                );
                outcome.critical = outgoing.is_critical && !outcome.dodged;
                outcome
            }
            (_, None) => CombatOutcome::no_damage(target),
        };

        log.push(CombatEvent::DamageDealt {
            attacker: attacker_name,
            target: target_unit.name.clone(),
            move_name: template.name.clone(),
            damage: outcome.damage,
            critical: outcome.critical,
            dodged: outcome.dodged,
        });
        Ok(outcome)
    }
}

fn apply_effect(unit: &mut Unit, template: &MoveTemplate, log: &mut CombatLog) {
    let effect = unit.effects.apply(template);
    log.push(CombatEvent::EffectApplied {
        unit: unit.name.clone(),
        effect,
    });
}
