//! Encounter - the outer combat state machine
//!
//! An [`Encounter`] owns the roster, the initiative scheduler and the move
//! executor for one fight. The caller feeds player input through
//! [`Encounter::select_action`], [`Encounter::select_move`] and
//! [`Encounter::select_target`]; enemy turns run automatically until the
//! player is asked for input again or the fight ends.

mod enemy;
mod error;
mod log;
mod result;

pub use enemy::EnemyController;
pub use error::EncounterError;
pub use log::{CombatEvent, CombatLog};
pub use result::EncounterResult;

use crate::combat::CombatOutcome;
use crate::config::CombatConstants;
use crate::effect::{process_turn_boundary, TurnBoundaryReport};
use crate::moves::{CombatMove, MoveExecutor};
use crate::roster::Roster;
use crate::turn::InitiativeScheduler;
use crate::types::{ActionClass, EffectKind, UnitId};
use crate::unit::Unit;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Where the encounter is in its turn cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterState {
    Start,
    PlayerActionSelect,
    PlayerSkillSelect,
    PlayerTargetSelect,
    EnemyTurn,
    Victory,
    Defeat,
}

impl EncounterState {
    pub fn is_terminal(self) -> bool {
        matches!(self, EncounterState::Victory | EncounterState::Defeat)
    }

    pub fn awaits_player_input(self) -> bool {
        matches!(
            self,
            EncounterState::PlayerActionSelect
                | EncounterState::PlayerSkillSelect
                | EncounterState::PlayerTargetSelect
        )
    }
}

/// Result of choosing a move
#[derive(Debug, Clone, PartialEq)]
pub enum TargetingRequirement {
    /// Call [`Encounter::select_target`] next
    TargetRequired,
    /// The move already ran; self-targeted moves report no outcomes
    Resolved { outcomes: Vec<CombatOutcome> },
}

/// One fight between the player and a group of enemies
pub struct Encounter<R: Rng = ChaCha8Rng> {
    roster: Roster,
    scheduler: InitiativeScheduler,
    executor: MoveExecutor,
    enemy_controller: EnemyController,
    state: EncounterState,
    remaining_actions: u32,
    used_actions: Vec<ActionClass>,
    selected_action: Option<ActionClass>,
    selected_move: Option<usize>,
    current_actor: Option<UnitId>,
    player_turns: u32,
    log: CombatLog,
    result: Option<EncounterResult>,
    rng: R,
}

impl Encounter<ChaCha8Rng> {
    /// Start an encounter with a seeded ChaCha RNG
    pub fn with_seed(
        units: Vec<Unit>,
        enemy_controller: EnemyController,
        constants: CombatConstants,
        seed: u64,
    ) -> Result<Self, EncounterError> {
        Encounter::initialize(
            units,
            enemy_controller,
            constants,
            ChaCha8Rng::seed_from_u64(seed),
        )
    }
}

impl<R: Rng> Encounter<R> {
    /// Take ownership of the units and seed the scheduler
    ///
    /// Exactly one player and at most five enemies are accepted, and every
    /// unit needs a positive speed. Turn order is seeded in the order the
    /// units are given. The encounter starts in [`EncounterState::Start`];
    /// call [`Encounter::advance`] to run it up to the first player input.
    pub fn initialize(
        units: Vec<Unit>,
        enemy_controller: EnemyController,
        constants: CombatConstants,
        rng: R,
    ) -> Result<Self, EncounterError> {
        let roster = Roster::new(units)?;
        let participants: Vec<(UnitId, f64)> = roster
            .units()
            .iter()
            .map(|u| (u.id(), u.current_speed))
            .collect();
        let scheduler = InitiativeScheduler::new(&participants)?;

        let mut log = CombatLog::new();
        log.push(CombatEvent::EncounterStarted {
            player: roster.player().name.clone(),
            enemies: roster
                .active_enemies()
                .iter()
                .filter_map(|id| roster.unit(*id))
                .map(|u| u.name.clone())
                .collect(),
        });
        tracing::debug!(
            units = participants.len(),
            fastest = scheduler.fastest_speed(),
            "encounter initialized"
        );

        Ok(Encounter {
            roster,
            scheduler,
            executor: MoveExecutor::new(constants),
            enemy_controller,
            state: EncounterState::Start,
            remaining_actions: 0,
            used_actions: Vec::new(),
            selected_action: None,
            selected_move: None,
            current_actor: None,
            player_turns: 0,
            log,
            result: None,
            rng,
        })
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn player(&self) -> &Unit {
        self.roster.player()
    }

    pub fn scheduler(&self) -> &InitiativeScheduler {
        &self.scheduler
    }

    pub fn constants(&self) -> &CombatConstants {
        self.executor.constants()
    }

    pub fn remaining_actions(&self) -> u32 {
        self.remaining_actions
    }

    /// Action classes already spent this player turn
    pub fn used_actions(&self) -> &[ActionClass] {
        &self.used_actions
    }

    /// Unit whose turn it is, if a turn has started
    pub fn current_actor(&self) -> Option<UnitId> {
        self.current_actor
    }

    pub fn result(&self) -> Option<&EncounterResult> {
        self.result.as_ref()
    }

    pub fn events(&self) -> &[CombatEvent] {
        self.log.events()
    }

    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.log.drain()
    }

    /// Enemies the player can target, in formation order
    pub fn active_opponents(&self) -> Vec<&Unit> {
        self.roster
            .active_opponents(self.roster.player_id())
            .into_iter()
            .filter_map(|id| self.roster.unit(id))
            .collect()
    }

    /// Player moves of an action class, with their slot in the move list
    pub fn available_moves(&self, action: ActionClass) -> Vec<(usize, &CombatMove)> {
        self.roster
            .player()
            .moves
            .iter()
            .enumerate()
            .filter(|(_, m)| m.template.action == action)
            .collect()
    }

    /// Run one transition
    ///
    /// From `Start` this pulls the first turn. From `EnemyTurn` the acting
    /// enemy uses its move and the next turn is pulled. States waiting on the
    /// player, and terminal states, are returned unchanged.
    pub fn step(&mut self) -> Result<EncounterState, EncounterError> {
        match self.state {
            EncounterState::Start => self.transition(),
            EncounterState::EnemyTurn => {
                self.run_enemy_turn()?;
                self.transition();
            }
            _ => {}
        }
        Ok(self.state)
    }

    /// Step until the player must act or the encounter is over
    pub fn advance(&mut self) -> Result<EncounterState, EncounterError> {
        while !self.state.is_terminal() && !self.state.awaits_player_input() {
            self.step()?;
        }
        Ok(self.state)
    }

    /// Choose an action class for the next player action
    pub fn select_action(&mut self, action: ActionClass) -> Result<(), EncounterError> {
        self.expect_state(EncounterState::PlayerActionSelect)?;
        if self.used_actions.contains(&action) {
            return Err(EncounterError::ActionAlreadyUsed(action));
        }
        self.selected_action = Some(action);
        self.state = EncounterState::PlayerSkillSelect;
        Ok(())
    }

    /// Choose a move by its slot in the player's move list
    ///
    /// Moves that need a target wait for [`Encounter::select_target`]; all
    /// others run immediately.
    pub fn select_move(&mut self, slot: usize) -> Result<TargetingRequirement, EncounterError> {
        self.expect_state(EncounterState::PlayerSkillSelect)?;

        let player = self.roster.player();
        let combat_move = player.moves.get(slot).ok_or(EncounterError::UnknownMove(slot))?;
        let template = &combat_move.template;

        if let Some(expected) = self.selected_action {
            if template.action != expected {
                return Err(EncounterError::WrongActionClass {
                    name: template.name.clone(),
                    expected,
                    actual: template.action,
                });
            }
        }

        if player.is_silenced() {
            let unit = player.name.clone();
            self.log.push(CombatEvent::SilenceBlocked { unit: unit.clone() });
            return Err(EncounterError::Silenced(unit));
        }

        if combat_move.is_on_cooldown() {
            let move_name = template.name.clone();
            self.log.push(CombatEvent::CooldownBlocked {
                move_name: move_name.clone(),
                remaining: combat_move.cooldown.remaining(),
            });
            return Err(EncounterError::MoveOnCooldown(move_name));
        }

        if template.targets.needs_target() {
            self.selected_move = Some(slot);
            self.state = EncounterState::PlayerTargetSelect;
            return Ok(TargetingRequirement::TargetRequired);
        }

        let outcomes = self.perform_player_move(slot, None)?;
        Ok(TargetingRequirement::Resolved { outcomes })
    }

    /// Resolve the pending move against an entry of [`Encounter::active_opponents`]
    pub fn select_target(&mut self, index: usize) -> Result<Vec<CombatOutcome>, EncounterError> {
        self.expect_state(EncounterState::PlayerTargetSelect)?;
        let slot = self.selected_move.ok_or(EncounterError::InvalidState {
            expected: EncounterState::PlayerSkillSelect,
            actual: self.state,
        })?;

        let target = self
            .roster
            .active_opponents(self.roster.player_id())
            .get(index)
            .copied()
            .ok_or(EncounterError::InvalidTarget(index))?;

        self.perform_player_move(slot, Some(target))
    }

    /// Back out of target or move selection
    pub fn cancel(&mut self) -> Result<EncounterState, EncounterError> {
        match self.state {
            EncounterState::PlayerTargetSelect => {
                self.selected_move = None;
                self.state = EncounterState::PlayerSkillSelect;
            }
            EncounterState::PlayerSkillSelect => {
                self.selected_action = None;
                self.state = EncounterState::PlayerActionSelect;
            }
            actual => {
                return Err(EncounterError::InvalidState {
                    expected: EncounterState::PlayerSkillSelect,
                    actual,
                })
            }
        }
        Ok(self.state)
    }

    /// End the player's turn without using the remaining actions
    pub fn skip_remaining_actions(&mut self) -> Result<EncounterState, EncounterError> {
        self.expect_state(EncounterState::PlayerActionSelect)?;
        self.log.push(CombatEvent::ActionsSkipped {
            remaining: self.remaining_actions,
        });
        self.remaining_actions = 0;
        self.transition();
        self.advance()
    }

    fn expect_state(&self, expected: EncounterState) -> Result<(), EncounterError> {
        if self.state != expected {
            return Err(EncounterError::InvalidState {
                expected,
                actual: self.state,
            });
        }
        Ok(())
    }

    fn perform_player_move(
        &mut self,
        slot: usize,
        target: Option<UnitId>,
    ) -> Result<Vec<CombatOutcome>, EncounterError> {
        let player_id = self.roster.player_id();
        let action = self
            .roster
            .player()
            .moves
            .get(slot)
            .map(|m| m.template.action)
            .ok_or(EncounterError::UnknownMove(slot))?;

        let outcomes = self
            .executor
            .execute(
                &mut self.roster,
                &mut self.log,
                player_id,
                slot,
                target,
                &mut self.rng,
            )?
            .unwrap_or_default();

        self.remaining_actions = self.remaining_actions.saturating_sub(1);
        self.used_actions.push(action);
        self.selected_action = None;
        self.selected_move = None;

        self.end_of_action(player_id, &outcomes);
        self.transition();
        self.advance()?;
        Ok(outcomes)
    }

    /// Turn-end effect tick for the actor, then death checks
    fn end_of_action(&mut self, actor: UnitId, outcomes: &[CombatOutcome]) {
        let mut dead: Vec<UnitId> = outcomes.iter().filter(|o| o.is_dead).map(|o| o.target).collect();
        if let Some(report) = self.tick_unit(actor, false) {
            if report.is_dead() {
                dead.push(actor);
            }
        }
        self.remove_dead(&dead);
    }

    fn tick_unit(&mut self, id: UnitId, start_of_turn: bool) -> Option<TurnBoundaryReport> {
        if !self.roster.is_active(id) {
            return None;
        }
        let unit = self.roster.unit_mut(id)?;
        let report = process_turn_boundary(unit, start_of_turn);
        let name = unit.name.clone();

        for amount in &report.heals {
            self.log.push(CombatEvent::EffectTick {
                unit: name.clone(),
                effect: EffectKind::Renew,
                amount: *amount,
            });
        }
        for outcome in &report.poison {
            self.log.push(CombatEvent::EffectTick {
                unit: name.clone(),
                effect: EffectKind::Poison,
                amount: f64::from(outcome.damage),
            });
        }
        for effect in &report.expired {
            self.log.push(CombatEvent::EffectExpired {
                unit: name.clone(),
                effect: effect.kind,
            });
        }
        Some(report)
    }

    fn remove_dead(&mut self, candidates: &[UnitId]) {
        for id in candidates {
            let dead = self.roster.unit(*id).is_some_and(|u| !u.is_alive());
            if !dead || !self.roster.remove(*id) {
                continue;
            }
            self.scheduler.remove(*id);
            if let Some(unit) = self.roster.unit(*id) {
                tracing::debug!(unit = %unit.name, "unit died");
                self.log.push(CombatEvent::UnitDied {
                    unit: unit.name.clone(),
                });
            }
        }
    }

    fn run_enemy_turn(&mut self) -> Result<(), EncounterError> {
        let Some(enemy_id) = self.current_actor else {
            return Ok(());
        };
        let Some(enemy) = self.roster.unit(enemy_id) else {
            return Err(EncounterError::UnknownUnit(enemy_id));
        };

        if !self.roster.is_active(enemy_id) {
            return Ok(());
        }

        let mut outcomes = Vec::new();
        if enemy.is_silenced() {
            self.log.push(CombatEvent::SilenceBlocked {
                unit: enemy.name.clone(),
            });
        } else {
            let template = self.enemy_controller.choose_move(enemy).clone();
            self.log.push(CombatEvent::MoveUsed {
                user: enemy.name.clone(),
                move_name: template.name.clone(),
            });
            let player_id = self.roster.player_id();
            let outcome = self.executor.execute_on_target(
                &mut self.roster,
                &mut self.log,
                &template,
                enemy_id,
                player_id,
                &mut self.rng,
            )?;
            outcomes.push(outcome);
        }

        self.end_of_action(enemy_id, &outcomes);
        Ok(())
    }

    /// Decide the next state
    fn transition(&mut self) {
        loop {
            if !self.roster.player().is_alive() {
                self.finish_defeat();
                return;
            }

            if self.roster.active_enemies().is_empty() {
                self.finish_victory();
                return;
            }

            if self.remaining_actions > 0 {
                self.log.push(CombatEvent::NextAction {
                    remaining: self.remaining_actions,
                });
                self.state = EncounterState::PlayerActionSelect;
                return;
            }

            let Some(next) = self.scheduler.next_turn() else {
                tracing::warn!("initiative order is empty while the encounter is running");
                self.finish_defeat();
                return;
            };
            self.current_actor = Some(next);

            if next == self.roster.player_id() {
                self.remaining_actions = self.constants().max_player_actions;
                self.used_actions.clear();
                self.roster.player_mut().decrease_cooldowns();
                if let Some(report) = self.tick_unit(next, true) {
                    if report.is_dead() {
                        self.remove_dead(&[next]);
                        continue;
                    }
                }
                self.player_turns += 1;
                self.log.push(CombatEvent::PlayerTurn {
                    round: self.player_turns,
                });
                self.state = EncounterState::PlayerActionSelect;
                return;
            }

            if let Some(report) = self.tick_unit(next, true) {
                if report.is_dead() {
                    self.remove_dead(&[next]);
                    continue;
                }
            }
            if let Some(enemy) = self.roster.unit(next) {
                self.log.push(CombatEvent::EnemyTurn {
                    enemy: enemy.name.clone(),
                });
            }
            self.state = EncounterState::EnemyTurn;
            return;
        }
    }

    fn finish_victory(&mut self) {
        let result = EncounterResult {
            experience_gained: self.constants().victory_experience,
            player_hp: self.roster.player().current_hp,
        };
        tracing::debug!(?result, "victory");
        self.result = Some(result);
        self.log.push(CombatEvent::Victory { result });
        self.state = EncounterState::Victory;
    }

    fn finish_defeat(&mut self) {
        tracing::debug!("defeat");
        self.log.push(CombatEvent::Defeat);
        self.state = EncounterState::Defeat;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveTemplate;
    use crate::stats::{BaseStats, StatRatios, UnitTemplate};
    use crate::types::{MoveCategory, TargetMode, UnitKind};

    fn unit(kind: UnitKind, hp: f64, attack_power: f64, speed: f64) -> Unit {
        let base = BaseStats {
            max_hp: hp,
            attack_power,
            speed,
            ..Default::default()
        };
        Unit::from_template(
            &UnitTemplate::new(if kind.is_player() { "hero" } else { "rat" }, kind, base)
                .with_ratios(StatRatios::none()),
            1,
        )
    }

    fn player_moves() -> Vec<CombatMove> {
        vec![
            CombatMove::new(MoveTemplate::basic("strike", MoveCategory::Physical, 10)),
            CombatMove::new(
                MoveTemplate::basic("wall", MoveCategory::Block, 5)
                    .with_action(ActionClass::Defend)
                    .with_targets(TargetMode::Caster)
                    .with_effect(EffectKind::Block, 1),
            ),
            CombatMove::new(
                MoveTemplate::basic("cry", MoveCategory::Buff, 50)
                    .with_action(ActionClass::Support)
                    .with_targets(TargetMode::Caster)
                    .with_effect(EffectKind::Strengthen, 2)
                    .with_cooldown(3),
            ),
        ]
    }

    fn encounter(enemy_hp: f64) -> Encounter {
        let player = unit(UnitKind::Player, 50.0, 5.0, 10.0).with_moves(player_moves());
        let enemy = unit(UnitKind::Enemy, enemy_hp, 1.0, 5.0);
        let controller = EnemyController::new(MoveTemplate::basic("bite", MoveCategory::Physical, 2));
        Encounter::with_seed(vec![player, enemy], controller, CombatConstants::default(), 3).unwrap()
    }

    #[test]
    fn test_advance_reaches_player_input() {
        let mut enc = encounter(100.0);
        assert_eq!(enc.state(), EncounterState::Start);
        assert_eq!(enc.advance().unwrap(), EncounterState::PlayerActionSelect);
        assert_eq!(enc.remaining_actions(), 2);
        assert_eq!(enc.current_actor(), Some(UnitId(0)));
    }

    #[test]
    fn test_action_class_once_per_turn() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();

        enc.select_action(ActionClass::Defend).unwrap();
        let requirement = enc.select_move(1).unwrap();
        assert_eq!(requirement, TargetingRequirement::Resolved { outcomes: vec![] });

        assert_eq!(enc.state(), EncounterState::PlayerActionSelect);
        assert_eq!(enc.remaining_actions(), 1);
        assert_eq!(
            enc.select_action(ActionClass::Defend),
            Err(EncounterError::ActionAlreadyUsed(ActionClass::Defend))
        );
    }

    #[test]
    fn test_wrong_class_rejected() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();
        enc.select_action(ActionClass::Attack).unwrap();
        assert!(matches!(
            enc.select_move(1),
            Err(EncounterError::WrongActionClass { .. })
        ));
    }

    #[test]
    fn test_cancel_walks_back() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();
        enc.select_action(ActionClass::Attack).unwrap();
        assert_eq!(enc.select_move(0).unwrap(), TargetingRequirement::TargetRequired);

        assert_eq!(enc.cancel().unwrap(), EncounterState::PlayerSkillSelect);
        assert_eq!(enc.cancel().unwrap(), EncounterState::PlayerActionSelect);
        assert!(enc.cancel().is_err());
        // cancelling does not spend the class
        assert!(enc.select_action(ActionClass::Attack).is_ok());
    }

    #[test]
    fn test_cooldown_blocks_and_logs() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();
        enc.select_action(ActionClass::Support).unwrap();
        enc.select_move(2).unwrap();

        // second player turn, cooldown of 3 still running
        enc.skip_remaining_actions().unwrap();
        assert_eq!(enc.state(), EncounterState::PlayerActionSelect);
        enc.select_action(ActionClass::Support).unwrap();
        assert!(matches!(
            enc.select_move(2),
            Err(EncounterError::MoveOnCooldown(_))
        ));
        assert!(enc
            .events()
            .iter()
            .any(|e| matches!(e, CombatEvent::CooldownBlocked { .. })));
    }

    #[test]
    fn test_silence_blocks_move_selection() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();
        enc.roster
            .player_mut()
            .effects
            .apply(&MoveTemplate::basic("hush", MoveCategory::Debuff, 0).with_effect(EffectKind::Silence, 2));

        enc.select_action(ActionClass::Attack).unwrap();
        assert!(matches!(enc.select_move(0), Err(EncounterError::Silenced(_))));
        enc.cancel().unwrap();
        assert!(enc.skip_remaining_actions().is_ok());
    }

    #[test]
    fn test_invalid_target_index() {
        let mut enc = encounter(100.0);
        enc.advance().unwrap();
        enc.select_action(ActionClass::Attack).unwrap();
        enc.select_move(0).unwrap();
        assert_eq!(enc.select_target(4), Err(EncounterError::InvalidTarget(4)));
        assert_eq!(enc.state(), EncounterState::PlayerTargetSelect);
    }

    #[test]
    fn test_killing_last_enemy_is_victory() {
        let mut enc = encounter(10.0);
        enc.advance().unwrap();
        enc.select_action(ActionClass::Attack).unwrap();
        enc.select_move(0).unwrap();

        let outcomes = enc.select_target(0).unwrap();
        assert!(outcomes[0].is_dead);
        assert_eq!(enc.state(), EncounterState::Victory);

        let result = enc.result().unwrap();
        assert_eq!(result.experience_gained, 10);
        assert!((result.player_hp - 50.0).abs() < f64::EPSILON);
        assert!(enc.scheduler().entries().iter().all(|e| e.unit != UnitId(1)));
        assert!(enc
            .events()
            .iter()
            .any(|e| matches!(e, CombatEvent::UnitDied { .. })));
    }

    #[test]
    fn test_player_death_is_defeat() {
        let player = unit(UnitKind::Player, 3.0, 0.0, 1.0).with_moves(player_moves());
        let enemy = unit(UnitKind::Enemy, 100.0, 10.0, 10.0);
        let controller = EnemyController::new(MoveTemplate::basic("bite", MoveCategory::Physical, 5));
        let mut enc =
            Encounter::with_seed(vec![player, enemy], controller, CombatConstants::default(), 1)
                .unwrap();

        assert_eq!(enc.advance().unwrap(), EncounterState::Defeat);
        assert!(enc.result().is_none());
        assert!(matches!(enc.events().last(), Some(CombatEvent::Defeat)));
    }

    fn with_effect(enc: &mut Encounter, id: UnitId, kind: EffectKind, power: i32, at_start: bool) {
        let mut template = MoveTemplate::basic("fx", MoveCategory::Debuff, power).with_effect(kind, 2);
        template.expires_at_start_of_turn = at_start;
        enc.roster.unit_mut(id).unwrap().effects.apply(&template);
    }

    fn fast_enemies(hp: &[f64]) -> Encounter {
        let player = unit(UnitKind::Player, 50.0, 5.0, 5.0).with_moves(player_moves());
        let mut units = vec![player];
        units.extend(hp.iter().map(|hp| unit(UnitKind::Enemy, *hp, 1.0, 10.0)));
        let controller = EnemyController::new(MoveTemplate::basic("bite", MoveCategory::Physical, 2));
        Encounter::with_seed(units, controller, CombatConstants::default(), 4).unwrap()
    }

    fn position(enc: &Encounter, pred: impl Fn(&CombatEvent) -> bool) -> Option<usize> {
        enc.events().iter().position(pred)
    }

    #[test]
    fn test_silenced_enemy_loses_its_turn() {
        let mut enc = fast_enemies(&[100.0]);
        with_effect(&mut enc, UnitId(1), EffectKind::Silence, 0, false);

        // enemy is twice as fast and opens the fight
        assert_eq!(enc.advance().unwrap(), EncounterState::PlayerActionSelect);
        assert!(position(&enc, |e| matches!(e, CombatEvent::SilenceBlocked { .. })).is_some());
        assert!(position(&enc, |e| matches!(e, CombatEvent::MoveUsed { .. })).is_none());
        assert!((enc.player().current_hp - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_poison_kills_enemy_before_it_acts() {
        let mut enc = fast_enemies(&[3.0, 100.0]);
        with_effect(&mut enc, UnitId(1), EffectKind::Poison, 5, true);

        assert_eq!(enc.advance().unwrap(), EncounterState::PlayerActionSelect);
        assert!(!enc.scheduler().contains(UnitId(1)));
        assert!(!enc.roster().is_active(UnitId(1)));
        assert!(enc.scheduler().contains(UnitId(2)));

        // only the healthy enemy took a turn, after the poisoned one died
        let died = position(&enc, |e| matches!(e, CombatEvent::UnitDied { .. })).unwrap();
        let turn = position(&enc, |e| matches!(e, CombatEvent::EnemyTurn { .. })).unwrap();
        assert!(died < turn);
        let enemy_turns = enc
            .events()
            .iter()
            .filter(|e| matches!(e, CombatEvent::EnemyTurn { .. }))
            .count();
        assert_eq!(enemy_turns, 1);
        assert!((enc.player().current_hp - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_poison_at_turn_start_can_win_the_fight() {
        let mut enc = fast_enemies(&[3.0]);
        with_effect(&mut enc, UnitId(1), EffectKind::Poison, 5, true);

        assert_eq!(enc.advance().unwrap(), EncounterState::Victory);
        assert!(position(&enc, |e| matches!(e, CombatEvent::EnemyTurn { .. })).is_none());
        assert!(enc.scheduler().entries().iter().all(|e| e.unit != UnitId(1)));
    }

    #[test]
    fn test_poison_kills_enemy_after_its_move() {
        let mut enc = fast_enemies(&[3.0]);
        with_effect(&mut enc, UnitId(1), EffectKind::Poison, 5, false);

        assert_eq!(enc.advance().unwrap(), EncounterState::Victory);
        let used = position(&enc, |e| matches!(e, CombatEvent::MoveUsed { .. })).unwrap();
        let died = position(&enc, |e| matches!(e, CombatEvent::UnitDied { .. })).unwrap();
        assert!(used < died);
        assert!(!enc.scheduler().contains(UnitId(1)));
        assert!((enc.player().current_hp - 48.0).abs() < f64::EPSILON);
        assert_eq!(enc.result().map(|r| r.experience_gained), Some(10));
    }

    #[test]
    fn test_input_in_wrong_state() {
        let mut enc = encounter(100.0);
        assert!(matches!(
            enc.select_action(ActionClass::Attack),
            Err(EncounterError::InvalidState { .. })
        ));
    }
}
