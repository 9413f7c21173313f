//! Scripted encounter runs

use combat_core::prelude::*;
use combat_core::encounter::CombatLog;
use rand::Rng;
use serde::Serialize;

/// Player stand-in that always takes the first usable option
///
/// Action classes are tried in order, then moves in list order, and the
/// first active opponent is targeted. With nothing usable the turn is passed.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoPlayer;

impl AutoPlayer {
    /// Take one player action
    pub fn act<R: Rng>(&self, encounter: &mut Encounter<R>) -> Result<(), EncounterError> {
        for class in ActionClass::all() {
            if encounter.used_actions().contains(class) {
                continue;
            }
            let slots: Vec<usize> = encounter
                .available_moves(*class)
                .into_iter()
                .filter(|(_, m)| !m.is_on_cooldown())
                .map(|(slot, _)| slot)
                .collect();

            for slot in slots {
                encounter.select_action(*class)?;
                match encounter.select_move(slot) {
                    Ok(TargetingRequirement::TargetRequired) => {
                        encounter.select_target(0)?;
                        return Ok(());
                    }
                    Ok(TargetingRequirement::Resolved { .. }) => return Ok(()),
                    Err(err) => {
                        tracing::debug!(%err, slot, "move rejected");
                        encounter.cancel()?;
                    }
                }
            }
        }
        encounter.skip_remaining_actions()?;
        Ok(())
    }
}

/// Summary of one simulated encounter
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub seed: u64,
    pub final_state: EncounterState,
    pub result: Option<EncounterResult>,
    pub player_actions: u32,
    pub player_hp: u32,
    pub events: Vec<CombatEvent>,
}

impl SimulationReport {
    /// Rendered log lines
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(|e| e.to_string()).collect()
    }
}

/// Drive an encounter until it ends or the action limit is reached
pub fn run_encounter<R: Rng>(
    encounter: &mut Encounter<R>,
    player: &AutoPlayer,
    seed: u64,
    max_actions: u32,
) -> Result<SimulationReport, EncounterError> {
    let mut log = CombatLog::new();
    let mut player_actions = 0;

    encounter.advance()?;
    for event in encounter.drain_events() {
        log.push(event);
    }

    while !encounter.state().is_terminal() && player_actions < max_actions {
        player.act(encounter)?;
        player_actions += 1;
        for event in encounter.drain_events() {
            log.push(event);
        }
    }

    if !encounter.state().is_terminal() {
        tracing::warn!(max_actions, "encounter stopped at the action limit");
    }

    Ok(SimulationReport {
        seed,
        final_state: encounter.state(),
        result: encounter.result().copied(),
        player_actions,
        player_hp: encounter.player().displayed_hp(),
        events: log.drain(),
    })
}
