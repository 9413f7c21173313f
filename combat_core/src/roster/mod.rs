//! Roster - The units of one encounter and where they stand

mod formation;

pub use formation::{Formation, FormationSlot, FORMATION_SLOTS};

use crate::encounter::EncounterError;
use crate::types::UnitId;
use crate::unit::Unit;

/// Owns every unit for the lifetime of an encounter
///
/// Units are never dropped from the arena; removal only takes them out of
/// the active set, so ids stay valid for logs and results.
#[derive(Debug, Clone)]
pub struct Roster {
    units: Vec<Unit>,
    active: Vec<bool>,
    player: UnitId,
    formation: Formation,
}

impl Roster {
    /// Take ownership of a player and up to five enemies
    ///
    /// Ids are reassigned in the order given. Enemies fill the formation in
    /// that order using the spawn pattern for their count.
    pub fn new(mut units: Vec<Unit>) -> Result<Self, EncounterError> {
        for (index, unit) in units.iter_mut().enumerate() {
            unit.id = UnitId(index);
        }

        let players: Vec<UnitId> = units.iter().filter(|u| u.is_player()).map(|u| u.id).collect();
        let player = match players.as_slice() {
            [] => return Err(EncounterError::MissingPlayer),
            [player] => *player,
            many => return Err(EncounterError::MultiplePlayers(many.len())),
        };

        let enemies: Vec<UnitId> = units.iter().filter(|u| !u.is_player()).map(|u| u.id).collect();
        if enemies.len() > FORMATION_SLOTS {
            return Err(EncounterError::TooManyEnemies(enemies.len()));
        }

        Ok(Roster {
            active: vec![true; units.len()],
            units,
            player,
            formation: Formation::place(&enemies),
        })
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.get_mut(id.0)
    }

    pub fn player_id(&self) -> UnitId {
        self.player
    }

    pub fn player(&self) -> &Unit {
        &self.units[self.player.0]
    }

    pub fn player_mut(&mut self) -> &mut Unit {
        &mut self.units[self.player.0]
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    /// Every unit, including removed ones
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn is_active(&self, id: UnitId) -> bool {
        self.active.get(id.0).copied().unwrap_or(false)
    }

    /// Active enemies in formation order
    pub fn active_enemies(&self) -> Vec<UnitId> {
        self.formation
            .occupants()
            .map(|(_, id)| id)
            .filter(|id| self.is_active(*id))
            .collect()
    }

    /// Active units on the other side from `unit`
    pub fn active_opponents(&self, unit: UnitId) -> Vec<UnitId> {
        if unit == self.player {
            self.active_enemies()
        } else if self.is_active(self.player) {
            vec![self.player]
        } else {
            Vec::new()
        }
    }

    /// Target first, then its active neighbour if there is one
    pub fn target_and_adjacent(&self, target: UnitId) -> Vec<UnitId> {
        let mut targets = vec![target];
        if let Some(neighbour) = self.formation.neighbour(target, |id| self.is_active(id)) {
            targets.push(neighbour);
        }
        targets
    }

    /// Take a unit out of the active set, returning whether it was active
    pub fn remove(&mut self, id: UnitId) -> bool {
        match self.active.get_mut(id.0) {
            Some(active) if *active => {
                *active = false;
                self.formation.clear(id);
                true
            }
            _ => false,
        }
    }

    pub fn into_units(self) -> Vec<Unit> {
        self.units
    }
}
