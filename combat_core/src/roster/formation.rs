//! Formation - Five fixed enemy slots

use crate::types::UnitId;
use serde::{Deserialize, Serialize};

/// Number of enemy slots
pub const FORMATION_SLOTS: usize = 5;

/// Enemy slot, listed top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationSlot {
    Top,
    FrontTop,
    Center,
    FrontBottom,
    Bottom,
}

impl FormationSlot {
    pub const ALL: [FormationSlot; FORMATION_SLOTS] = [
        FormationSlot::Top,
        FormationSlot::FrontTop,
        FormationSlot::Center,
        FormationSlot::FrontBottom,
        FormationSlot::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<FormationSlot> {
        FormationSlot::ALL.get(index).copied()
    }

    /// Slots used when spawning a given number of enemies
    pub fn spawn_pattern(count: usize) -> &'static [FormationSlot] {
        use FormationSlot::*;
        match count {
            0 => &[],
            1 => &[Center],
            2 => &[FrontTop, FrontBottom],
            3 => &[Top, Center, Bottom],
            4 => &[Top, FrontTop, FrontBottom, Bottom],
            _ => &FormationSlot::ALL,
        }
    }
}

/// Which unit stands in each enemy slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formation {
    slots: [Option<UnitId>; FORMATION_SLOTS],
}

impl Formation {
    /// Place enemies using the spawn pattern for their count
    ///
    /// Callers must pass at most five units; extras are ignored.
    pub fn place(enemies: &[UnitId]) -> Self {
        let mut formation = Formation::default();
        for (slot, unit) in FormationSlot::spawn_pattern(enemies.len()).iter().zip(enemies) {
            formation.slots[slot.index()] = Some(*unit);
        }
        formation
    }

    pub fn get(&self, slot: FormationSlot) -> Option<UnitId> {
        self.slots[slot.index()]
    }

    pub fn slot_of(&self, unit: UnitId) -> Option<FormationSlot> {
        self.slots
            .iter()
            .position(|s| *s == Some(unit))
            .and_then(FormationSlot::from_index)
    }

    /// Units in slot order
    pub fn occupants(&self) -> impl Iterator<Item = (FormationSlot, UnitId)> + '_ {
        FormationSlot::ALL
            .iter()
            .filter_map(move |slot| self.get(*slot).map(|unit| (*slot, unit)))
    }

    pub fn clear(&mut self, unit: UnitId) -> Option<FormationSlot> {
        let slot = self.slot_of(unit)?;
        self.slots[slot.index()] = None;
        Some(slot)
    }

    /// The target's single neighbour for adjacent moves
    ///
    /// Slots above the center look down, the rest look up. The scan covers
    /// the next two slots in that direction and stops at the first occupant
    /// accepted by `is_active`.
    pub fn neighbour(
        &self,
        target: UnitId,
        is_active: impl Fn(UnitId) -> bool,
    ) -> Option<UnitId> {
        let index = self.slot_of(target)?.index();
        let candidates: [Option<usize>; 2] = if index < 3 {
            [Some(index + 1), Some(index + 2)]
        } else {
            [index.checked_sub(1), index.checked_sub(2)]
        };

        candidates
            .into_iter()
            .flatten()
            .filter_map(|i| self.slots.get(i).copied().flatten())
            .find(|unit| is_active(*unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<UnitId> {
        (1..=n).map(UnitId).collect()
    }

    #[test]
    fn test_spawn_patterns() {
        let one = Formation::place(&ids(1));
        assert_eq!(one.get(FormationSlot::Center), Some(UnitId(1)));

        let two = Formation::place(&ids(2));
        assert_eq!(two.get(FormationSlot::FrontTop), Some(UnitId(1)));
        assert_eq!(two.get(FormationSlot::FrontBottom), Some(UnitId(2)));

        let three = Formation::place(&ids(3));
        assert_eq!(
            three.occupants().map(|(s, _)| s).collect::<Vec<_>>(),
            vec![FormationSlot::Top, FormationSlot::Center, FormationSlot::Bottom]
        );

        let four = Formation::place(&ids(4));
        assert_eq!(four.get(FormationSlot::Center), None);

        let five = Formation::place(&ids(5));
        assert_eq!(five.occupants().count(), 5);
    }

    #[test]
    fn test_neighbour_looks_down_from_top() {
        let formation = Formation::place(&ids(5));
        assert_eq!(formation.neighbour(UnitId(1), |_| true), Some(UnitId(2)));
        assert_eq!(formation.neighbour(UnitId(3), |_| true), Some(UnitId(4)));
    }

    #[test]
    fn test_neighbour_looks_up_from_bottom() {
        let formation = Formation::place(&ids(5));
        assert_eq!(formation.neighbour(UnitId(5), |_| true), Some(UnitId(4)));
        assert_eq!(formation.neighbour(UnitId(4), |_| true), Some(UnitId(3)));
    }

    #[test]
    fn test_neighbour_skips_empty_slot() {
        // top, center, bottom
        let formation = Formation::place(&ids(3));
        assert_eq!(formation.neighbour(UnitId(1), |_| true), Some(UnitId(2)));
        assert_eq!(formation.neighbour(UnitId(3), |_| true), Some(UnitId(2)));
    }

    #[test]
    fn test_neighbour_skips_inactive() {
        let formation = Formation::place(&ids(5));
        assert_eq!(
            formation.neighbour(UnitId(1), |u| u != UnitId(2)),
            Some(UnitId(3))
        );
        assert_eq!(formation.neighbour(UnitId(1), |u| u == UnitId(1)), None);
    }

    #[test]
    fn test_clear() {
        let mut formation = Formation::place(&ids(2));
        assert_eq!(formation.clear(UnitId(1)), Some(FormationSlot::FrontTop));
        assert_eq!(formation.slot_of(UnitId(1)), None);
        assert_eq!(formation.occupants().count(), 1);
    }
}
