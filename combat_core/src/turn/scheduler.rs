//! Speed-ratio initiative scheduling

use crate::encounter::EncounterError;
use crate::types::UnitId;
use serde::{Deserialize, Serialize};

/// One participant's place in the initiative order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnEntry {
    pub unit: UnitId,
    /// Fastest speed divided by this unit's speed; lower acts more often
    pub ratio: f64,
    /// Fractional position on the timeline
    pub counter: f64,
}

/// Yields units in initiative order
///
/// Each unit acts whenever its counter is below `round + 1`, lowest counter
/// first. Ties go to the earlier entry. Acting pushes the counter forward by
/// the unit's ratio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitiativeScheduler {
    entries: Vec<TurnEntry>,
    fastest_speed: f64,
    round: u32,
}

impl InitiativeScheduler {
    /// Build entries from `(unit, speed)` pairs in the order given
    ///
    /// The fastest speed is fixed here and not recomputed as units die.
    pub fn new(participants: &[(UnitId, f64)]) -> Result<Self, EncounterError> {
        if let Some((unit, speed)) = participants
            .iter()
            .find(|(_, speed)| !(speed.is_finite() && *speed > 0.0))
        {
            return Err(EncounterError::InvalidSpeed {
                unit: *unit,
                speed: *speed,
            });
        }

        let fastest_speed = participants
            .iter()
            .map(|(_, speed)| *speed)
            .fold(0.0, f64::max);

        let entries = participants
            .iter()
            .map(|(unit, speed)| {
                let ratio = fastest_speed / speed;
                TurnEntry {
                    unit: *unit,
                    ratio,
                    counter: ratio,
                }
            })
            .collect();

        Ok(InitiativeScheduler {
            entries,
            fastest_speed,
            round: 0,
        })
    }

    /// Pick the next unit to act and advance its counter
    pub fn next_turn(&mut self) -> Option<UnitId> {
        if self.entries.is_empty() {
            return None;
        }

        loop {
            let limit = f64::from(self.round) + 1.0;
            let mut best: Option<usize> = None;
            for (index, entry) in self.entries.iter().enumerate() {
                if entry.counter >= limit {
                    continue;
                }
                match best {
                    Some(current) if self.entries[current].counter <= entry.counter => {}
                    _ => best = Some(index),
                }
            }

            if let Some(index) = best {
                let entry = &mut self.entries[index];
                entry.counter += entry.ratio;
                tracing::debug!(unit = %entry.unit, counter = entry.counter, round = self.round, "next turn");
                return Some(entry.unit);
            }

            self.round += 1;
        }
    }

    /// Drop a unit from the order, returning how many entries matched
    pub fn remove(&mut self, unit: UnitId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.unit != unit);
        before - self.entries.len()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn fastest_speed(&self) -> f64 {
        self.fastest_speed
    }

    pub fn entries(&self) -> &[TurnEntry] {
        &self.entries
    }

    pub fn contains(&self, unit: UnitId) -> bool {
        self.entries.iter().any(|e| e.unit == unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(speeds: &[f64]) -> InitiativeScheduler {
        let participants: Vec<_> = speeds
            .iter()
            .enumerate()
            .map(|(i, s)| (UnitId(i), *s))
            .collect();
        InitiativeScheduler::new(&participants).unwrap()
    }

    #[test]
    fn test_ratios() {
        let s = scheduler(&[10.0, 5.0, 2.0]);
        let ratios: Vec<f64> = s.entries().iter().map(|e| e.ratio).collect();
        assert_eq!(ratios, vec![1.0, 2.0, 5.0]);
        assert!((s.fastest_speed() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fastest_acts_first_each_round() {
        let mut s = scheduler(&[10.0, 5.0, 2.0]);
        let mut last_round = None;
        for _ in 0..40 {
            let unit = s.next_turn().unwrap();
            if last_round != Some(s.round()) {
                assert_eq!(unit, UnitId(0), "round {} opened with {}", s.round(), unit);
                last_round = Some(s.round());
            }
        }
    }

    #[test]
    fn test_turn_frequency_follows_ratio() {
        let mut s = scheduler(&[10.0, 5.0, 2.0]);
        let mut counts = [0usize; 3];
        while s.round() < 20 {
            let unit = s.next_turn().unwrap();
            counts[unit.0] += 1;
        }
        assert!(counts[0] > counts[1]);
        assert!(counts[1] >= 2 * counts[2], "counts = {:?}", counts);
        assert!(counts[1] <= 3 * counts[2] + 1, "counts = {:?}", counts);
    }

    #[test]
    fn test_ties_go_to_earlier_entry() {
        let mut s = scheduler(&[4.0, 4.0]);
        assert_eq!(s.next_turn(), Some(UnitId(0)));
        assert_eq!(s.next_turn(), Some(UnitId(1)));
        assert_eq!(s.next_turn(), Some(UnitId(0)));
    }

    #[test]
    fn test_remove() {
        let mut s = scheduler(&[4.0, 2.0]);
        assert_eq!(s.remove(UnitId(0)), 1);
        assert_eq!(s.remove(UnitId(0)), 0);
        for _ in 0..5 {
            assert_eq!(s.next_turn(), Some(UnitId(1)));
        }
    }

    #[test]
    fn test_empty_yields_none() {
        let mut s = scheduler(&[3.0]);
        s.remove(UnitId(0));
        assert_eq!(s.next_turn(), None);
    }

    #[test]
    fn test_invalid_speed() {
        let result = InitiativeScheduler::new(&[(UnitId(0), 3.0), (UnitId(1), 0.0)]);
        assert!(matches!(
            result,
            Err(EncounterError::InvalidSpeed { unit: UnitId(1), .. })
        ));
    }
}
