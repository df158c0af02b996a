//! Building state for the elevator simulation
//!
//! The building owns one floor per integer in its configured range and
//! implements the nearest-pending-request search the dispatcher relies on.

use std::collections::HashMap;

use super::events::EventSink;
use super::floor::SimFloor;

/// A building with a fixed contiguous range of floors
///
/// The floor set is immutable after construction: exactly one `SimFloor`
/// exists for every integer in `[min_floor, max_floor]`.
pub struct SimBuilding {
    pub min_floor: i32,
    pub max_floor: i32,
    floors: HashMap<i32, SimFloor>,
}

impl SimBuilding {
    pub fn new(min_floor: i32, max_floor: i32, events: &mut dyn EventSink) -> Self {
        let mut floors = HashMap::new();
        for number in min_floor..=max_floor {
            floors.insert(number, SimFloor::new(number));
        }

        events.building_created(min_floor, max_floor);

        Self {
            min_floor,
            max_floor,
            floors,
        }
    }

    /// Look up a floor by number
    ///
    /// Callers must stay within `[min_floor, max_floor]`; an out-of-range
    /// lookup is a caller defect, not a handled condition.
    pub fn floor(&self, number: i32) -> &SimFloor {
        &self.floors[&number]
    }

    /// Mutable lookup, same caller contract as [`SimBuilding::floor`]
    pub fn floor_mut(&mut self, number: i32) -> &mut SimFloor {
        self.floors.get_mut(&number).expect("floor out of range")
    }

    /// Find the closest floor to `from` with any pending passenger
    ///
    /// Expands outward one floor at a time in both directions at once. At
    /// equal distance the floor above wins, which makes UP the globally
    /// preferred direction on ties. Once one side of the range is exhausted
    /// the scan continues one-sided. Returns `None` when no floor in the
    /// building has anyone waiting.
    pub fn find_nearest_waiting_floor(&self, from: i32) -> Option<i32> {
        let mut below = from - 1;
        let mut above = from + 1;

        while above <= self.max_floor && below >= self.min_floor {
            if self.floor(above).has_waiting() {
                return Some(above);
            }
            if self.floor(below).has_waiting() {
                return Some(below);
            }
            above += 1;
            below -= 1;
        }

        while above <= self.max_floor {
            if self.floor(above).has_waiting() {
                return Some(above);
            }
            above += 1;
        }

        while below >= self.min_floor {
            if self.floor(below).has_waiting() {
                return Some(below);
            }
            below -= 1;
        }

        None
    }

    /// Total number of passengers waiting anywhere in the building
    pub fn total_waiting(&self) -> usize {
        self.floors
            .values()
            .map(|f| f.waiting_up() + f.waiting_down())
            .sum()
    }
}
