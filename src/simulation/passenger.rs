//! Passenger record for the elevator simulation

use super::types::{Direction, PassengerId};

/// A passenger riding or waiting for the elevator
///
/// Immutable after creation; the travel direction is derived from the
/// origin and destination floors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimPassenger {
    pub id: PassengerId,
    pub weight: u32,
    pub origin_floor: i32,
    pub destination_floor: i32,
}

impl SimPassenger {
    pub fn new(id: PassengerId, weight: u32, origin_floor: i32, destination_floor: i32) -> Self {
        Self {
            id,
            weight,
            origin_floor,
            destination_floor,
        }
    }

    /// Direction the elevator must travel to bring this passenger to their
    /// destination. Stationary when origin and destination coincide.
    pub fn direction_to_destination(&self) -> Direction {
        if self.destination_floor > self.origin_floor {
            Direction::Up
        } else if self.destination_floor < self.origin_floor {
            Direction::Down
        } else {
            Direction::Stationary
        }
    }
}
