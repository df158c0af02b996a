//! Event notifications emitted by the elevator simulation
//!
//! The simulation reports everything observable through an injected
//! [`EventSink`]; the sink has no control-flow influence on dispatch.

use log::info;

use super::types::{Direction, PassengerId};

/// Observer for the simulation's notification points
///
/// Implementations must treat calls as a pure output side effect. The
/// simulation notifies in exact visit order: movement per hop, then
/// departures, then boardings at each visited floor.
pub trait EventSink {
    /// A building was created with the given floor bounds
    fn building_created(&mut self, min_floor: i32, max_floor: i32);

    /// An elevator was created at the given starting floor
    fn elevator_created(&mut self, starting_floor: i32);

    /// The elevator completed a single hop between two floors
    fn elevator_moved(&mut self, direction: Direction, from: i32, to: i32);

    /// A passenger left the elevator at their destination floor
    fn passenger_left(&mut self, id: PassengerId, floor: i32);

    /// A passenger boarded the elevator at their origin floor
    fn passenger_entered(&mut self, id: PassengerId, floor: i32);
}

/// Sink that forwards every notification to the `log` crate
///
/// Output is governed by the binary's `env_logger` filter.
#[derive(Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn building_created(&mut self, min_floor: i32, max_floor: i32) {
        info!(
            "Created a building with bottom floor {} and top floor {}",
            min_floor, max_floor
        );
    }

    fn elevator_created(&mut self, starting_floor: i32) {
        info!("Created an elevator starting at floor {}", starting_floor);
    }

    fn elevator_moved(&mut self, direction: Direction, from: i32, to: i32) {
        info!(
            "Elevator moving {} from floor {} to floor {}",
            direction.as_str(),
            from,
            to
        );
    }

    fn passenger_left(&mut self, id: PassengerId, floor: i32) {
        info!("Passenger {} has left the elevator at floor {}", id.0, floor);
    }

    fn passenger_entered(&mut self, id: PassengerId, floor: i32) {
        info!(
            "Passenger {} has entered the elevator at floor {}",
            id.0, floor
        );
    }
}

/// A single recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum SimEvent {
    BuildingCreated { min_floor: i32, max_floor: i32 },
    ElevatorCreated { starting_floor: i32 },
    ElevatorMoved { direction: Direction, from: i32, to: i32 },
    PassengerLeft { id: PassengerId, floor: i32 },
    PassengerEntered { id: PassengerId, floor: i32 },
}

/// Sink that records notifications in order for later inspection
///
/// Used by tests that assert on exact event ordering.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingSink {
    pub events: Vec<SimEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn building_created(&mut self, min_floor: i32, max_floor: i32) {
        self.events.push(SimEvent::BuildingCreated {
            min_floor,
            max_floor,
        });
    }

    fn elevator_created(&mut self, starting_floor: i32) {
        self.events.push(SimEvent::ElevatorCreated { starting_floor });
    }

    fn elevator_moved(&mut self, direction: Direction, from: i32, to: i32) {
        self.events.push(SimEvent::ElevatorMoved { direction, from, to });
    }

    fn passenger_left(&mut self, id: PassengerId, floor: i32) {
        self.events.push(SimEvent::PassengerLeft { id, floor });
    }

    fn passenger_entered(&mut self, id: PassengerId, floor: i32) {
        self.events.push(SimEvent::PassengerEntered { id, floor });
    }
}
