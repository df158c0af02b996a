//! Floor state for the elevator simulation
//!
//! Each floor keeps two disjoint FIFO queues of waiting passengers, one per
//! travel direction. Insertion order is wait order.

use std::collections::VecDeque;

use super::passenger::SimPassenger;
use super::types::Direction;

/// A floor in the building with its waiting queues
#[derive(Debug, Clone, Default)]
pub struct SimFloor {
    pub number: i32,
    pub up_queue: VecDeque<SimPassenger>,
    pub down_queue: VecDeque<SimPassenger>,
}

impl SimFloor {
    pub fn new(number: i32) -> Self {
        Self {
            number,
            up_queue: VecDeque::new(),
            down_queue: VecDeque::new(),
        }
    }

    /// Append a passenger to the queue matching their derived direction
    ///
    /// A passenger whose origin equals their destination derives Stationary
    /// and is silently not enqueued; they have no journey to take.
    pub fn enqueue(&mut self, passenger: SimPassenger) {
        match passenger.direction_to_destination() {
            Direction::Up => self.up_queue.push_back(passenger),
            Direction::Down => self.down_queue.push_back(passenger),
            Direction::Stationary => {}
        }
    }

    /// Head of the up-bound queue, if any
    pub fn peek_up(&self) -> Option<&SimPassenger> {
        self.up_queue.front()
    }

    /// Head of the down-bound queue, if any
    pub fn peek_down(&self) -> Option<&SimPassenger> {
        self.down_queue.front()
    }

    /// Number of passengers waiting to go up
    pub fn waiting_up(&self) -> usize {
        self.up_queue.len()
    }

    /// Number of passengers waiting to go down
    pub fn waiting_down(&self) -> usize {
        self.down_queue.len()
    }

    /// True when either queue has a pending passenger
    pub fn has_waiting(&self) -> bool {
        !self.up_queue.is_empty() || !self.down_queue.is_empty()
    }
}
