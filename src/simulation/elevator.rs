//! Elevator dispatch logic for the simulation
//!
//! The car re-evaluates its direction and destination on every step, builds a
//! route of stops for that direction, and services the route floor by floor.

use std::cmp::Reverse;
use std::collections::{BTreeSet, BinaryHeap};

use super::building::SimBuilding;
use super::events::EventSink;
use super::passenger::SimPassenger;
use super::types::Direction;

/// Maximum number of passengers allowed in the car
pub const MAX_PASSENGERS: usize = 10;
/// Maximum supported total passenger weight
pub const MAX_WEIGHT: u32 = 1000;

/// A single elevator car operating within a building
///
/// Onboard destinations are kept in two priority queues so that the head of
/// each queue is the nearest pending stop in that direction: a min-heap for
/// up-bound destinations and a max-heap for down-bound ones.
pub struct SimElevator {
    pub current_floor: i32,
    pub current_destination: i32,
    pub direction: Direction,
    pub passengers: Vec<SimPassenger>,
    pub current_weight: u32,
    up_calls: BinaryHeap<Reverse<i32>>,
    down_calls: BinaryHeap<i32>,
}

impl SimElevator {
    pub fn new(starting_floor: i32, events: &mut dyn EventSink) -> Self {
        events.elevator_created(starting_floor);

        Self {
            current_floor: starting_floor,
            current_destination: starting_floor,
            direction: Direction::Stationary,
            passengers: Vec::new(),
            current_weight: 0,
            up_calls: BinaryHeap::new(),
            down_calls: BinaryHeap::new(),
        }
    }

    /// Number of passengers currently in the car
    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Number of onboard passengers riding towards a higher floor
    pub fn up_call_count(&self) -> usize {
        self.up_calls.len()
    }

    /// Number of onboard passengers riding towards a lower floor
    pub fn down_call_count(&self) -> usize {
        self.down_calls.len()
    }

    /// Run one dispatch step: pick a direction and destination, build the
    /// route for that direction, and service every floor along it
    ///
    /// When no pending work exists anywhere the car parks as Stationary. That
    /// is terminal for this step only; new requests enqueued afterwards will
    /// put the car back in motion on the next step.
    pub fn step(&mut self, building: &mut SimBuilding, events: &mut dyn EventSink) {
        if !self.should_continue_operating(building) {
            self.direction = Direction::Stationary;
            return;
        }

        self.find_next_direction_and_destination(building);
        let route = self.calculate_route(building);
        self.travel_route(&route, building, events);
    }

    /// True while any pending work remains: waiting passengers on the current
    /// floor, onboard destinations, or a waiting floor anywhere else
    ///
    /// This is the simulation's termination condition.
    pub fn should_continue_operating(&self, building: &SimBuilding) -> bool {
        if building.floor(self.current_floor).has_waiting() {
            return true;
        }

        if !self.up_calls.is_empty() || !self.down_calls.is_empty() {
            return true;
        }

        building
            .find_nearest_waiting_floor(self.current_floor)
            .is_some()
    }

    /// Pick the next direction and destination, by priority: requests on the
    /// current floor, then onboard destinations, then the nearest waiting
    /// floor elsewhere in the building
    fn find_next_direction_and_destination(&mut self, building: &SimBuilding) {
        let current = building.floor(self.current_floor);

        if current.up_queue.is_empty() && current.down_queue.is_empty() {
            if self.up_calls.is_empty() && self.down_calls.is_empty() {
                match building.find_nearest_waiting_floor(self.current_floor) {
                    None => self.direction = Direction::Stationary,
                    Some(floor) => {
                        self.direction = if self.current_floor > floor {
                            Direction::Down
                        } else {
                            Direction::Up
                        };
                        self.current_destination = floor;
                    }
                }
            } else {
                let above = self.up_calls.peek().map(|d| d.0);
                let below = self.down_calls.peek().copied();
                self.set_next_direction_and_destination(below, above);
            }
        } else {
            let above = current.peek_up().map(|p| p.destination_floor);
            let below = current.peek_down().map(|p| p.destination_floor);
            self.set_next_direction_and_destination(below, above);
        }
    }

    /// Choose the candidate destination nearest to the current floor; at
    /// equal distance the above candidate wins, keeping UP the preferred
    /// direction on ties
    fn set_next_direction_and_destination(&mut self, below: Option<i32>, above: Option<i32>) {
        match (above, below) {
            (Some(above), Some(below)) => {
                if (above - self.current_floor).abs() <= (below - self.current_floor).abs() {
                    self.direction = Direction::Up;
                    self.current_destination = above;
                } else {
                    self.direction = Direction::Down;
                    self.current_destination = below;
                }
            }
            (Some(above), None) => {
                self.direction = Direction::Up;
                self.current_destination = above;
            }
            (None, Some(below)) => {
                self.direction = Direction::Down;
                self.current_destination = below;
            }
            (None, None) => {
                debug_assert!(false, "direction selection requires at least one candidate");
            }
        }
    }

    /// Build the ordered, duplicate-free sequence of stops for the current
    /// direction and extend the destination to the farthest stop found
    ///
    /// On the way up the route collects every onboard destination and every
    /// floor strictly between the current floor and the top that has up-bound
    /// waiters; the top floor itself is appended only when it has down-bound
    /// waiters, without extending the destination. Downward travel is the
    /// mirror image.
    fn calculate_route(&mut self, building: &SimBuilding) -> Vec<i32> {
        let mut destination = self.current_floor;
        let mut route = BTreeSet::new();
        route.insert(self.current_floor);
        route.insert(self.current_destination);

        match self.direction {
            Direction::Up => {
                for p in &self.passengers {
                    destination = destination.max(p.destination_floor);
                    route.insert(p.destination_floor);
                }

                for f in (self.current_floor + 1)..building.max_floor {
                    if !building.floor(f).up_queue.is_empty() {
                        destination = destination.max(f);
                        route.insert(f);
                    }
                }

                if !building.floor(building.max_floor).down_queue.is_empty() {
                    route.insert(building.max_floor);
                }
            }
            Direction::Down => {
                for p in &self.passengers {
                    destination = destination.min(p.destination_floor);
                    route.insert(p.destination_floor);
                }

                for f in ((building.min_floor + 1)..self.current_floor).rev() {
                    if !building.floor(f).down_queue.is_empty() {
                        destination = destination.min(f);
                        route.insert(f);
                    }
                }

                if !building.floor(building.min_floor).up_queue.is_empty() {
                    route.insert(building.min_floor);
                }
            }
            Direction::Stationary => {}
        }

        self.current_destination = destination;

        let mut stops: Vec<i32> = route.into_iter().collect();
        if self.direction == Direction::Down {
            stops.reverse();
        }
        stops
    }

    /// Visit each floor on the route in order, unloading then loading at
    /// every stop, and emit one movement event per hop
    fn travel_route(
        &mut self,
        route: &[i32],
        building: &mut SimBuilding,
        events: &mut dyn EventSink,
    ) {
        for &floor in route {
            if self.current_floor != floor {
                events.elevator_moved(self.direction, self.current_floor, floor);
            }

            self.current_floor = floor;
            self.unload_passengers_at(floor, events);
            self.load_passengers_at(floor, building, events);
        }
    }

    /// Drop off every passenger whose destination is the given floor
    ///
    /// Each departure pops exactly one entry from the destination queue
    /// matching the travel direction. Entries for the same floor are
    /// interchangeable, so the pop count must track departures, not unique
    /// floors.
    fn unload_passengers_at(&mut self, floor: i32, events: &mut dyn EventSink) {
        let mut departed = Vec::new();
        self.passengers.retain(|p| {
            if p.destination_floor == floor {
                departed.push(*p);
                false
            } else {
                true
            }
        });

        for p in departed {
            events.passenger_left(p.id, p.destination_floor);
            self.current_weight -= p.weight;

            if self.direction == Direction::Up {
                self.up_calls.pop();
            } else {
                self.down_calls.pop();
            }
        }
    }

    /// Board waiting passengers travelling in the current direction, in
    /// strict queue order, while they fit within both capacity limits
    ///
    /// Loading stops at the first passenger who does not fit; nobody behind
    /// them is considered, even if lighter.
    fn load_passengers_at(
        &mut self,
        floor: i32,
        building: &mut SimBuilding,
        events: &mut dyn EventSink,
    ) {
        let floor_state = building.floor_mut(floor);
        let queue = match self.direction {
            Direction::Up => &mut floor_state.up_queue,
            _ => &mut floor_state.down_queue,
        };

        while let Some(&p) = queue.front() {
            if self.current_weight + p.weight > MAX_WEIGHT
                || self.passengers.len() >= MAX_PASSENGERS
            {
                break;
            }

            queue.pop_front();
            events.passenger_entered(p.id, p.origin_floor);
            self.current_weight += p.weight;
            self.passengers.push(p);

            if self.direction == Direction::Up {
                self.up_calls.push(Reverse(p.destination_floor));
            } else {
                self.down_calls.push(p.destination_floor);
            }
        }
    }
}
