//! Main simulation world that ties everything together
//!
//! This is the entry point for running the elevator simulation headless:
//! it owns the building, the car, and the event sink, seeds passengers, and
//! drives the dispatch loop until no pending work remains.

use anyhow::{ensure, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::building::SimBuilding;
use super::elevator::{SimElevator, MAX_WEIGHT};
use super::events::{EventSink, LogSink};
use super::passenger::SimPassenger;
use super::types::{Direction, PassengerId};

/// The main simulation world
pub struct SimWorld {
    /// The building whose floors hold the waiting queues
    pub building: SimBuilding,

    /// The single car serving the building
    pub elevator: SimElevator,

    /// Sink receiving every observable notification
    events: Box<dyn EventSink>,

    /// Optional seeded RNG for reproducible passenger generation
    rng: Option<StdRng>,

    /// Next ID to assign to a generated passenger
    next_id: u32,

    /// Dispatch steps executed so far
    pub steps: u64,
}

impl SimWorld {
    fn new_internal(
        min_floor: i32,
        max_floor: i32,
        starting_floor: i32,
        mut events: Box<dyn EventSink>,
        rng: Option<StdRng>,
    ) -> Result<Self> {
        ensure!(
            min_floor <= max_floor,
            "invalid floor range: {} to {}",
            min_floor,
            max_floor
        );
        ensure!(
            (min_floor..=max_floor).contains(&starting_floor),
            "starting floor {} outside building range {} to {}",
            starting_floor,
            min_floor,
            max_floor
        );

        let building = SimBuilding::new(min_floor, max_floor, events.as_mut());
        let elevator = SimElevator::new(starting_floor, events.as_mut());

        Ok(Self {
            building,
            elevator,
            events,
            rng,
            next_id: 1,
            steps: 0,
        })
    }

    pub fn new(
        min_floor: i32,
        max_floor: i32,
        starting_floor: i32,
        events: Box<dyn EventSink>,
    ) -> Result<Self> {
        Self::new_internal(min_floor, max_floor, starting_floor, events, None)
    }

    /// Create a new SimWorld with a seeded RNG for reproducible simulations
    pub fn new_with_seed(
        min_floor: i32,
        max_floor: i32,
        starting_floor: i32,
        events: Box<dyn EventSink>,
        seed: u64,
    ) -> Result<Self> {
        Self::new_internal(
            min_floor,
            max_floor,
            starting_floor,
            events,
            Some(StdRng::seed_from_u64(seed)),
        )
    }

    /// Get a random value in the given range, using seeded RNG if available
    fn random_range(&mut self, range: std::ops::RangeInclusive<i32>) -> i32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(range),
            None => rand::rng().random_range(range),
        }
    }

    fn next_passenger_id(&mut self) -> PassengerId {
        let id = PassengerId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Enqueue a passenger at their origin floor
    ///
    /// Both floors must lie within the building range. A passenger whose
    /// origin equals their destination is accepted but never queued; they
    /// have no journey to take.
    pub fn seed_passenger(&mut self, passenger: SimPassenger) -> Result<()> {
        let range = self.building.min_floor..=self.building.max_floor;
        ensure!(
            range.contains(&passenger.origin_floor),
            "origin floor {} outside building range",
            passenger.origin_floor
        );
        ensure!(
            range.contains(&passenger.destination_floor),
            "destination floor {} outside building range",
            passenger.destination_floor
        );

        self.building
            .floor_mut(passenger.origin_floor)
            .enqueue(passenger);
        Ok(())
    }

    /// Generate `count` random passengers and enqueue them
    ///
    /// Origins and destinations are drawn uniformly from the building range,
    /// re-drawing whenever the two coincide; weights fall in 50..=110.
    pub fn seed_random_passengers(&mut self, count: u32) {
        let min = self.building.min_floor;
        let max = self.building.max_floor;

        for _ in 0..count {
            let origin = self.random_range(min..=max);
            let mut destination = self.random_range(min..=max);
            while destination == origin && min != max {
                destination = self.random_range(min..=max);
            }

            let weight = self.random_range(50..=110) as u32;
            let id = self.next_passenger_id();
            self.building
                .floor_mut(origin)
                .enqueue(SimPassenger::new(id, weight, origin, destination));
        }
    }

    /// Run one dispatch step
    pub fn step(&mut self) {
        self.elevator.step(&mut self.building, self.events.as_mut());
        self.steps += 1;
    }

    /// True when the car is parked and no pending work remains anywhere
    pub fn is_idle(&self) -> bool {
        self.elevator.direction == Direction::Stationary
            && !self.elevator.should_continue_operating(&self.building)
    }

    /// Step the elevator until it parks with no pending work left
    ///
    /// Returns the number of steps taken. Fails if the car has not gone idle
    /// within `max_steps`, which indicates a dispatch defect rather than a
    /// recoverable condition.
    pub fn run_until_idle(&mut self, max_steps: u64) -> Result<u64> {
        let start = self.steps;

        while self.elevator.direction != Direction::Stationary
            || self.elevator.should_continue_operating(&self.building)
        {
            ensure!(
                self.steps - start < max_steps,
                "elevator did not go idle within {} steps",
                max_steps
            );
            self.step();
        }

        Ok(self.steps - start)
    }

    /// Create the canonical demo world: floors 1 to 5, elevator starting at
    /// floor 4, four passengers waiting across the building
    pub fn create_test_world() -> Result<Self> {
        Self::build_test_world(Box::new(LogSink))
    }

    /// Internal helper to build the demo world with the given sink
    pub fn build_test_world(events: Box<dyn EventSink>) -> Result<Self> {
        let mut world = Self::new(1, 5, 4, events)?;

        world.seed_passenger(SimPassenger::new(PassengerId(1), 70, 1, 4))?;
        world.seed_passenger(SimPassenger::new(PassengerId(2), 60, 2, 5))?;
        world.seed_passenger(SimPassenger::new(PassengerId(3), 80, 3, 1))?;
        world.seed_passenger(SimPassenger::new(PassengerId(4), 90, 5, 2))?;
        world.next_id = 5;

        Ok(world)
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        println!("=== Elevator Simulation Summary ===");
        println!("Steps: {}", self.steps);
        println!(
            "Building: floors {} to {}, {} waiting",
            self.building.min_floor,
            self.building.max_floor,
            self.building.total_waiting()
        );

        for number in (self.building.min_floor..=self.building.max_floor).rev() {
            let floor = self.building.floor(number);
            if floor.has_waiting() {
                println!(
                    "  Floor {}: waiting up={}, down={}",
                    number,
                    floor.waiting_up(),
                    floor.waiting_down()
                );
            }
        }

        println!(
            "Elevator: at floor {}, direction {}, passengers={}, weight={}/{}",
            self.elevator.current_floor,
            self.elevator.direction.as_str(),
            self.elevator.passenger_count(),
            self.elevator.current_weight,
            MAX_WEIGHT
        );
        println!();
    }
}
