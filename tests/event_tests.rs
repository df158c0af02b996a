//! Event notification ordering tests
//!
//! The recorded event stream is the simulation's observable output; these
//! tests pin the exact notification points and their order: movement per
//! hop, then departures, then boardings at each visited floor.

use elevator_sim::simulation::{
    Direction, PassengerId, RecordingSink, SimBuilding, SimElevator, SimEvent, SimPassenger,
};

fn run_to_idle(elevator: &mut SimElevator, building: &mut SimBuilding, sink: &mut RecordingSink) {
    let mut steps = 0;
    while elevator.direction != Direction::Stationary || elevator.should_continue_operating(building)
    {
        elevator.step(building, sink);
        steps += 1;
        assert!(steps <= 1000, "elevator failed to go idle within 1000 steps");
    }
}

#[test]
fn test_creation_events_come_first() {
    let mut sink = RecordingSink::new();
    let building = SimBuilding::new(1, 5, &mut sink);
    let elevator = SimElevator::new(4, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            SimEvent::BuildingCreated {
                min_floor: 1,
                max_floor: 5
            },
            SimEvent::ElevatorCreated { starting_floor: 4 },
        ],
        "construction must notify the sink immediately, building first"
    );

    // Quiet the unused bindings; construction is the behavior under test.
    assert_eq!(building.max_floor, 5);
    assert_eq!(elevator.current_floor, 4);
}

#[test]
fn test_single_passenger_event_sequence() {
    let mut sink = RecordingSink::new();
    let mut building = SimBuilding::new(1, 5, &mut sink);
    let mut elevator = SimElevator::new(4, &mut sink);

    building
        .floor_mut(1)
        .enqueue(SimPassenger::new(PassengerId(1), 70, 1, 4));

    run_to_idle(&mut elevator, &mut building, &mut sink);

    assert_eq!(
        sink.events,
        vec![
            SimEvent::BuildingCreated {
                min_floor: 1,
                max_floor: 5
            },
            SimEvent::ElevatorCreated { starting_floor: 4 },
            SimEvent::ElevatorMoved {
                direction: Direction::Down,
                from: 4,
                to: 1
            },
            SimEvent::PassengerEntered {
                id: PassengerId(1),
                floor: 1
            },
            SimEvent::ElevatorMoved {
                direction: Direction::Up,
                from: 1,
                to: 4
            },
            SimEvent::PassengerLeft {
                id: PassengerId(1),
                floor: 4
            },
        ],
        "down-then-up traversal must produce exactly this notification order"
    );
}

#[test]
fn test_unload_precedes_load_at_shared_stop() {
    let mut sink = RecordingSink::new();
    let mut building = SimBuilding::new(1, 5, &mut sink);
    let mut elevator = SimElevator::new(1, &mut sink);

    // A rides 1 to 3; B waits at 3 to ride up to 5. Floor 3 is both a
    // drop-off and a pick-up on the same upward pass.
    building
        .floor_mut(1)
        .enqueue(SimPassenger::new(PassengerId(1), 70, 1, 3));
    building
        .floor_mut(3)
        .enqueue(SimPassenger::new(PassengerId(2), 60, 3, 5));

    run_to_idle(&mut elevator, &mut building, &mut sink);

    let service_events: Vec<SimEvent> = sink
        .events
        .into_iter()
        .filter(|e| {
            !matches!(
                e,
                SimEvent::BuildingCreated { .. } | SimEvent::ElevatorCreated { .. }
            )
        })
        .collect();

    assert_eq!(
        service_events,
        vec![
            SimEvent::PassengerEntered {
                id: PassengerId(1),
                floor: 1
            },
            SimEvent::ElevatorMoved {
                direction: Direction::Up,
                from: 1,
                to: 3
            },
            SimEvent::PassengerLeft {
                id: PassengerId(1),
                floor: 3
            },
            SimEvent::PassengerEntered {
                id: PassengerId(2),
                floor: 3
            },
            SimEvent::ElevatorMoved {
                direction: Direction::Up,
                from: 3,
                to: 5
            },
            SimEvent::PassengerLeft {
                id: PassengerId(2),
                floor: 5
            },
        ],
        "each stop must unload before it loads, with one movement event per hop"
    );
}

#[test]
fn test_movement_emitted_only_when_floors_change() {
    let mut sink = RecordingSink::new();
    let mut building = SimBuilding::new(1, 5, &mut sink);
    let mut elevator = SimElevator::new(2, &mut sink);

    // Boarding happens on the elevator's own floor; the first stop of the
    // route must not produce a movement event.
    building
        .floor_mut(2)
        .enqueue(SimPassenger::new(PassengerId(1), 70, 2, 4));

    run_to_idle(&mut elevator, &mut building, &mut sink);

    let moves: Vec<SimEvent> = sink
        .events
        .iter()
        .copied()
        .filter(|e| matches!(e, SimEvent::ElevatorMoved { .. }))
        .collect();

    assert_eq!(
        moves,
        vec![SimEvent::ElevatorMoved {
            direction: Direction::Up,
            from: 2,
            to: 4
        }],
        "servicing the current floor is not a hop"
    );
}
