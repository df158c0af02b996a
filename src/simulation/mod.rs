//! Standalone elevator simulation module
//!
//! This module contains all the core dispatch logic: floor queues, the
//! nearest-request search, and the per-step elevator algorithm. It can be
//! driven from the console binary or directly from tests.

mod building;
mod elevator;
mod events;
mod floor;
mod passenger;
mod types;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use building::SimBuilding;
#[allow(unused_imports)]
pub use elevator::{SimElevator, MAX_PASSENGERS, MAX_WEIGHT};
#[allow(unused_imports)]
pub use events::{EventSink, LogSink, RecordingSink, SimEvent};
#[allow(unused_imports)]
pub use floor::SimFloor;
#[allow(unused_imports)]
pub use passenger::SimPassenger;
#[allow(unused_imports)]
pub use types::{Direction, PassengerId};
pub use world::SimWorld;
