//! Elevator Dispatch Simulation Library
//!
//! A single-car elevator simulation library that can run headless from the
//! command line or be driven step by step from tests and other tools.

pub mod simulation;
