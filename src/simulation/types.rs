//! Core types for the elevator simulation

/// A unique identifier for a passenger
/// This is a simple wrapper around a u32 for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PassengerId(pub u32);

/// Travel state of the elevator, or the derived travel need of a passenger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Moving towards higher floors
    Up,
    /// Moving towards lower floors
    Down,
    /// No pending movement
    Stationary,
}

impl Direction {
    /// Lowercase representation used in event output
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Stationary => "stationary",
        }
    }
}
