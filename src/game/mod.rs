//! # Game Module
//!
//! Core simulation: the mine grid, the player, the rules that connect them,
//! and the session object that drives everything.
//!
//! This module contains the fundamental building blocks of the game:
//! - Tile metadata and the mine field grid
//! - Player state, equipment and the economy rules
//! - The mine controller (movement, digging, hazards, camera)
//! - Town services and the game session

pub mod camera;
pub mod controller;
pub mod economy;
pub mod equipment;
pub mod events;
pub mod field;
pub mod player;
pub mod state;
pub mod tile;
pub mod town;

pub use camera::*;
pub use controller::*;
pub use economy::*;
pub use equipment::*;
pub use events::*;
pub use field::*;
pub use player::*;
pub use state::*;
pub use tile::*;
pub use town::*;

use serde::{Deserialize, Serialize};

/// Represents a grid coordinate in the mine. Row 0 is the surface.
///
/// # Examples
///
/// ```
/// use miner::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let neighbors = pos.neighborhood(1);
/// assert_eq!(neighbors.len(), 9); // 3x3 square including the centre
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns every position in the square of the given half extent
    /// centred on this one, row by row, the centre included.
    pub fn neighborhood(self, half_extent: i32) -> Vec<Position> {
        let half_extent = half_extent.max(0);
        let side = (2 * half_extent + 1) as usize;
        let mut positions = Vec::with_capacity(side * side);
        for dy in -half_extent..=half_extent {
            for dx in -half_extent..=half_extent {
                positions.push(Position::new(self.x + dx, self.y + dy));
            }
        }
        positions
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four directions a miner can move or dig in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Converts a direction to a position delta. North is up (towards row 0).
    ///
    /// # Examples
    ///
    /// ```
    /// use miner::{Direction, Position};
    ///
    /// let delta = Direction::North.to_delta();
    /// assert_eq!(delta, Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::North => Position::new(0, -1),
            Direction::South => Position::new(0, 1),
            Direction::East => Position::new(1, 0),
            Direction::West => Position::new(-1, 0),
        }
    }

    /// Converts a position delta to a direction.
    ///
    /// Returns None if the delta is not a single cardinal step.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }
}
