//! # Game Module
//!
//! Core game state management, level representation, and the turn engine.
//!
//! This module contains the fundamental building blocks of the crawler:
//! - Grid geometry (positions and directions)
//! - Level representation (walkable grid, agents, chests, portal)
//! - Entities, items and the player inventory
//! - The turn engine that resolves player actions and agent reactions

pub mod actions;
pub mod behavior;
pub mod entities;
pub mod inventory;
pub mod state;
pub mod world;

pub use actions::*;
pub use behavior::*;
pub use entities::*;
pub use inventory::*;
pub use state::*;
pub use world::*;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the level grid.
///
/// Rows grow downwards and columns grow to the right. The play area is
/// 1-indexed: row and column `0` and `map_size + 1` form the impassable
/// border ring.
///
/// # Examples
///
/// ```
/// use mazecrawl::Position;
///
/// let pos = Position::new(2, 5);
/// assert_eq!(pos.row, 2);
/// assert_eq!(pos.col, 5);
///
/// let neighbors = pos.cardinal_adjacent_positions();
/// assert_eq!(neighbors.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Calculates the Manhattan distance to another position.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::Position;
    ///
    /// let pos1 = Position::new(1, 1);
    /// let pos2 = Position::new(4, 5);
    /// assert_eq!(pos1.manhattan_distance(pos2), 7);
    /// ```
    pub fn manhattan_distance(self, other: Position) -> u32 {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as u32
    }

    /// Returns true when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Returns the position one step away in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        self + direction.to_delta()
    }

    /// Returns the 4 cardinal adjacent positions in up, down, left, right order.
    pub fn cardinal_adjacent_positions(self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }

    /// Checks whether this position lies inside a play area of side `map_size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::Position;
    ///
    /// assert!(Position::new(1, 10).in_play_area(10));
    /// assert!(!Position::new(0, 3).in_play_area(10));
    /// assert!(!Position::new(3, 11).in_play_area(10));
    /// ```
    pub fn in_play_area(self, map_size: u32) -> bool {
        let max = map_size as i32;
        (1..=max).contains(&self.row) && (1..=max).contains(&self.col)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.row + other.row, self.col + other.col)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.row - other.row, self.col - other.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Directions for movement and facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Converts a direction to a position delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::{Direction, Position};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Position::new(-1, 0));
    /// assert_eq!(Direction::Right.to_delta(), Position::new(0, 1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(-1, 0),
            Direction::Down => Position::new(1, 0),
            Direction::Left => Position::new(0, -1),
            Direction::Right => Position::new(0, 1),
        }
    }

    /// Converts a unit delta back to a direction.
    ///
    /// Returns None if the delta isn't a single orthogonal step.
    pub fn from_delta(delta: Position) -> Option<Direction> {
        match (delta.row, delta.col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, -1) => Some(Direction::Left),
            (0, 1) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Returns all 4 directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Parses the lowercase direction name used by the input layer.
    pub fn from_name(name: &str) -> Option<Direction> {
        match name {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.row, 5);
        assert_eq!(pos.col, 10);
    }

    #[test]
    fn test_position_manhattan_distance() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, 4);
        assert_eq!(pos1.manhattan_distance(pos2), 7);
        assert_eq!(pos2.manhattan_distance(pos1), 7);
    }

    #[test]
    fn test_position_adjacency() {
        let pos = Position::new(5, 5);
        assert!(pos.is_adjacent(Position::new(4, 5)));
        assert!(pos.is_adjacent(Position::new(5, 6)));
        assert!(!pos.is_adjacent(Position::new(4, 4))); // No diagonal
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn test_position_cardinal_adjacent() {
        let adjacent = Position::new(5, 5).cardinal_adjacent_positions();
        assert!(adjacent.contains(&Position::new(4, 5)));
        assert!(adjacent.contains(&Position::new(6, 5)));
        assert!(adjacent.contains(&Position::new(5, 4)));
        assert!(adjacent.contains(&Position::new(5, 6)));
    }

    #[test]
    fn test_play_area_bounds() {
        assert!(Position::new(1, 1).in_play_area(10));
        assert!(Position::new(10, 10).in_play_area(10));
        assert!(!Position::new(0, 1).in_play_area(10));
        assert!(!Position::new(1, 11).in_play_area(10));
        assert!(!Position::new(-3, 4).in_play_area(10));
    }

    #[test]
    fn test_position_arithmetic() {
        let pos1 = Position::new(5, 10);
        let pos2 = Position::new(3, 2);
        assert_eq!(pos1 + pos2, Position::new(8, 12));
        assert_eq!(pos1 - pos2, Position::new(2, 8));
    }

    #[test]
    fn test_direction_round_trip_through_delta() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_delta(direction.to_delta()), Some(direction));
        }
        assert_eq!(Direction::from_delta(Position::new(1, 1)), None);
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::from_name("left"), Some(Direction::Left));
        assert_eq!(Direction::from_name("north"), None);
    }
}
