//! # Reachability
//!
//! Breadth-first search over the 4-connected walkable cells of a [`Grid`].

use crate::{Grid, Position};
use ::pathfinding::prelude::{bfs, bfs_reach};

/// Shortest walkable path from `start` to `goal`, both ends included.
///
/// `start` itself is not required to be walkable; only the cells stepped
/// onto are checked.
pub fn find_path(grid: &Grid, start: Position, goal: Position) -> Option<Vec<Position>> {
    bfs(
        &start,
        |&pos| grid.walkable_neighbors(pos).collect::<Vec<_>>(),
        |&pos| pos == goal,
    )
}

/// Checks whether a walkable path connects `start` and `goal`.
///
/// # Examples
///
/// ```
/// use mazecrawl::{utils::is_path_available, Grid, Position};
///
/// let wall = [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
/// let grid = Grid::from_obstacles(3, &wall);
/// assert!(!is_path_available(&grid, Position::new(1, 1), Position::new(1, 3)));
/// ```
pub fn is_path_available(grid: &Grid, start: Position, goal: Position) -> bool {
    find_path(grid, start, goal).is_some()
}

/// Every cell reachable from `start`, including `start`.
pub fn reachable_cells(grid: &Grid, start: Position) -> Vec<Position> {
    bfs_reach(start, |&pos| grid.walkable_neighbors(pos).collect::<Vec<_>>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_on_open_grid() {
        let grid = Grid::open(5);
        let path = find_path(&grid, Position::new(1, 1), Position::new(5, 5)).unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&Position::new(1, 1)));
        assert_eq!(path.last(), Some(&Position::new(5, 5)));
    }

    #[test]
    fn test_path_around_wall() {
        let grid = Grid::from_obstacles(3, &[Position::new(1, 2), Position::new(2, 2)]);
        let path = find_path(&grid, Position::new(1, 1), Position::new(1, 3)).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.iter().all(|&pos| !grid.is_obstacle(pos)));
    }

    #[test]
    fn test_path_to_self() {
        let grid = Grid::blocked(3);
        assert!(is_path_available(&grid, Position::new(2, 2), Position::new(2, 2)));
    }

    #[test]
    fn test_goal_on_obstacle_is_unreachable() {
        let grid = Grid::from_obstacles(3, &[Position::new(3, 3)]);
        assert!(!is_path_available(&grid, Position::new(1, 1), Position::new(3, 3)));
    }

    #[test]
    fn test_reachable_cells() {
        let wall = [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
        let grid = Grid::from_obstacles(3, &wall);
        let mut reachable = reachable_cells(&grid, Position::new(1, 1));
        reachable.sort();
        assert_eq!(
            reachable,
            vec![Position::new(1, 1), Position::new(2, 1), Position::new(3, 1)]
        );
    }
}
