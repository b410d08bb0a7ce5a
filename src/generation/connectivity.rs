//! # Connectivity Repair
//!
//! Knocks down random obstacles until a path joins two cells.

use crate::utils::is_path_available;
use crate::{Grid, Position};
use rand::rngs::StdRng;
use rand::Rng;

/// Removes obstacles until `goal` is reachable from `start`.
///
/// Each round runs a BFS over the 4-connected cells of a `map_size` play
/// area. If `goal` is unreached, one obstacle chosen uniformly at random is
/// removed and the search repeats. The loop ends once the goal is reached or
/// the obstacle list is empty, which always makes the goal reachable.
///
/// The relative order of the surviving obstacles is preserved.
///
/// # Examples
///
/// ```
/// use mazecrawl::{ensure_reachable, utils::is_path_available, Grid, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let wall = vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)];
/// let mut rng = StdRng::seed_from_u64(1);
/// let repaired = ensure_reachable(Position::new(1, 1), Position::new(1, 3), wall, 3, &mut rng);
///
/// assert!(repaired.len() < 3);
/// let grid = Grid::from_obstacles(3, &repaired);
/// assert!(is_path_available(&grid, Position::new(1, 1), Position::new(1, 3)));
/// ```
pub fn ensure_reachable(
    start: Position,
    goal: Position,
    mut obstacles: Vec<Position>,
    map_size: u32,
    rng: &mut StdRng,
) -> Vec<Position> {
    let mut removed = 0usize;

    loop {
        let grid = Grid::from_obstacles(map_size, &obstacles);
        if is_path_available(&grid, start, goal) {
            break;
        }
        if obstacles.is_empty() {
            // Only reachable when start or goal lies outside the play area
            log::warn!(
                "no obstacles left but {} still cannot reach {}",
                start,
                goal
            );
            break;
        }
        obstacles.remove(rng.gen_range(0..obstacles.len()));
        removed += 1;
    }

    if removed > 0 {
        log::debug!(
            "removed {} obstacles to connect {} and {}",
            removed,
            start,
            goal
        );
    }
    obstacles
}
