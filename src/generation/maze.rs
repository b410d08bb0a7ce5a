//! # Maze Generation
//!
//! Randomized Prim's-style carving over a fully blocked grid.
//!
//! The carve is deliberately loose: an eligible frontier cell is only opened
//! with `carve_probability`, and the frontier may hold the same cell many
//! times. A cell is only opened next to exactly one open cell, so the carved
//! cells always form a single region around the origin. Nothing guarantees
//! that region holds both the player start and the portal;
//! [`crate::generation::connectivity`] repairs that afterwards.

use crate::utils::reachable_cells;
use crate::{CrawlerError, CrawlerResult, GenerationConfig, Generator, Grid, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// A carved grid plus the cell carving started from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    /// First cell opened; always walkable
    pub origin: Position,
}

/// Randomized Prim's maze generator.
#[derive(Debug, Clone, Default)]
pub struct MazeGenerator;

impl MazeGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Picks the carve origin: a cell whose 0-based row and column are both odd.
    fn pick_origin(&self, map_size: u32, rng: &mut StdRng) -> CrawlerResult<Position> {
        let odd_indices: Vec<i32> = (1..map_size as i32).step_by(2).collect();
        let row = odd_indices.choose(rng).copied();
        let col = odd_indices.choose(rng).copied();
        match (row, col) {
            // Shift from 0-based maze indices to 1-based play area positions
            (Some(row), Some(col)) => Ok(Position::new(row + 1, col + 1)),
            _ => Err(CrawlerError::GenerationFailed(format!(
                "a {}x{} grid has no odd-indexed cell to start carving from",
                map_size, map_size
            ))),
        }
    }

    /// Carves `grid` starting at `origin`.
    fn carve(&self, grid: &mut Grid, origin: Position, carve_probability: f64, rng: &mut StdRng) {
        grid.set_walkable(origin, true);

        let mut frontier: Vec<Position> = origin
            .cardinal_adjacent_positions()
            .into_iter()
            .filter(|&pos| grid.in_bounds(pos))
            .collect();

        while !frontier.is_empty() {
            let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));

            // Duplicates of an already carved cell land here and do nothing
            if !grid.is_obstacle(cell) || grid.walkable_neighbors(cell).count() != 1 {
                continue;
            }

            if rng.gen_bool(carve_probability) {
                grid.set_walkable(cell, true);
            }

            frontier.extend(
                cell.cardinal_adjacent_positions()
                    .into_iter()
                    .filter(|&pos| grid.is_obstacle(pos)),
            );
        }
    }
}

impl Generator<Maze> for MazeGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> CrawlerResult<Maze> {
        let mut grid = Grid::blocked(config.map_size);
        let origin = self.pick_origin(config.map_size, rng)?;

        self.carve(&mut grid, origin, config.carve_probability, rng);

        let maze = Maze { grid, origin };
        self.validate(&maze, config)?;

        log::debug!(
            "carved {} of {} cells from origin {}",
            maze.grid.walkable_count(),
            config.map_size * config.map_size,
            origin
        );
        Ok(maze)
    }

    fn validate(&self, maze: &Maze, config: &GenerationConfig) -> CrawlerResult<()> {
        if maze.grid.size() != config.map_size {
            return Err(CrawlerError::GenerationFailed(format!(
                "maze is {} cells wide, expected {}",
                maze.grid.size(),
                config.map_size
            )));
        }
        if !maze.grid.is_walkable(maze.origin) {
            return Err(CrawlerError::GenerationFailed(
                "carve origin is not walkable".to_string(),
            ));
        }
        let reachable = reachable_cells(&maze.grid, maze.origin).len();
        if reachable != maze.grid.walkable_count() {
            return Err(CrawlerError::GenerationFailed(format!(
                "only {} of {} carved cells connect to the origin",
                reachable,
                maze.grid.walkable_count()
            )));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "MazeGenerator"
    }
}
