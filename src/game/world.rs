//! # Level Representation
//!
//! The walkable grid and the per-level collections of agents, chests and
//! the portal. A `Level` is rebuilt from scratch on every level advance.

use crate::{Agent, Boss, Chest, Enemy, Position};
use serde::{Deserialize, Serialize};

/// Square walkability grid covering the play area.
///
/// Cells are addressed with 1-indexed [`Position`]s. Anything outside
/// `1..=size` on either axis is treated as blocked border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: u32,
    walkable: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell blocked.
    pub fn blocked(size: u32) -> Self {
        Self {
            size,
            walkable: vec![false; (size * size) as usize],
        }
    }

    /// Creates a grid with every cell walkable.
    pub fn open(size: u32) -> Self {
        Self {
            size,
            walkable: vec![true; (size * size) as usize],
        }
    }

    /// Builds a grid where exactly the listed cells are blocked.
    ///
    /// Positions outside the play area are ignored.
    pub fn from_obstacles(size: u32, obstacles: &[Position]) -> Self {
        let mut grid = Self::open(size);
        for &pos in obstacles {
            grid.set_walkable(pos, false);
        }
        grid
    }

    /// Side length of the play area.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Checks whether `pos` is inside the play area.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.in_play_area(self.size)
    }

    /// Returns true for walkable cells inside the play area.
    pub fn is_walkable(&self, pos: Position) -> bool {
        self.index(pos).map(|idx| self.walkable[idx]).unwrap_or(false)
    }

    /// Returns true for blocked cells inside the play area.
    ///
    /// Border cells are not obstacles; they are out of bounds.
    pub fn is_obstacle(&self, pos: Position) -> bool {
        self.index(pos).map(|idx| !self.walkable[idx]).unwrap_or(false)
    }

    /// Marks a cell walkable or blocked. Out-of-bounds positions are ignored.
    pub fn set_walkable(&mut self, pos: Position, walkable: bool) {
        if let Some(idx) = self.index(pos) {
            self.walkable[idx] = walkable;
        }
    }

    /// Counts the walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.walkable.iter().filter(|&&cell| cell).count()
    }

    /// All blocked cells in row-major order.
    pub fn obstacles(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.is_obstacle(pos)).collect()
    }

    /// All walkable cells in row-major order.
    pub fn open_positions(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self.is_walkable(pos)).collect()
    }

    /// Walkable 4-connected neighbours of `pos`.
    pub fn walkable_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(move |&next| self.is_walkable(next))
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size as i32;
        (1..=size).flat_map(move |row| (1..=size).map(move |col| Position::new(row, col)))
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(((pos.row - 1) as u32 * self.size + (pos.col - 1) as u32) as usize)
    }
}

/// One dungeon level: terrain plus everything placed on it.
///
/// Agents are kept in action order: regular enemies first, then the boss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// 1-based level number
    pub number: u32,
    /// Walkability grid
    pub grid: Grid,
    /// Enemies and boss, in the order they act
    pub agents: Vec<Agent>,
    /// Unopened chests
    pub chests: Vec<Chest>,
    /// Portal to the next level; boss levels have none
    pub portal: Option<Position>,
    /// Where the player enters this level
    pub player_start: Position,
}

impl Level {
    /// Creates an empty level over `grid`.
    pub fn new(number: u32, grid: Grid, player_start: Position) -> Self {
        Self {
            number,
            grid,
            agents: Vec::new(),
            chests: Vec::new(),
            portal: None,
            player_start,
        }
    }

    /// Side length of the play area.
    pub fn map_size(&self) -> u32 {
        self.grid.size()
    }

    /// Whether this level holds a boss.
    pub fn is_boss_level(&self) -> bool {
        self.boss().is_some()
    }

    /// Regular enemies, in action order.
    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.agents.iter().filter_map(|agent| match agent {
            Agent::Enemy(enemy) => Some(enemy),
            Agent::Boss(_) => None,
        })
    }

    /// The boss, if it is still alive on this level.
    pub fn boss(&self) -> Option<&Boss> {
        self.agents.iter().find_map(|agent| match agent {
            Agent::Boss(boss) => Some(boss),
            Agent::Enemy(_) => None,
        })
    }

    /// Index into `agents` of whatever stands on `pos`.
    pub fn agent_index_at(&self, pos: Position) -> Option<usize> {
        self.agents.iter().position(|agent| agent.position() == pos)
    }

    /// Checks whether any agent stands on `pos`.
    pub fn is_occupied_by_agent(&self, pos: Position) -> bool {
        self.agent_index_at(pos).is_some()
    }

    /// Index into `chests` of the chest on `pos`.
    pub fn chest_index_at(&self, pos: Position) -> Option<usize> {
        self.chests.iter().position(|chest| chest.position == pos)
    }

    /// Obstacle cells in row-major order.
    pub fn obstacles(&self) -> Vec<Position> {
        self.grid.obstacles()
    }
}
