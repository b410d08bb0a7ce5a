//! # Level Building
//!
//! Turns a level number into a ready-to-play [`Level`].
//!
//! Regular levels are carved mazes populated with enemies, chests and a
//! portal, then repaired so the portal is reachable. The boss level is an
//! open arena holding only the boss.

use crate::generation::{
    ensure_reachable, place_entities, spawn_boss, spawn_enemies, MazeGenerator,
};
use crate::{
    Chest, CrawlerError, CrawlerResult, GenerationConfig, Generator, Grid, Level,
};
use rand::rngs::StdRng;

/// Builds levels from a fixed [`GenerationConfig`].
#[derive(Debug, Clone)]
pub struct LevelBuilder {
    config: GenerationConfig,
    maze_generator: MazeGenerator,
    /// Mazes carved per level before giving up on finding room for a portal
    pub max_maze_attempts: u32,
}

impl LevelBuilder {
    /// Creates a builder, rejecting unusable configurations up front.
    pub fn new(config: GenerationConfig) -> CrawlerResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            maze_generator: MazeGenerator::new(),
            max_maze_attempts: 20,
        })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Builds level `level_number`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::{generation::utils, GenerationConfig, LevelBuilder};
    ///
    /// let config = GenerationConfig::new(7);
    /// let mut rng = utils::create_rng(&config);
    /// let builder = LevelBuilder::new(config).unwrap();
    ///
    /// let level = builder.build(1, &mut rng).unwrap();
    /// assert_eq!(level.enemies().count(), 3);
    /// assert!(level.portal.is_some());
    /// ```
    pub fn build(&self, level_number: u32, rng: &mut StdRng) -> CrawlerResult<Level> {
        let level = if self.config.is_boss_level(level_number) {
            self.build_boss_level(level_number)?
        } else {
            self.build_maze_level(level_number, rng)?
        };

        log::info!(
            "built level {}: {} obstacles, {} agents, {} chests, portal {:?}",
            level.number,
            level.grid.obstacles().len(),
            level.agents.len(),
            level.chests.len(),
            level.portal
        );
        Ok(level)
    }

    fn build_boss_level(&self, level_number: u32) -> CrawlerResult<Level> {
        let grid = Grid::open(self.config.map_size);
        let mut level = Level::new(level_number, grid, self.config.player_start);
        level
            .agents
            .push(spawn_boss(self.config.boss_spawn(), &self.config));
        Ok(level)
    }

    fn build_maze_level(&self, level_number: u32, rng: &mut StdRng) -> CrawlerResult<Level> {
        let config = &self.config;
        let start = config.player_start;

        for attempt in 1..=self.max_maze_attempts {
            let mut grid = self.maze_generator.generate(config, rng)?.grid;
            // The player always enters on open ground
            grid.set_walkable(start, true);

            let placement = place_entities(
                &grid.open_positions(),
                start,
                config.enemy_count(level_number),
                config.chest_count,
                rng,
            );
            let Some(portal) = placement.portal else {
                log::warn!(
                    "maze {} for level {} left no room for a portal, carving again",
                    attempt,
                    level_number
                );
                continue;
            };

            let obstacles = ensure_reachable(start, portal, grid.obstacles(), config.map_size, rng);
            let grid = Grid::from_obstacles(config.map_size, &obstacles);

            let mut level = Level::new(level_number, grid, start);
            level.agents = spawn_enemies(&placement.enemies, config);
            level.chests = placement.chests.iter().copied().map(Chest::new).collect();
            level.portal = Some(portal);
            return Ok(level);
        }

        Err(CrawlerError::GenerationFailed(format!(
            "level {} has no open cell left for the portal after {} mazes",
            level_number, self.max_maze_attempts
        )))
    }
}
