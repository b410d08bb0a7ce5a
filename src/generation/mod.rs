//! # Generation Module
//!
//! Procedural content generation: maze carving, connectivity repair,
//! encounter placement, chest loot and whole-level assembly.
//!
//! Every generator takes the RNG explicitly. Given the same
//! [`GenerationConfig`] and the same RNG state, generation is fully
//! reproducible.

pub mod connectivity;
pub mod encounters;
pub mod items;
pub mod level;
pub mod maze;

pub use connectivity::*;
pub use encounters::*;
pub use items::*;
pub use level::*;
pub use maze::*;

use crate::game::entities::{
    BOSS_ATTACK, BOSS_HEALTH, BOSS_MOVEMENT_SPEED, ENEMY_ATTACK, ENEMY_HEALTH,
};
use crate::{config, CrawlerError, CrawlerResult, Position};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Configuration for procedural generation.
///
/// Controls the play area size, which level holds the boss, how many
/// entities are placed and how loosely the maze is carved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Side length of the square play area
    pub map_size: u32,
    /// Level number that becomes the boss room
    pub boss_level: u32,
    /// Enemies per level before adding the level number
    pub base_enemy_count: usize,
    /// Chests per non-boss level
    pub chest_count: usize,
    /// Chance (0.0 to 1.0) that an eligible frontier cell is carved
    pub carve_probability: f64,
    /// Where the player enters every level
    pub player_start: Position,
    /// Regular enemy health
    pub enemy_health: i32,
    /// Regular enemy attack damage
    pub enemy_attack: i32,
    /// Boss health
    pub boss_health: i32,
    /// Boss attack damage
    pub boss_attack: i32,
    /// Chance (0.0 to 1.0) that the boss moves on a turn
    pub boss_movement_speed: f64,
}

impl GenerationConfig {
    /// Creates the standard configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(42);
    /// assert_eq!(config.map_size, 10);
    /// assert_eq!(config.boss_level, 5);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            map_size: config::DEFAULT_MAP_SIZE,
            boss_level: config::DEFAULT_BOSS_LEVEL,
            base_enemy_count: 2,
            chest_count: 3,
            carve_probability: 0.9,
            player_start: Position::new(1, 1),
            enemy_health: ENEMY_HEALTH,
            enemy_attack: ENEMY_ATTACK,
            boss_health: BOSS_HEALTH,
            boss_attack: BOSS_ATTACK,
            boss_movement_speed: BOSS_MOVEMENT_SPEED,
        }
    }

    /// Creates a configuration for testing with a smaller play area.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            map_size: 8,
            ..Self::new(seed)
        }
    }

    /// Number of enemies placed on `level_number`, before clamping to the
    /// free cells available.
    pub fn enemy_count(&self, level_number: u32) -> usize {
        self.base_enemy_count + level_number as usize
    }

    /// Cell the boss spawns on: the center of the play area.
    pub fn boss_spawn(&self) -> Position {
        let mid = (self.map_size / 2) as i32;
        Position::new(mid, mid)
    }

    /// Whether `level_number` is the boss room.
    pub fn is_boss_level(&self, level_number: u32) -> bool {
        level_number == self.boss_level
    }

    /// Checks that every value is usable by the generators.
    pub fn validate(&self) -> CrawlerResult<()> {
        if self.map_size < config::MIN_MAP_SIZE {
            return Err(CrawlerError::InvalidConfig(format!(
                "map_size must be at least {}, got {}",
                config::MIN_MAP_SIZE,
                self.map_size
            )));
        }
        if self.map_size > config::MAX_MAP_SIZE {
            return Err(CrawlerError::InvalidConfig(format!(
                "map_size must be at most {}, got {}",
                config::MAX_MAP_SIZE,
                self.map_size
            )));
        }
        if self.boss_level == 0 {
            return Err(CrawlerError::InvalidConfig(
                "boss_level must be 1 or greater".to_string(),
            ));
        }
        for (name, value) in [
            ("carve_probability", self.carve_probability),
            ("boss_movement_speed", self.boss_movement_speed),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CrawlerError::InvalidConfig(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }
        if !self.player_start.in_play_area(self.map_size) {
            return Err(CrawlerError::InvalidConfig(format!(
                "player_start {} lies outside a {}x{} play area",
                self.player_start, self.map_size, self.map_size
            )));
        }
        if self.player_start == self.boss_spawn() {
            return Err(CrawlerError::InvalidConfig(format!(
                "player_start {} collides with the boss spawn",
                self.player_start
            )));
        }
        Ok(())
    }

    /// Loads a configuration from JSON. Missing fields take default values.
    pub fn from_json(json: &str) -> CrawlerResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Trait for procedural generators.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> CrawlerResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> CrawlerResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
