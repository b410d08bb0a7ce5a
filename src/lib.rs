//! # Mazecrawl
//!
//! A turn-based maze dungeon crawler engine.
//!
//! ## Architecture Overview
//!
//! The crate is the simulation core of the game. Rendering and input polling
//! live outside of it and talk to the core through two narrow surfaces:
//!
//! - **Actions in**: discrete [`PlayerAction`] values (move, attack, inventory
//!   navigation) fed to [`GameState::apply_player_action`]
//! - **Snapshots out**: a read-only [`GameSnapshot`] describing everything a
//!   renderer needs for one frame
//!
//! Inside the core:
//!
//! - **Generation**: randomized-Prim maze carving, connectivity repair and
//!   entity placement, driven by an explicit seeded RNG
//! - **Game State**: the turn engine that resolves a player action and the
//!   enemy/boss reactions that follow it
//! - **Agent Behaviors**: greedy chase policies for enemies and the boss
//!
//! Every random decision flows through the `StdRng` owned by [`GameState`],
//! so a seed fully determines a session.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod utils;

pub use game::{
    // From actions
    GameEvent,
    PlayerAction,
    TurnResult,
    // From entities
    Agent,
    AgentKind,
    Boss,
    Chest,
    Enemy,
    Item,
    ItemEffect,
    Player,
    PlayerStats,
    // From inventory
    Inventory,
    // From state
    GameCompletionState,
    GameState,
    GameStatistics,
    Message,
    // From world
    Grid,
    Level,
    // Geometry
    Direction,
    Position,
};

pub use generation::{
    ensure_reachable, GenerationConfig, Generator, LevelBuilder, Maze, MazeGenerator,
};

pub use input::{InputHandler, PlayerInput};

pub use rendering::{AssetRegistry, GameSnapshot, SpriteKind, TextDisplay};

/// Core error type for the Mazecrawl engine.
#[derive(thiserror::Error, Debug)]
pub enum CrawlerError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration values are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Action cannot be performed
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// The player has been defeated; the session accepts no more actions
    #[error("Session is over: the player has been defeated")]
    SessionOver,
}

/// Result type used throughout the Mazecrawl codebase.
pub type CrawlerResult<T> = Result<T, CrawlerError>;

/// Version information for the game.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Default side length of the square play area
    pub const DEFAULT_MAP_SIZE: u32 = 10;

    /// Smallest play area the level builder accepts
    pub const MIN_MAP_SIZE: u32 = 4;

    /// Largest play area the level builder accepts
    pub const MAX_MAP_SIZE: u32 = 1024;

    /// Level number that holds the boss room
    pub const DEFAULT_BOSS_LEVEL: u32 = 5;

    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;

    /// Healing never raises health above this value
    pub const MAX_PLAYER_HEALTH: i32 = 100;

    /// Default player attack
    pub const DEFAULT_PLAYER_ATTACK: i32 = 5;

    /// Default player defense
    pub const DEFAULT_PLAYER_DEFENSE: i32 = 1;

    /// Display ticks for ordinary messages
    pub const MESSAGE_TICKS: u32 = 60;

    /// Display ticks for boss defeat and player defeat
    pub const LONG_MESSAGE_TICKS: u32 = 120;
}
