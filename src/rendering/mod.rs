//! # Rendering Module
//!
//! The renderer-facing side of the core: read-only snapshots, sprite
//! categories and the asset registry a renderer draws them with.
//!
//! Screen output itself belongs to the renderer. [`TextDisplay`] is the
//! plain-text renderer used by the command-line driver.

pub mod display;
pub mod snapshot;

pub use display::*;
pub use snapshot::*;

use crate::AgentKind;
use serde::{Deserialize, Serialize};

/// Visual category of everything drawn on top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    Player,
    Enemy,
    Boss,
    Chest,
    Portal,
}

impl From<AgentKind> for SpriteKind {
    fn from(kind: AgentKind) -> Self {
        match kind {
            AgentKind::Enemy => SpriteKind::Enemy,
            AgentKind::Boss => SpriteKind::Boss,
        }
    }
}

/// Source of the visuals a renderer draws with.
///
/// Renderers receive an implementation instead of loading assets
/// themselves, so the same snapshot can be drawn with different tile sets.
pub trait AssetRegistry {
    /// Glyph for a sprite category.
    fn glyph(&self, kind: SpriteKind) -> char;

    /// Glyph for obstacles and the border ring.
    fn wall_glyph(&self) -> char {
        '#'
    }

    /// Glyph for open floor.
    fn floor_glyph(&self) -> char {
        '.'
    }
}

/// The default single-character tile set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiAssets;

impl AssetRegistry for AsciiAssets {
    fn glyph(&self, kind: SpriteKind) -> char {
        match kind {
            SpriteKind::Player => '@',
            SpriteKind::Enemy => 'e',
            SpriteKind::Boss => 'B',
            SpriteKind::Chest => 'C',
            SpriteKind::Portal => 'O',
        }
    }
}
