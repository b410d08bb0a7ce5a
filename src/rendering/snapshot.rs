//! # Game Snapshots
//!
//! Everything a renderer needs for one frame, detached from the live state.

use crate::rendering::SpriteKind;
use crate::{
    Direction, GameCompletionState, GameState, Item, Message, PlayerStats, Position,
};
use serde::{Deserialize, Serialize};

/// One drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    pub position: Position,
}

/// Inventory contents as shown on the inventory screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryView {
    pub items: Vec<Item>,
    pub selected: usize,
}

/// Read-only view of a [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub map_size: u32,
    pub level: u32,
    pub turn: u64,
    /// Obstacle cells in row-major order
    pub obstacles: Vec<Position>,
    /// In draw order: portal, chests, agents, then the player on top
    pub sprites: Vec<Sprite>,
    /// Present only while the inventory screen is open
    pub inventory: Option<InventoryView>,
    pub stats: PlayerStats,
    pub facing: Direction,
    pub message: Option<Message>,
    pub completion: GameCompletionState,
}

impl GameSnapshot {
    /// Captures the current frame of `state`.
    pub fn from_state(state: &GameState) -> Self {
        let level = &state.level;

        let mut sprites = Vec::with_capacity(level.agents.len() + level.chests.len() + 2);
        if let Some(portal) = level.portal {
            sprites.push(Sprite {
                kind: SpriteKind::Portal,
                position: portal,
            });
        }
        sprites.extend(level.chests.iter().map(|chest| Sprite {
            kind: SpriteKind::Chest,
            position: chest.position,
        }));
        sprites.extend(level.agents.iter().map(|agent| Sprite {
            kind: agent.kind().into(),
            position: agent.position(),
        }));
        sprites.push(Sprite {
            kind: SpriteKind::Player,
            position: state.player.position,
        });

        let inventory = state.inventory.is_open().then(|| InventoryView {
            items: state.inventory.items().to_vec(),
            selected: state.inventory.selected_index(),
        });

        Self {
            map_size: level.map_size(),
            level: level.number,
            turn: state.turn_number,
            obstacles: level.obstacles(),
            sprites,
            inventory,
            stats: state.player.stats,
            facing: state.player.facing,
            message: state.message.clone(),
            completion: state.completion_state,
        }
    }

    /// Positions of every sprite of `kind`.
    pub fn positions_of(&self, kind: SpriteKind) -> Vec<Position> {
        self.sprites
            .iter()
            .filter(|sprite| sprite.kind == kind)
            .map(|sprite| sprite.position)
            .collect()
    }

    pub fn to_json(&self) -> crate::CrawlerResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
