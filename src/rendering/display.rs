//! # Text Display
//!
//! Plain-text rendering of a [`GameSnapshot`] for terminals and logs.

use crate::rendering::{AsciiAssets, AssetRegistry, GameSnapshot};
use crate::{GameCompletionState, Position};

/// Draws snapshots as text using glyphs from an [`AssetRegistry`].
///
/// # Examples
///
/// ```
/// use mazecrawl::{GameState, GenerationConfig, TextDisplay};
///
/// let state = GameState::new(GenerationConfig::new(42)).unwrap();
/// let frame = TextDisplay::new().render(&state.snapshot());
/// assert!(frame.contains('@'));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextDisplay<R: AssetRegistry = AsciiAssets> {
    assets: R,
}

impl TextDisplay<AsciiAssets> {
    pub fn new() -> Self {
        Self::with_assets(AsciiAssets)
    }
}

impl<R: AssetRegistry> TextDisplay<R> {
    /// A display drawing with a custom tile set.
    pub fn with_assets(assets: R) -> Self {
        Self { assets }
    }

    /// Renders the map, including its border ring, followed by the status
    /// panel.
    pub fn render(&self, snapshot: &GameSnapshot) -> String {
        let mut out = self.render_map(snapshot);
        out.push_str(&self.render_status(snapshot));
        out
    }

    /// Renders only the map rows, one line per row.
    pub fn render_map(&self, snapshot: &GameSnapshot) -> String {
        let side = snapshot.map_size as usize + 2;
        let mut rows = vec![vec![self.assets.floor_glyph(); side]; side];

        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r == 0 || c == 0 || r == side - 1 || c == side - 1 {
                    *cell = self.assets.wall_glyph();
                }
            }
        }
        for &pos in &snapshot.obstacles {
            set_cell(&mut rows, pos, self.assets.wall_glyph());
        }
        // Later sprites draw over earlier ones
        for sprite in &snapshot.sprites {
            set_cell(&mut rows, sprite.position, self.assets.glyph(sprite.kind));
        }

        let mut out = String::with_capacity(side * (side + 1));
        for row in rows {
            out.extend(row);
            out.push('\n');
        }
        out
    }

    /// Renders the stats line, message, inventory and end-of-game notice.
    pub fn render_status(&self, snapshot: &GameSnapshot) -> String {
        let stats = &snapshot.stats;
        let mut out = format!(
            "Level {}  HP {}  ATK {}  DEF {}  Turn {}\n",
            snapshot.level, stats.health, stats.attack, stats.defense, snapshot.turn
        );

        if let Some(message) = &snapshot.message {
            out.push_str(&message.text);
            out.push('\n');
        }

        if let Some(inventory) = &snapshot.inventory {
            out.push_str("Inventory:\n");
            if inventory.items.is_empty() {
                out.push_str("  (empty)\n");
            }
            for (index, item) in inventory.items.iter().enumerate() {
                let marker = if index == inventory.selected { '>' } else { ' ' };
                out.push_str(&format!("{} {} - {}\n", marker, item.name, item.description));
            }
        }

        if snapshot.completion == GameCompletionState::PlayerDied {
            out.push_str("GAME OVER\n");
        }
        out
    }
}

fn set_cell(rows: &mut [Vec<char>], pos: Position, glyph: char) {
    if pos.row < 0 || pos.col < 0 {
        return;
    }
    if let Some(cell) = rows
        .get_mut(pos.row as usize)
        .and_then(|row| row.get_mut(pos.col as usize))
    {
        *cell = glyph;
    }
}
