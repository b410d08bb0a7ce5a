//! # Input Module
//!
//! Input handling and command parsing for player interactions.
//!
//! Raw keys become [`PlayerInput`] values; [`InputHandler`] then turns them
//! into core [`PlayerAction`]s depending on whether the inventory screen is
//! open.

pub mod commands;

pub use commands::*;

use crate::{CrawlerResult, Direction, GameState, PlayerAction};

/// Input handler for processing player commands.
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::InputHandler;
    ///
    /// let input_handler = InputHandler::new();
    /// assert!(input_handler.vi_keys_enabled);
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Parses a single key name.
    pub fn parse_key(&self, key: &str) -> Option<PlayerInput> {
        parse_command(key, self.vi_keys_enabled)
    }

    /// Parses a script of key names.
    pub fn parse_script(&self, script: &str) -> CrawlerResult<Vec<PlayerInput>> {
        parse_script(script, self.vi_keys_enabled)
    }

    /// Converts player input to a game action.
    ///
    /// With the inventory open, up and down move the selection, equip uses
    /// the selected item and the inventory key closes the screen. Otherwise
    /// movement keys move, attack attacks and the inventory key opens the
    /// screen. Inputs with no meaning in the current mode map to `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::{Direction, InputHandler, PlayerAction, PlayerInput};
    ///
    /// let handler = InputHandler::new();
    /// let up = PlayerInput::Move(Direction::Up);
    /// assert_eq!(handler.input_to_action(up, false), Some(PlayerAction::Move(Direction::Up)));
    /// assert_eq!(handler.input_to_action(up, true), Some(PlayerAction::SelectPrev));
    /// ```
    pub fn input_to_action(&self, input: PlayerInput, inventory_open: bool) -> Option<PlayerAction> {
        match (input, inventory_open) {
            (PlayerInput::Inventory, _) => Some(PlayerAction::ToggleInventory),

            (PlayerInput::Move(Direction::Up), true) => Some(PlayerAction::SelectPrev),
            (PlayerInput::Move(Direction::Down), true) => Some(PlayerAction::SelectNext),
            (PlayerInput::Equip, true) => Some(PlayerAction::EquipSelected),

            (PlayerInput::Move(direction), false) => Some(PlayerAction::Move(direction)),
            (PlayerInput::Attack, false) => Some(PlayerAction::Attack),

            // Other inputs don't translate to game actions in this mode
            _ => None,
        }
    }

    /// Converts player input to a game action for the current state.
    pub fn action_for(&self, input: PlayerInput, game_state: &GameState) -> Option<PlayerAction> {
        self.input_to_action(input, game_state.inventory.is_open())
    }
}

/// Player input types that can be processed by the input handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    /// Arrow or movement key
    Move(Direction),
    /// Attack the faced cell
    Attack,
    /// Open or close the inventory
    Inventory,
    /// Use the selected inventory item
    Equip,
    /// Quit the game
    Quit,
    /// Show help information
    Help,
}
