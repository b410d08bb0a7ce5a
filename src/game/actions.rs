//! # Actions and Events
//!
//! Player actions are the only way state changes. Each resolved action
//! yields a [`TurnResult`] holding the events it caused, in order.

use crate::{AgentKind, Direction, GameCompletionState, Item, Position};
use serde::{Deserialize, Serialize};

/// A discrete player command from the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "direction", rename_all = "snake_case")]
pub enum PlayerAction {
    /// Step one cell; also turns the player to face that way
    Move(Direction),
    /// Strike the cell the player is facing
    Attack,
    ToggleInventory,
    SelectPrev,
    SelectNext,
    EquipSelected,
}

impl PlayerAction {
    /// Whether this action can trigger an agent turn.
    pub fn is_turn_action(&self) -> bool {
        matches!(self, PlayerAction::Move(_) | PlayerAction::Attack)
    }
}

/// Something that happened while resolving an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerMoved { from: Position, to: Position },
    /// The attempted target was out of bounds or occupied
    MoveBlocked { target: Position },
    ChestOpened { position: Position, item: Item },
    PortalReached { position: Position },
    /// The attack hit nothing
    AttackMissed { target: Position },
    EnemyDefeated { position: Position },
    BossDamaged { damage: i32, remaining_health: i32 },
    BossDefeated { position: Position },
    AgentMoved { kind: AgentKind, from: Position, to: Position },
    PlayerDamaged { source: AgentKind, damage: i32, remaining_health: i32 },
    PlayerDefeated,
    LevelAdvanced { level: u32 },
    InventoryToggled { open: bool },
    SelectionChanged { index: usize },
    ItemEquipped { item: Item },
}

/// Outcome of a single [`PlayerAction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
    /// Whether enemies and the boss acted
    pub agents_acted: bool,
    /// Level number after the action resolved
    pub level: u32,
    /// Session state after the action resolved
    pub completion: GameCompletionState,
}

impl TurnResult {
    /// Whether the action moved the player to a new level.
    pub fn level_advanced(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, GameEvent::LevelAdvanced { .. }))
    }

    /// Total damage the player took during this action.
    pub fn damage_taken(&self) -> i32 {
        self.events
            .iter()
            .map(|event| match event {
                GameEvent::PlayerDamaged { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_actions() {
        assert!(PlayerAction::Move(Direction::Up).is_turn_action());
        assert!(PlayerAction::Attack.is_turn_action());
        assert!(!PlayerAction::ToggleInventory.is_turn_action());
        assert!(!PlayerAction::EquipSelected.is_turn_action());
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&PlayerAction::Move(Direction::Left)).unwrap();
        assert_eq!(json, r#"{"action":"move","direction":"left"}"#);

        let action: PlayerAction = serde_json::from_str(r#"{"action":"attack"}"#).unwrap();
        assert_eq!(action, PlayerAction::Attack);
    }

    #[test]
    fn test_turn_result_helpers() {
        let result = TurnResult {
            events: vec![
                GameEvent::PlayerDamaged {
                    source: AgentKind::Enemy,
                    damage: 3,
                    remaining_health: 97,
                },
                GameEvent::PlayerDamaged {
                    source: AgentKind::Enemy,
                    damage: 3,
                    remaining_health: 94,
                },
                GameEvent::LevelAdvanced { level: 2 },
            ],
            agents_acted: true,
            level: 2,
            completion: GameCompletionState::Playing,
        };

        assert!(result.level_advanced());
        assert_eq!(result.damage_taken(), 6);
    }
}
