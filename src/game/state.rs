//! # Game State Module
//!
//! Central game state and the turn engine.
//!
//! [`GameState`] exclusively owns the current level, the player, the
//! inventory and the session RNG. The only way to change it is
//! [`GameState::apply_player_action`], which resolves one player action and
//! the agent reactions that follow it, and reports what happened as a
//! [`TurnResult`].

use crate::game::behavior::{damage_message, take_agent_turns};
use crate::generation::{items::ItemGenerator, utils};
use crate::{
    config, Agent, CrawlerError, CrawlerResult, Direction, GameEvent, GameSnapshot,
    GenerationConfig, Generator, Inventory, Level, LevelBuilder, Player, PlayerAction, TurnResult,
};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Central game state for one play session.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The level being played
    pub level: Level,
    /// The player character
    pub player: Player,
    /// Items collected so far
    pub inventory: Inventory,
    /// Message currently on screen, if any
    pub message: Option<Message>,
    /// Current game completion state
    pub completion_state: GameCompletionState,
    /// Number of turns in which the agents acted
    pub turn_number: u64,
    /// Game statistics for player progress
    pub statistics: GameStatistics,
    builder: LevelBuilder,
    items: ItemGenerator,
    rng: StdRng,
}

/// A transient on-screen message.
///
/// Each new message replaces the previous one. Nothing is queued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    /// Frames left before the message disappears
    pub ticks: u32,
}

impl Message {
    pub fn new(text: impl Into<String>, ticks: u32) -> Self {
        Self {
            text: text.into(),
            ticks,
        }
    }
}

/// Game statistics tracking player progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatistics {
    /// Number of regular enemies defeated
    pub enemies_defeated: u32,
    /// Number of chests opened
    pub chests_opened: u32,
    /// Number of items equipped
    pub items_used: u32,
    /// Total damage dealt to bosses
    pub boss_damage_dealt: u64,
    /// Total damage taken
    pub damage_taken: u64,
    /// Successful player moves
    pub steps_taken: u64,
    /// Number of level advances
    pub levels_cleared: u32,
    /// Deepest level reached
    pub deepest_level: u32,
    /// Turns in which the agents acted
    pub turns: u64,
}

impl GameStatistics {
    /// Creates new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates statistics based on a game event.
    pub fn update_from_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::PlayerMoved { .. } => {
                self.steps_taken += 1;
            }
            GameEvent::ChestOpened { .. } => {
                self.chests_opened += 1;
            }
            GameEvent::EnemyDefeated { .. } => {
                self.enemies_defeated += 1;
            }
            GameEvent::BossDamaged { damage, .. } => {
                self.boss_damage_dealt += (*damage).max(0) as u64;
            }
            GameEvent::PlayerDamaged { damage, .. } => {
                self.damage_taken += (*damage).max(0) as u64;
            }
            GameEvent::LevelAdvanced { level } => {
                self.levels_cleared += 1;
                self.deepest_level = self.deepest_level.max(*level);
            }
            GameEvent::ItemEquipped { .. } => {
                self.items_used += 1;
            }
            _ => {}
        }
    }
}

/// Game completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameCompletionState {
    /// Game is still in progress
    Playing,
    /// Player health dropped to zero
    PlayerDied,
}

/// What a landed player attack did to its target.
enum AttackOutcome {
    EnemyKilled,
    BossHurt { remaining_health: i32 },
    BossKilled { remaining_health: i32 },
}

impl GameState {
    /// Starts a new session on level 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::{GameState, GenerationConfig};
    ///
    /// let state = GameState::new(GenerationConfig::new(42)).unwrap();
    /// assert_eq!(state.level_number(), 1);
    /// assert_eq!(state.player.position, state.level.player_start);
    /// ```
    pub fn new(config: GenerationConfig) -> CrawlerResult<Self> {
        Self::new_at_level(config, 1)
    }

    /// Starts a new session on an arbitrary level.
    pub fn new_at_level(config: GenerationConfig, level_number: u32) -> CrawlerResult<Self> {
        if level_number == 0 {
            return Err(CrawlerError::InvalidState(
                "levels are numbered from 1".to_string(),
            ));
        }
        let builder = LevelBuilder::new(config)?;
        let mut rng = utils::create_rng(builder.config());
        let level = builder.build(level_number, &mut rng)?;
        Ok(Self::assemble(builder, level, rng))
    }

    /// Starts a new session on a prebuilt level.
    ///
    /// The level is used as given. Levels built after it come from `config`.
    pub fn with_level(config: GenerationConfig, level: Level) -> CrawlerResult<Self> {
        let builder = LevelBuilder::new(config)?;
        if !level.grid.is_walkable(level.player_start) {
            return Err(CrawlerError::InvalidState(format!(
                "player start {} is not walkable",
                level.player_start
            )));
        }
        let rng = utils::create_rng(builder.config());
        Ok(Self::assemble(builder, level, rng))
    }

    fn assemble(builder: LevelBuilder, level: Level, rng: StdRng) -> Self {
        log::info!(
            "starting session with seed {} on level {}",
            builder.config().seed,
            level.number
        );
        let statistics = GameStatistics {
            deepest_level: level.number,
            ..GameStatistics::new()
        };
        Self {
            player: Player::new(level.player_start),
            level,
            inventory: Inventory::new(),
            message: None,
            completion_state: GameCompletionState::Playing,
            turn_number: 0,
            statistics,
            builder,
            items: ItemGenerator::new(),
            rng,
        }
    }

    pub fn config(&self) -> &GenerationConfig {
        self.builder.config()
    }

    pub fn level_number(&self) -> u32 {
        self.level.number
    }

    /// Checks if the game has ended.
    pub fn is_game_ended(&self) -> bool {
        self.completion_state != GameCompletionState::Playing
    }

    /// Read-only view of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(self)
    }

    /// Counts one rendered frame off the current message.
    pub fn tick(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.ticks = message.ticks.saturating_sub(1);
            if message.ticks == 0 {
                self.message = None;
            }
        }
    }

    /// Resolves one player action.
    ///
    /// A move that changes the player's cell gives every agent one turn
    /// before the chest and portal on the target cell are resolved. An
    /// attack resolves fully, level advance included, before the agents
    /// act. Inventory actions never give the agents a turn.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlerError::SessionOver`] once the player has been
    /// defeated, and propagates level generation failures on level advance.
    pub fn apply_player_action(&mut self, action: PlayerAction) -> CrawlerResult<TurnResult> {
        if self.is_game_ended() {
            return Err(CrawlerError::SessionOver);
        }

        let mut events = Vec::new();
        let agents_acted = match action {
            PlayerAction::Move(direction) => self.resolve_move(direction, &mut events)?,
            PlayerAction::Attack => {
                self.resolve_attack(&mut events)?;
                self.run_agent_turn(&mut events);
                true
            }
            PlayerAction::ToggleInventory => {
                let open = self.inventory.toggle();
                events.push(GameEvent::InventoryToggled { open });
                false
            }
            PlayerAction::SelectPrev => {
                let index = self.inventory.select_prev();
                events.push(GameEvent::SelectionChanged { index });
                false
            }
            PlayerAction::SelectNext => {
                let index = self.inventory.select_next();
                events.push(GameEvent::SelectionChanged { index });
                false
            }
            PlayerAction::EquipSelected => {
                self.equip_selected(&mut events);
                false
            }
        };

        for event in &events {
            self.statistics.update_from_event(event);
        }

        log::debug!(
            "turn {}: {:?} produced {} events",
            self.turn_number,
            action,
            events.len()
        );

        Ok(TurnResult {
            events,
            agents_acted,
            level: self.level.number,
            completion: self.completion_state,
        })
    }

    /// Returns whether the player changed cell, which is also whether the
    /// agents acted.
    fn resolve_move(
        &mut self,
        direction: Direction,
        events: &mut Vec<GameEvent>,
    ) -> CrawlerResult<bool> {
        self.player.facing = direction;
        let from = self.player.position;
        let target = from.step(direction);

        let legal = self.level.grid.is_walkable(target) && !self.level.is_occupied_by_agent(target);
        if legal {
            self.player.position = target;
            events.push(GameEvent::PlayerMoved { from, to: target });
            self.run_agent_turn(events);
            if self.is_game_ended() {
                return Ok(true);
            }
        } else {
            events.push(GameEvent::MoveBlocked { target });
        }

        // Chest and portal react to the attempted cell, legal or not
        if let Some(index) = self.level.chest_index_at(target) {
            self.open_chest(index, events)?;
        }
        if self.level.portal == Some(target) {
            events.push(GameEvent::PortalReached { position: target });
            self.advance_level(events)?;
        }

        Ok(legal)
    }

    fn open_chest(&mut self, index: usize, events: &mut Vec<GameEvent>) -> CrawlerResult<()> {
        let chest = self.level.chests.remove(index);
        let item = self.items.generate(self.builder.config(), &mut self.rng)?;
        self.set_message(format!("You picked up {}!", item.name), config::MESSAGE_TICKS);
        self.inventory.add(item.clone());
        events.push(GameEvent::ChestOpened {
            position: chest.position,
            item,
        });
        Ok(())
    }

    fn resolve_attack(&mut self, events: &mut Vec<GameEvent>) -> CrawlerResult<()> {
        let target = self.player.attack_target();
        let Some(index) = self.level.agent_index_at(target) else {
            events.push(GameEvent::AttackMissed { target });
            return Ok(());
        };

        let damage = self.player.stats.attack;
        let outcome = match &mut self.level.agents[index] {
            Agent::Enemy(_) => AttackOutcome::EnemyKilled,
            Agent::Boss(boss) => {
                if boss.take_damage(damage) {
                    AttackOutcome::BossKilled {
                        remaining_health: boss.health,
                    }
                } else {
                    AttackOutcome::BossHurt {
                        remaining_health: boss.health,
                    }
                }
            }
        };

        match outcome {
            AttackOutcome::EnemyKilled => {
                self.level.agents.remove(index);
                events.push(GameEvent::EnemyDefeated { position: target });
                self.set_message("You defeated an enemy!", config::MESSAGE_TICKS);
            }
            AttackOutcome::BossHurt { remaining_health } => {
                events.push(GameEvent::BossDamaged {
                    damage,
                    remaining_health,
                });
                self.set_message(
                    format!("You hit the boss for {} damage!", damage),
                    config::MESSAGE_TICKS,
                );
            }
            AttackOutcome::BossKilled { remaining_health } => {
                self.level.agents.remove(index);
                events.push(GameEvent::BossDamaged {
                    damage,
                    remaining_health,
                });
                events.push(GameEvent::BossDefeated { position: target });
                self.set_message("You defeated the boss!", config::LONG_MESSAGE_TICKS);
                log::info!("boss defeated on level {}", self.level.number);
                self.advance_level(events)?;
            }
        }
        Ok(())
    }

    fn equip_selected(&mut self, events: &mut Vec<GameEvent>) {
        let Some(item) = self.inventory.take_selected() else {
            return;
        };
        self.player.stats.apply(item.effect);
        self.set_message(format!("You used {}.", item.name), config::MESSAGE_TICKS);
        events.push(GameEvent::ItemEquipped { item });
    }

    fn run_agent_turn(&mut self, events: &mut Vec<GameEvent>) {
        self.turn_number += 1;
        self.statistics.turns += 1;

        for event in take_agent_turns(&mut self.level, &mut self.player, &mut self.rng) {
            if let GameEvent::PlayerDamaged { source, damage, .. } = event {
                self.set_message(damage_message(source, damage), config::MESSAGE_TICKS);
            }
            events.push(event);
        }

        if !self.player.stats.is_alive() {
            self.completion_state = GameCompletionState::PlayerDied;
            self.set_message("You have been defeated!", config::LONG_MESSAGE_TICKS);
            events.push(GameEvent::PlayerDefeated);
            log::info!(
                "player defeated on level {} after {} turns",
                self.level.number,
                self.turn_number
            );
        }
    }

    /// Replaces the level with a freshly built `level_number + 1`.
    ///
    /// Stats, inventory and facing carry over; the player returns to the
    /// level's start cell.
    fn advance_level(&mut self, events: &mut Vec<GameEvent>) -> CrawlerResult<()> {
        let next = self.level.number + 1;
        self.level = self.builder.build(next, &mut self.rng)?;
        self.player.position = self.level.player_start;
        events.push(GameEvent::LevelAdvanced { level: next });
        log::info!("advanced to level {}", next);
        Ok(())
    }

    fn set_message(&mut self, text: impl Into<String>, ticks: u32) {
        self.message = Some(Message::new(text, ticks));
    }
}
