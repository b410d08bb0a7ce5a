//! # Entities
//!
//! The player, the agents that hunt them, chests and the items chests hold.

use crate::config;
use crate::{Direction, Position};
use serde::{Deserialize, Serialize};

/// Default regular enemy health. Never consulted: enemies die in one hit.
pub const ENEMY_HEALTH: i32 = 30;
/// Default regular enemy attack damage.
pub const ENEMY_ATTACK: i32 = 3;
/// Default boss health.
pub const BOSS_HEALTH: i32 = 100;
/// Default boss attack damage.
pub const BOSS_ATTACK: i32 = 8;
/// Default chance per turn that the boss moves.
pub const BOSS_MOVEMENT_SPEED: f64 = 0.5;

/// Player combat statistics. These persist across levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: i32,
    pub attack: i32,
    /// Tracked and raised by shields, but not applied to incoming damage.
    pub defense: i32,
}

impl PlayerStats {
    /// Applies a single item effect.
    ///
    /// # Examples
    ///
    /// ```
    /// use mazecrawl::{ItemEffect, PlayerStats};
    ///
    /// let mut stats = PlayerStats { health: 95, attack: 5, defense: 1 };
    /// stats.apply(ItemEffect::Healing(20));
    /// assert_eq!(stats.health, 100);
    /// ```
    pub fn apply(&mut self, effect: ItemEffect) {
        match effect {
            ItemEffect::AttackBonus(bonus) => self.attack += bonus,
            ItemEffect::DefenseBonus(bonus) => self.defense += bonus,
            ItemEffect::Healing(amount) => {
                self.health = (self.health + amount).min(config::MAX_PLAYER_HEALTH);
            }
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: config::DEFAULT_PLAYER_HEALTH,
            attack: config::DEFAULT_PLAYER_ATTACK,
            defense: config::DEFAULT_PLAYER_DEFENSE,
        }
    }
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    /// Direction of the last move attempt; attacks land on the cell ahead.
    pub facing: Direction,
    pub stats: PlayerStats,
}

impl Player {
    /// Creates a player with default stats, facing down.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            facing: Direction::Down,
            stats: PlayerStats::default(),
        }
    }

    /// The cell an attack would hit.
    pub fn attack_target(&self) -> Position {
        self.position.step(self.facing)
    }
}

/// A regular enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub position: Position,
    pub health: i32,
    pub attack: i32,
}

impl Enemy {
    pub fn new(position: Position) -> Self {
        Self::with_stats(position, ENEMY_HEALTH, ENEMY_ATTACK)
    }

    pub fn with_stats(position: Position, health: i32, attack: i32) -> Self {
        Self {
            position,
            health,
            attack,
        }
    }
}

/// The boss guarding the boss level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Boss {
    pub position: Position,
    pub health: i32,
    pub attack: i32,
    /// Probability in `[0, 1]` that the boss moves on a given turn
    pub movement_speed: f64,
}

impl Boss {
    pub fn new(position: Position) -> Self {
        Self::with_stats(position, BOSS_HEALTH, BOSS_ATTACK, BOSS_MOVEMENT_SPEED)
    }

    pub fn with_stats(position: Position, health: i32, attack: i32, movement_speed: f64) -> Self {
        Self {
            position,
            health,
            attack,
            movement_speed,
        }
    }

    /// Subtracts `damage` and reports whether the boss is defeated.
    pub fn take_damage(&mut self, damage: i32) -> bool {
        self.health -= damage;
        self.health <= 0
    }
}

/// Discriminant of [`Agent`], used in events and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Enemy,
    Boss,
}

/// Anything that hunts the player.
///
/// All agents share the adjacent-attack capability. Their movement policies
/// differ and live in [`crate::game::behavior`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Agent {
    Enemy(Enemy),
    Boss(Boss),
}

impl Agent {
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Enemy(_) => AgentKind::Enemy,
            Agent::Boss(_) => AgentKind::Boss,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Agent::Enemy(enemy) => enemy.position,
            Agent::Boss(boss) => boss.position,
        }
    }

    pub fn set_position(&mut self, position: Position) {
        match self {
            Agent::Enemy(enemy) => enemy.position = position,
            Agent::Boss(boss) => boss.position = position,
        }
    }

    /// Damage dealt by one hit from this agent.
    pub fn attack_power(&self) -> i32 {
        match self {
            Agent::Enemy(enemy) => enemy.attack,
            Agent::Boss(boss) => boss.attack,
        }
    }

    /// Returns the damage this agent deals if it stands next to `target`.
    pub fn adjacent_attack(&self, target: Position) -> Option<i32> {
        if self.position().is_adjacent(target) {
            Some(self.attack_power())
        } else {
            None
        }
    }
}

/// An unopened chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chest {
    pub position: Position,
}

impl Chest {
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// The single stat change an item applies when equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffect {
    AttackBonus(i32),
    DefenseBonus(i32),
    Healing(i32),
}

/// An item found in a chest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub description: String,
    pub effect: ItemEffect,
}

impl Item {
    pub fn new(name: impl Into<String>, description: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player = Player::new(Position::new(1, 1));
        assert_eq!(player.facing, Direction::Down);
        assert_eq!(player.stats.health, 100);
        assert_eq!(player.stats.attack, 5);
        assert_eq!(player.stats.defense, 1);
        assert_eq!(player.attack_target(), Position::new(2, 1));
    }

    #[test]
    fn test_stat_effects() {
        let mut stats = PlayerStats::default();
        stats.apply(ItemEffect::AttackBonus(2));
        stats.apply(ItemEffect::DefenseBonus(3));
        assert_eq!(stats.attack, 7);
        assert_eq!(stats.defense, 4);

        stats.health = 50;
        stats.apply(ItemEffect::Healing(20));
        assert_eq!(stats.health, 70);
        stats.apply(ItemEffect::Healing(40));
        assert_eq!(stats.health, 100);
    }

    #[test]
    fn test_boss_damage() {
        let mut boss = Boss::new(Position::new(5, 5));
        assert!(!boss.take_damage(60));
        assert_eq!(boss.health, 40);
        assert!(boss.take_damage(40));
    }

    #[test]
    fn test_agent_adjacent_attack() {
        let enemy = Agent::Enemy(Enemy::new(Position::new(3, 3)));
        let boss = Agent::Boss(Boss::new(Position::new(3, 3)));

        assert_eq!(enemy.adjacent_attack(Position::new(3, 4)), Some(ENEMY_ATTACK));
        assert_eq!(enemy.adjacent_attack(Position::new(4, 4)), None);
        assert_eq!(boss.adjacent_attack(Position::new(2, 3)), Some(BOSS_ATTACK));
        assert_eq!(boss.kind(), AgentKind::Boss);
    }

    #[test]
    fn test_agent_set_position() {
        let mut agent = Agent::Enemy(Enemy::new(Position::new(1, 1)));
        agent.set_position(Position::new(1, 2));
        assert_eq!(agent.position(), Position::new(1, 2));
    }
}
