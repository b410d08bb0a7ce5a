//! # Encounter Placement
//!
//! Uniform sampling of enemy, chest and portal cells, and construction of
//! the agents that occupy them.

use crate::{Agent, Boss, Enemy, GenerationConfig, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Cells chosen for everything placed on a regular level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub enemies: Vec<Position>,
    pub chests: Vec<Position>,
    /// None only when every open cell went to enemies and chests
    pub portal: Option<Position>,
}

/// Samples distinct cells for enemies, then chests, then the portal.
///
/// Every draw is uniform and without replacement from `open`, skipping the
/// player start and anything placed before it. Requested counts are clamped
/// to the cells left.
pub fn place_entities(
    open: &[Position],
    player_start: Position,
    enemy_count: usize,
    chest_count: usize,
    rng: &mut StdRng,
) -> Placement {
    let candidates: Vec<Position> = open
        .iter()
        .copied()
        .filter(|&pos| pos != player_start)
        .collect();

    let enemies = sample(&candidates, enemy_count, rng);

    let remaining: Vec<Position> = candidates
        .into_iter()
        .filter(|pos| !enemies.contains(pos))
        .collect();
    let chests = sample(&remaining, chest_count, rng);

    let remaining: Vec<Position> = remaining
        .into_iter()
        .filter(|pos| !chests.contains(pos))
        .collect();
    let portal = remaining.choose(rng).copied();

    Placement {
        enemies,
        chests,
        portal,
    }
}

fn sample(pool: &[Position], count: usize, rng: &mut StdRng) -> Vec<Position> {
    pool.choose_multiple(rng, count.min(pool.len()))
        .copied()
        .collect()
}

/// Builds regular enemies at `positions`, in order.
pub fn spawn_enemies(positions: &[Position], config: &GenerationConfig) -> Vec<Agent> {
    positions
        .iter()
        .map(|&pos| Agent::Enemy(Enemy::with_stats(pos, config.enemy_health, config.enemy_attack)))
        .collect()
}

/// Builds the boss at `position`.
pub fn spawn_boss(position: Position, config: &GenerationConfig) -> Agent {
    Agent::Boss(Boss::with_stats(
        position,
        config.boss_health,
        config.boss_attack,
        config.boss_movement_speed,
    ))
}
