//! # Agent Behaviors
//!
//! Movement and attack policies for everything that hunts the player.
//!
//! Both agent kinds chase with the same greedy axis rule. Regular enemies
//! step every turn and never stack on a cell another enemy already claimed
//! this turn; the boss only steps with probability `movement_speed`.

use crate::{Agent, AgentKind, Boss, GameEvent, Grid, Level, Player, Position};
use rand::rngs::StdRng;
use rand::Rng;

/// One greedy step from `from` toward `target`.
///
/// Moves along the axis with the larger absolute distance. Ties go to the
/// row axis.
///
/// # Examples
///
/// ```
/// use mazecrawl::{game::greedy_step, Position};
///
/// // Column distance dominates
/// assert_eq!(greedy_step(Position::new(1, 1), Position::new(2, 5)), Position::new(1, 2));
/// // Tie breaks toward the row axis
/// assert_eq!(greedy_step(Position::new(4, 4), Position::new(2, 2)), Position::new(3, 4));
/// ```
pub fn greedy_step(from: Position, target: Position) -> Position {
    let diff_row = target.row - from.row;
    let diff_col = target.col - from.col;

    if diff_col.abs() > diff_row.abs() {
        Position::new(from.row, from.col + if diff_col > 0 { 1 } else { -1 })
    } else {
        Position::new(from.row + if diff_row > 0 { 1 } else { -1 }, from.col)
    }
}

/// Where a regular enemy ends up this turn.
///
/// `claimed` holds the cells already taken by enemies that acted earlier in
/// the same turn. Enemies that have not acted yet still block nothing.
pub fn enemy_destination(
    grid: &Grid,
    from: Position,
    player_pos: Position,
    claimed: &[Position],
) -> Position {
    let step = greedy_step(from, player_pos);
    if grid.is_walkable(step) && !claimed.contains(&step) && step != player_pos {
        step
    } else {
        from
    }
}

/// Where the boss ends up this turn.
///
/// Always draws from `rng` once so replays stay aligned whether or not the
/// boss moves.
pub fn boss_destination(grid: &Grid, boss: &Boss, player_pos: Position, rng: &mut StdRng) -> Position {
    if !rng.gen_bool(boss.movement_speed) {
        return boss.position;
    }

    let step = greedy_step(boss.position, player_pos);
    if grid.is_walkable(step) && step != player_pos {
        step
    } else {
        boss.position
    }
}

/// Lets every agent on `level` act once, in list order.
///
/// Each agent moves first, then hits the player if it ends up adjacent.
/// Returns the resulting events in order.
pub fn take_agent_turns(level: &mut Level, player: &mut Player, rng: &mut StdRng) -> Vec<GameEvent> {
    let player_pos = player.position;
    let mut claimed = Vec::with_capacity(level.agents.len());
    let mut events = Vec::new();

    for agent in level.agents.iter_mut() {
        let from = agent.position();
        let to = match agent {
            Agent::Enemy(_) => enemy_destination(&level.grid, from, player_pos, &claimed),
            Agent::Boss(boss) => boss_destination(&level.grid, boss, player_pos, rng),
        };
        claimed.push(to);

        if to != from {
            agent.set_position(to);
            events.push(GameEvent::AgentMoved {
                kind: agent.kind(),
                from,
                to,
            });
        }

        if let Some(damage) = agent.adjacent_attack(player_pos) {
            player.stats.health -= damage;
            log::debug!(
                "{:?} at {} hits player for {} ({} left)",
                agent.kind(),
                to,
                damage,
                player.stats.health
            );
            events.push(GameEvent::PlayerDamaged {
                source: agent.kind(),
                damage,
                remaining_health: player.stats.health,
            });
        }
    }

    events
}

/// Message shown when an agent of `kind` lands a hit.
pub fn damage_message(kind: AgentKind, damage: i32) -> String {
    match kind {
        AgentKind::Enemy => format!("You suffered {} damage!", damage),
        AgentKind::Boss => format!("The boss hits you for {} damage!", damage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Enemy, Grid};
    use rand::SeedableRng;

    fn open_level(size: u32) -> Level {
        Level::new(1, Grid::open(size), Position::new(1, 1))
    }

    #[test]
    fn test_greedy_step_axis_priority() {
        let from = Position::new(5, 5);
        assert_eq!(greedy_step(from, Position::new(5, 9)), Position::new(5, 6));
        assert_eq!(greedy_step(from, Position::new(5, 1)), Position::new(5, 4));
        assert_eq!(greedy_step(from, Position::new(9, 6)), Position::new(6, 5));
        assert_eq!(greedy_step(from, Position::new(1, 4)), Position::new(4, 5));
        // Equal distance on both axes moves along the row
        assert_eq!(greedy_step(from, Position::new(7, 7)), Position::new(6, 5));
        assert_eq!(greedy_step(from, Position::new(3, 7)), Position::new(4, 5));
    }

    #[test]
    fn test_enemy_blocked_by_obstacle() {
        let grid = Grid::from_obstacles(6, &[Position::new(3, 4)]);
        let from = Position::new(3, 5);
        assert_eq!(enemy_destination(&grid, from, Position::new(3, 1), &[]), from);
    }

    #[test]
    fn test_enemy_blocked_by_claimed_cell() {
        let grid = Grid::open(6);
        let from = Position::new(3, 5);
        let claimed = [Position::new(3, 4)];
        assert_eq!(enemy_destination(&grid, from, Position::new(3, 1), &claimed), from);
    }

    #[test]
    fn test_enemy_never_steps_onto_player() {
        let grid = Grid::open(6);
        let from = Position::new(3, 3);
        let player = Position::new(3, 4);
        assert_eq!(enemy_destination(&grid, from, player, &[]), from);
    }

    #[test]
    fn test_adjacent_enemy_hits_player() {
        let mut level = open_level(6);
        level.agents.push(Agent::Enemy(Enemy::new(Position::new(1, 3))));
        let mut player = Player::new(Position::new(1, 1));
        let mut rng = StdRng::seed_from_u64(7);

        let events = take_agent_turns(&mut level, &mut player, &mut rng);

        assert_eq!(level.agents[0].position(), Position::new(1, 2));
        assert_eq!(player.stats.health, 97);
        assert_eq!(
            events,
            vec![
                GameEvent::AgentMoved {
                    kind: AgentKind::Enemy,
                    from: Position::new(1, 3),
                    to: Position::new(1, 2),
                },
                GameEvent::PlayerDamaged {
                    source: AgentKind::Enemy,
                    damage: 3,
                    remaining_health: 97,
                },
            ]
        );
    }

    #[test]
    fn test_later_enemy_cannot_take_claimed_cell() {
        let mut level = open_level(6);
        // Both want (3, 2) on their way to the player at (3, 1)
        level.agents.push(Agent::Enemy(Enemy::new(Position::new(3, 3))));
        level.agents.push(Agent::Enemy(Enemy::new(Position::new(4, 2))));
        let mut player = Player::new(Position::new(3, 1));
        let mut rng = StdRng::seed_from_u64(7);

        take_agent_turns(&mut level, &mut player, &mut rng);

        assert_eq!(level.agents[0].position(), Position::new(3, 2));
        assert_eq!(level.agents[1].position(), Position::new(4, 2));
    }

    #[test]
    fn test_boss_always_moves_at_full_speed() {
        let grid = Grid::open(10);
        let boss = Boss::with_stats(Position::new(5, 5), 100, 8, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            boss_destination(&grid, &boss, Position::new(1, 5), &mut rng),
            Position::new(4, 5)
        );
    }

    #[test]
    fn test_boss_never_moves_at_zero_speed() {
        let grid = Grid::open(10);
        let boss = Boss::with_stats(Position::new(5, 5), 100, 8, 0.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            assert_eq!(
                boss_destination(&grid, &boss, Position::new(1, 5), &mut rng),
                boss.position
            );
        }
    }

    #[test]
    fn test_boss_refuses_player_cell_but_still_attacks() {
        let mut level = open_level(10);
        level
            .agents
            .push(Agent::Boss(Boss::with_stats(Position::new(5, 5), 100, 8, 1.0)));
        let mut player = Player::new(Position::new(5, 6));
        let mut rng = StdRng::seed_from_u64(3);

        let events = take_agent_turns(&mut level, &mut player, &mut rng);

        assert_eq!(level.agents[0].position(), Position::new(5, 5));
        assert_eq!(player.stats.health, 92);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_damage_messages() {
        assert_eq!(damage_message(AgentKind::Enemy, 3), "You suffered 3 damage!");
        assert_eq!(
            damage_message(AgentKind::Boss, 8),
            "The boss hits you for 8 damage!"
        );
    }
}
