//! Integration tests for turn resolution, level advance and the boss floor.

use mazecrawl::{
    Agent, Boss, Chest, CrawlerResult, Direction, Enemy, GameEvent, GameState, GenerationConfig,
    Grid, Item, ItemEffect, Level, PlayerAction, Position,
};

fn open_level(number: u32) -> Level {
    Level::new(number, Grid::open(10), Position::new(1, 1))
}

fn set_boss(state: &mut GameState, health: i32, movement_speed: f64) {
    for agent in state.level.agents.iter_mut() {
        if let Agent::Boss(boss) = agent {
            boss.health = health;
            boss.movement_speed = movement_speed;
        }
    }
}

#[test]
fn test_move_right_then_every_enemy_steps_toward_player() -> CrawlerResult<()> {
    let mut level = open_level(1);
    for pos in [
        Position::new(5, 5),
        Position::new(1, 6),
        Position::new(8, 2),
    ] {
        level.agents.push(Agent::Enemy(Enemy::new(pos)));
    }
    let mut state = GameState::with_level(GenerationConfig::new(1), level)?;

    let result = state.apply_player_action(PlayerAction::Move(Direction::Right))?;

    assert_eq!(state.player.position, Position::new(1, 2));
    assert!(result.agents_acted);
    let positions: Vec<_> = state.level.agents.iter().map(|a| a.position()).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(4, 5),
            Position::new(1, 5),
            Position::new(7, 2),
        ]
    );
    assert_eq!(state.player.stats.health, 100);
    Ok(())
}

#[test]
fn test_generated_level_enemies_chase_after_move() -> CrawlerResult<()> {
    // Find a seed whose level 1 leaves the cell right of the start free
    let mut state = (0..200)
        .filter_map(|seed| GameState::new(GenerationConfig::new(seed)).ok())
        .find(|state| {
            let target = Position::new(1, 2);
            state.level.grid.is_walkable(target)
                && !state.level.is_occupied_by_agent(target)
                && state.level.portal != Some(target)
        })
        .expect("some seed leaves (1, 2) free");
    let before: Vec<_> = state.level.agents.iter().map(|a| a.position()).collect();

    state.apply_player_action(PlayerAction::Move(Direction::Right))?;

    let player = state.player.position;
    assert_eq!(player, Position::new(1, 2));
    for (agent, from) in state.level.agents.iter().zip(before) {
        let to = agent.position();
        let greedy = mazecrawl::game::greedy_step(from, player);
        assert!(to == from || to == greedy, "{} moved to {}", from, to);
        assert!(to.manhattan_distance(player) <= from.manhattan_distance(player));
    }
    Ok(())
}

#[test]
fn test_obstacles_and_enemies_block_movement() -> CrawlerResult<()> {
    let mut level = Level::new(
        1,
        Grid::from_obstacles(10, &[Position::new(1, 2)]),
        Position::new(1, 1),
    );
    level.agents.push(Agent::Enemy(Enemy::new(Position::new(2, 1))));
    let mut state = GameState::with_level(GenerationConfig::new(1), level)?;

    for direction in [Direction::Right, Direction::Down, Direction::Up, Direction::Left] {
        let result = state.apply_player_action(PlayerAction::Move(direction))?;
        assert_eq!(state.player.position, Position::new(1, 1));
        assert!(!result.agents_acted);
        assert_eq!(state.player.facing, direction);
    }
    Ok(())
}

#[test]
fn test_attack_removes_faced_enemy() -> CrawlerResult<()> {
    let mut level = open_level(1);
    level.agents.push(Agent::Enemy(Enemy::new(Position::new(1, 2))));
    level.agents.push(Agent::Enemy(Enemy::new(Position::new(9, 9))));
    let mut state = GameState::with_level(GenerationConfig::new(1), level)?;

    // Turn right without moving, then strike
    state.apply_player_action(PlayerAction::Move(Direction::Right))?;
    let result = state.apply_player_action(PlayerAction::Attack)?;

    assert!(result.events.contains(&GameEvent::EnemyDefeated {
        position: Position::new(1, 2)
    }));
    assert_eq!(state.level.enemies().count(), 1);
    assert_eq!(state.statistics.enemies_defeated, 1);
    Ok(())
}

#[test]
fn test_boss_killed_in_one_hit_advances_level() -> CrawlerResult<()> {
    let mut state = GameState::new_at_level(GenerationConfig::new(5), 5)?;
    assert!(state.level.portal.is_none());
    assert_eq!(
        state.level.boss().map(|boss| boss.position),
        Some(Position::new(5, 5))
    );

    set_boss(&mut state, 10, 0.0);
    state.player.stats.attack = 10;
    state.player.position = Position::new(4, 5);
    state.player.facing = Direction::Down;

    let result = state.apply_player_action(PlayerAction::Attack)?;

    assert!(result.events.contains(&GameEvent::BossDefeated {
        position: Position::new(5, 5)
    }));
    assert!(result.level_advanced());
    assert_eq!(state.level_number(), 6);
    assert!(state.level.boss().is_none());
    assert!(state.level.portal.is_some());
    assert_eq!(state.player.position, state.level.player_start);
    assert_eq!(state.player.stats.attack, 10);
    Ok(())
}

#[test]
fn test_boss_dies_on_first_attack_reaching_its_health() -> CrawlerResult<()> {
    let mut level = open_level(5);
    level
        .agents
        .push(Agent::Boss(Boss::with_stats(Position::new(2, 1), 12, 8, 0.0)));
    let mut state = GameState::with_level(GenerationConfig::new(2), level)?;

    // 5 + 5 < 12 <= 5 + 5 + 5
    for remaining in [7, 2] {
        let result = state.apply_player_action(PlayerAction::Attack)?;
        assert!(!result.level_advanced());
        assert_eq!(state.level.boss().map(|boss| boss.health), Some(remaining));
    }
    assert_eq!(state.player.stats.health, 84);

    let result = state.apply_player_action(PlayerAction::Attack)?;
    assert!(result.level_advanced());
    assert_eq!(state.level_number(), 6);
    assert_eq!(state.statistics.boss_damage_dealt, 15);
    Ok(())
}

#[test]
fn test_portal_on_level_four_leads_to_boss_floor() -> CrawlerResult<()> {
    let mut level = open_level(4);
    level.portal = Some(Position::new(2, 1));
    let mut state = GameState::with_level(GenerationConfig::new(11), level)?;

    let result = state.apply_player_action(PlayerAction::Move(Direction::Down))?;

    assert!(result.events.contains(&GameEvent::PortalReached {
        position: Position::new(2, 1)
    }));
    assert_eq!(state.level_number(), 5);
    assert!(state.level.obstacles().is_empty());
    assert!(state.level.chests.is_empty());
    assert!(state.level.portal.is_none());
    assert!(state.level.boss().is_some());
    assert_eq!(state.player.position, Position::new(1, 1));
    Ok(())
}

#[test]
fn test_chest_loot_can_be_equipped() -> CrawlerResult<()> {
    let mut level = open_level(1);
    level.chests.push(Chest::new(Position::new(1, 2)));
    let mut state = GameState::with_level(GenerationConfig::new(4), level)?;
    state.player.stats.health = 50;

    state.apply_player_action(PlayerAction::Move(Direction::Right))?;
    assert_eq!(state.inventory.len(), 1);
    let before = state.player.stats;
    let effect = state.inventory.items()[0].effect;

    state.apply_player_action(PlayerAction::ToggleInventory)?;
    let result = state.apply_player_action(PlayerAction::EquipSelected)?;

    assert!(!result.agents_acted);
    assert!(state.inventory.is_empty());
    let after = state.player.stats;
    match effect {
        ItemEffect::AttackBonus(bonus) => assert_eq!(after.attack, before.attack + bonus),
        ItemEffect::DefenseBonus(bonus) => assert_eq!(after.defense, before.defense + bonus),
        ItemEffect::Healing(amount) => assert_eq!(after.health, before.health + amount),
    }
    Ok(())
}

#[test]
fn test_healing_never_exceeds_max_health() -> CrawlerResult<()> {
    let mut state = GameState::with_level(GenerationConfig::new(4), open_level(1))?;
    for _ in 0..3 {
        state
            .inventory
            .add(Item::new("Healing Potion", "", ItemEffect::Healing(20)));
    }
    state.player.stats.health = 95;

    for _ in 0..3 {
        state.apply_player_action(PlayerAction::EquipSelected)?;
        assert!(state.player.stats.health <= 100);
    }
    assert_eq!(state.player.stats.health, 100);
    assert!(state.inventory.is_empty());
    assert_eq!(state.statistics.items_used, 3);
    Ok(())
}

#[test]
fn test_inventory_persists_across_levels() -> CrawlerResult<()> {
    let mut level = open_level(1);
    level.portal = Some(Position::new(1, 2));
    let mut state = GameState::with_level(GenerationConfig::new(8), level)?;
    state
        .inventory
        .add(Item::new("Steel Shield", "", ItemEffect::DefenseBonus(3)));

    state.apply_player_action(PlayerAction::Move(Direction::Right))?;

    assert_eq!(state.level_number(), 2);
    assert_eq!(state.inventory.len(), 1);
    Ok(())
}
