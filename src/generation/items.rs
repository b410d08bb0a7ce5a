//! # Item Generation
//!
//! The chest loot table. Every chest yields one item drawn uniformly from
//! [`item_pool`].

use crate::{CrawlerError, CrawlerResult, GenerationConfig, Generator, Item, ItemEffect};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const IRON_SWORD_ATTACK_BONUS: i32 = 2;
pub const HEALING_POTION_AMOUNT: i32 = 20;
pub const STEEL_SHIELD_DEFENSE_BONUS: i32 = 3;

/// Every item a chest can contain.
pub fn item_pool() -> Vec<Item> {
    vec![
        Item::new(
            "Iron Sword",
            "A sturdy sword with a sharp edge.",
            ItemEffect::AttackBonus(IRON_SWORD_ATTACK_BONUS),
        ),
        Item::new(
            "Healing Potion",
            format!("Restores {} health.", HEALING_POTION_AMOUNT),
            ItemEffect::Healing(HEALING_POTION_AMOUNT),
        ),
        Item::new(
            "Steel Shield",
            "A strong shield for defense.",
            ItemEffect::DefenseBonus(STEEL_SHIELD_DEFENSE_BONUS),
        ),
    ]
}

/// Draws chest loot from a fixed pool.
#[derive(Debug, Clone)]
pub struct ItemGenerator {
    pool: Vec<Item>,
}

impl ItemGenerator {
    pub fn new() -> Self {
        Self { pool: item_pool() }
    }

    /// A generator drawing from a custom pool.
    pub fn with_pool(pool: Vec<Item>) -> Self {
        Self { pool }
    }
}

impl Default for ItemGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<Item> for ItemGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> CrawlerResult<Item> {
        let item = self
            .pool
            .choose(rng)
            .cloned()
            .ok_or_else(|| CrawlerError::GenerationFailed("item pool is empty".to_string()))?;
        self.validate(&item, config)?;
        Ok(item)
    }

    fn validate(&self, item: &Item, _config: &GenerationConfig) -> CrawlerResult<()> {
        if item.name.is_empty() {
            return Err(CrawlerError::GenerationFailed(
                "item has no name".to_string(),
            ));
        }
        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "ItemGenerator"
    }
}
