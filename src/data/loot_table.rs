//! Loot tables: ordered weighted entry sets per fishing zone/condition.
//!
//! Entry order is semantically load-bearing: the sampler compares a draw
//! against each entry's stored weight in declared order and the first
//! qualifying entry wins, so a table is a `Vec`, never a map.

use serde::{Deserialize, Serialize};

/// Zone a trash redirect forces.
pub const TRASH_TABLE_ID: &str = "water_trash";

/// Zone a rain redirect forces.
pub const RAIN_TABLE_ID: &str = "rain";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootTableEntry {
    pub item: String,
    /// Stored weight the draw is compared against directly. This is whatever
    /// the source data declares; it is deliberately not re-normalized or
    /// accumulated.
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootTable {
    pub id: String,
    /// Entries in declared order.
    pub entries: Vec<LootTableEntry>,
    /// Upper bound of the sampler's draw range.
    pub total: f64,
}
