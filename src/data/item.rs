//! Item definitions: immutable records for everything a trial can produce.
//! Loaded once at startup into the [crate::data::DataRegistry]; never mutated.

use serde::{Deserialize, Serialize};

/// Synthetic item granted by rod luck; sized by the bonus roll, never sampled
/// from a loot table.
pub const MONEYBAG_ITEM_ID: &str = "luck_moneybag";

/// Fixed item the treasure override resolves to.
pub const TREASURE_CHEST_ITEM_ID: &str = "treasure_chest";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: String,
    #[serde(default)]
    pub item_name: String,
    #[serde(default)]
    pub category: String,
    /// Loot tier; tables can be sampled with a tier ceiling.
    pub tier: u32,
    #[serde(default)]
    pub rare: bool,
    pub catch_difficulty: f64,
    pub average_size: f64,
    pub sell_value: f64,
    /// Drop weight in [0, 1]; low weights mark scarcer items and inflate
    /// generated worth.
    pub loot_weight: f64,
    /// When set, sell value is derived from tier and loot weight instead of
    /// `sell_value`.
    #[serde(default)]
    pub generate_worth: bool,
    pub obtain_xp: f64,
}
