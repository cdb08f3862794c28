//! Bait definitions: base bite chance, pouch cost, loot tier ceiling, and
//! the per-tier quality upgrade ladder.

use serde::{Deserialize, Serialize};

/// Sentinel in raw data for "no tier ceiling".
pub const UNLIMITED_TIER: i32 = -1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaitDefinition {
    pub id: String,
    /// Base per-iteration catch probability before penalties and multipliers.
    pub catch: f64,
    /// Shop cost of one full pouch (pouch size comes from the player's bait
    /// upgrade level).
    pub cost: f64,
    /// Highest loot tier this bait can pull, or [UNLIMITED_TIER].
    #[serde(default = "default_max_tier")]
    pub max_tier: i32,
    /// Quality upgrade ladder. Index 0 holds the chance to reach the lowest
    /// extra quality (tier 1); each later index is an independent roll for the
    /// next tier up. The ladder's length caps the achievable quality.
    pub quality: Vec<f64>,
}

fn default_max_tier() -> i32 {
    UNLIMITED_TIER
}

impl BaitDefinition {
    /// Tier ceiling as the sampler expects it: `None` means unlimited.
    pub fn tier_ceiling(&self) -> Option<u32> {
        if self.max_tier < 0 {
            None
        } else {
            Some(self.max_tier as u32)
        }
    }

    /// Highest quality tier this bait can produce.
    pub fn max_quality(&self) -> usize {
        self.quality.len()
    }
}
