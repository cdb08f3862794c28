//! Weighted loot-table sampling.
//!
//! The draw is compared against each entry's *stored* weight in declared
//! order and the first entry passing both the weight check and the tier
//! ceiling wins; there is no cumulative sum. This biased selection matches
//! the game: entries are not picked proportionally to weight alone, and
//! high-tier entries with large stored weights can win the weight check yet
//! be rejected by the ceiling, wasting the attempt.

use crate::data::{DataRegistry, LootTable};
use crate::fishing::rng::Rng;

/// Attempts before the sampler gives up and the trial resolves to no catch.
pub const MAX_SAMPLE_ATTEMPTS: usize = 20;

/// Draw one item id from `table`. `max_tier` of `None` lifts the tier
/// ceiling. Returns `None` after [MAX_SAMPLE_ATTEMPTS] failed attempts;
/// callers treat that as "no catch this trial", never as a retryable error.
pub fn sample<'a>(
    registry: &DataRegistry,
    table: &'a LootTable,
    max_tier: Option<u32>,
    rng: &mut Rng,
) -> Option<&'a str> {
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        let roll = rng.uniform_range(0.0, table.total);
        for entry in &table.entries {
            if entry.weight > roll && tier_eligible(registry, &entry.item, max_tier) {
                return Some(&entry.item);
            }
        }
    }
    None
}

fn tier_eligible(registry: &DataRegistry, item: &str, max_tier: Option<u32>) -> bool {
    match max_tier {
        None => true,
        Some(ceiling) => registry
            .item(item)
            .is_some_and(|def| def.tier <= ceiling),
    }
}
