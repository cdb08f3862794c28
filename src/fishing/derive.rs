//! Pure derivation formulas: rolled size, sale worth, struggle difficulty,
//! and XP. Clamps and breakpoints mirror the game's reference behavior.

use crate::data::{ItemDefinition, QualityTier};
use crate::fishing::rng::{stepify, Rng};

/// Size-tier breakpoints, ascending by size ratio. Scanning keeps the last
/// multiplier whose breakpoint the ratio meets and stops at the first
/// breakpoint above it.
const SIZE_TIER_BREAKPOINTS: [(f64, f64); 7] = [
    (0.1, 1.75),
    (0.2, 0.6),
    (0.5, 0.8),
    (1.0, 1.0),
    (1.5, 1.5),
    (2.0, 2.5),
    (3.0, 4.25),
];

pub const MIN_ROLLED_SIZE: f64 = 0.01;
pub const MIN_DIFFICULTY: f64 = 1.0;
pub const MAX_DIFFICULTY: f64 = 250.0;
pub const MIN_XP_MULT: f64 = 0.5;

/// What a worth query is priced in. Credits only pay out for fresh items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorthMode {
    #[default]
    Money,
    Credits,
}

/// Roll an item's size: normal draw around the boosted average (x1.25), with
/// the deviation derived from that boosted mean, snapped to 2 decimals.
/// Negative draws keep their magnitude; the floor is [MIN_ROLLED_SIZE].
pub fn roll_size(item: &ItemDefinition, rng: &mut Rng) -> f64 {
    let mean = item.average_size * 1.25;
    let deviation = mean * 0.55;
    let rolled = stepify(rng.normal(mean, deviation), 0.01);
    rolled.abs().max(MIN_ROLLED_SIZE)
}

/// Multiplier for how far `size` sits from the item's average.
pub fn size_tier_multiplier(size: f64, average_size: f64) -> f64 {
    let ratio = size / average_size;
    let mut mult = 1.0;
    for (breakpoint, breakpoint_mult) in SIZE_TIER_BREAKPOINTS {
        if breakpoint > ratio {
            break;
        }
        mult = breakpoint_mult;
    }
    mult
}

/// Sale worth of one caught instance.
///
/// Base value is the fixed `sell_value` unless the item generates worth from
/// its tier and loot weight; scarcity bonuses stack multiplicatively as the
/// weight crosses each threshold.
pub fn worth(
    item: &ItemDefinition,
    size: f64,
    quality: &QualityTier,
    fresh: bool,
    mode: WorthMode,
) -> f64 {
    if mode == WorthMode::Credits && !fresh {
        return 0.0;
    }
    let mult = size_tier_multiplier(size, item.average_size);
    let mut value = item.sell_value;
    if item.generate_worth {
        let tier_base = 1.0 + 0.25 * item.tier as f64;
        let weight = item.loot_weight;
        value = (5.0 * tier_base).powf(2.5 - weight);
        if weight < 0.4 {
            value *= 1.1;
        }
        if weight < 0.15 {
            value *= 1.25;
        }
        if weight < 0.05 {
            value *= 1.5;
        }
    }
    (value * mult * quality.worth).ceil()
}

/// Struggle difficulty for a catch, clamped to [1, 250].
pub fn difficulty(item: &ItemDefinition, size: f64, quality: &QualityTier) -> f64 {
    let ratio_mult = (size / item.average_size).clamp(0.7, 1.8);
    (item.catch_difficulty * ratio_mult * quality.diff + quality.bdiff)
        .clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

/// XP granted by one caught instance. Undersized catches (ratio below 0.15)
/// get the additive correction instead of the raw ratio.
pub fn xp(item: &ItemDefinition, size: f64, quality: &QualityTier, soda_xp_mult: f64) -> f64 {
    let mut xp_mult = size / item.average_size;
    if xp_mult < 0.15 {
        xp_mult = 1.25 + xp_mult;
    }
    xp_mult = xp_mult.max(MIN_XP_MULT);
    (item.obtain_xp * xp_mult * soda_xp_mult * quality.worth).ceil()
}
