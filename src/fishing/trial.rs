//! One full fishing action: cast, bite-wait loop, bait accounting, loot
//! resolution with the three-roll reroll policy, quality roll, and bonus
//! currency events.
//!
//! `Ok(None)` is the null outcome (loot sampler exhaustion or a fail-closed
//! table lookup). It is a valid terminal result, distinct from a catch;
//! callers re-issue the trial instead of counting it.

use serde::{Deserialize, Serialize};

use crate::data::{
    DataRegistry, LureModifiers, RerollPolicy, MONEYBAG_ITEM_ID, RAIN_TABLE_ID,
    TREASURE_CHEST_ITEM_ID, TRASH_TABLE_ID,
};
use crate::error::ConfigError;
use crate::fishing::derive::{self, WorthMode};
use crate::fishing::rng::Rng;
use crate::fishing::sampler;
use crate::fishing::soda::{Soda, SodaModifiers};

/// Rod upgrade tables indexed by equipment level 0-5. Power and speed feed
/// the reel struggle, which the simulation approximates as always won; only
/// the chance bonus changes trial outcomes today.
pub const ROD_POWER_BY_LEVEL: [f64; 6] = [1.0, 3.0, 10.0, 20.0, 35.0, 50.0];
pub const ROD_SPEED_BY_LEVEL: [f64; 6] = [0.0, 0.1, 0.24, 0.4, 0.7, 1.0];
pub const ROD_CHANCE_BY_LEVEL: [f64; 6] = [0.0, 0.02, 0.04, 0.06, 0.08, 0.1];
pub const MAX_ROD_LEVEL: u8 = 5;

const BITE_WAIT_MIN_SECS: f64 = 2.0;
const BITE_WAIT_MAX_SECS: f64 = 3.0;
const FAILED_CAST_PENALTY: f64 = 0.05;
const RAIN_CATCH_MULT: f64 = 1.1;
const TRASH_BASE_CHANCE: f64 = 0.05;
const RAIN_REDIRECT_CHANCE: f64 = 0.08;
const TREASURE_BASE_CHANCE: f64 = 0.02;
const TREASURE_SIZE: f64 = 60.0;
const LOOT_ROLLS: usize = 3;
const MONEYBAG_CHANCE: f64 = 0.15;

/// Trial configuration collected by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialParams {
    pub casted_bait: String,
    /// Environmental bite-chance boost from the zone.
    pub zone_chance_boost: f64,
    /// Environmental junk multiplier from the zone.
    pub junk_mult: f64,
    /// Ambient loot table id (the fishing zone).
    pub fish_type: String,
    pub in_rain: bool,
    /// Lure id, or empty for a bare hook.
    pub lure_selected: String,
    pub rod_luck_level: u8,
    pub rod_power_level: u8,
    pub rod_speed_level: u8,
    pub rod_chance_level: u8,
    pub soda: Soda,
}

impl Default for TrialParams {
    fn default() -> Self {
        TrialParams {
            casted_bait: "worms".to_string(),
            zone_chance_boost: 0.0,
            junk_mult: 1.0,
            fish_type: "ocean".to_string(),
            in_rain: false,
            lure_selected: String::new(),
            rod_luck_level: 0,
            rod_power_level: 0,
            rod_speed_level: 0,
            rod_chance_level: 0,
            soda: Soda::None,
        }
    }
}

/// One item the trial added to the inventory. Owned by the trial that made
/// it; the aggregator copies what it needs and drops the instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: String,
    pub size: f64,
    pub quality: usize,
    pub tags: Vec<String>,
    pub fresh: bool,
}

/// Bonus gold by source, so downstream aggregation can attribute income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BonusBreakdown {
    pub lucky_lure: f64,
    pub soda_flat: f64,
    pub soda_percent: f64,
}

impl BonusBreakdown {
    pub fn total(&self) -> f64 {
        self.lucky_lure + self.soda_flat + self.soda_percent
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Simulated seconds from cast to resolution.
    pub elapsed: f64,
    pub bait_used: u32,
    pub items: Vec<ItemInstance>,
    /// Total bonus gold, also available itemized in `bonus`.
    pub gold_bonus: f64,
    pub bonus: BonusBreakdown,
    pub xp: f64,
}

/// Everything resolved from params before any randomness is consumed.
struct ResolvedCast<'a> {
    bait: &'a crate::data::BaitDefinition,
    lure: LureModifiers,
    soda: SodaModifiers,
    rod_chance: f64,
}

fn rod_level(slot: &'static str, level: u8) -> Result<usize, ConfigError> {
    if level > MAX_ROD_LEVEL {
        return Err(ConfigError::RodLevelOutOfRange { slot, level });
    }
    Ok(level as usize)
}

fn resolve_cast<'a>(
    registry: &'a DataRegistry,
    params: &TrialParams,
) -> Result<ResolvedCast<'a>, ConfigError> {
    let bait = registry
        .bait(&params.casted_bait)
        .ok_or_else(|| ConfigError::UnknownBait(params.casted_bait.clone()))?;
    let lure = if params.lure_selected.is_empty() {
        LureModifiers::default()
    } else {
        registry
            .lure(&params.lure_selected)
            .ok_or_else(|| ConfigError::UnknownLure(params.lure_selected.clone()))?
            .effect_id
            .modifiers()
    };
    if registry.loot_table(&params.fish_type).is_none() {
        return Err(ConfigError::UnknownLootTable(params.fish_type.clone()));
    }
    rod_level("power", params.rod_power_level)?;
    rod_level("speed", params.rod_speed_level)?;
    rod_level("luck", params.rod_luck_level)?;
    let chance_level = rod_level("chance", params.rod_chance_level)?;

    Ok(ResolvedCast {
        bait,
        lure,
        soda: params.soda.modifiers(),
        rod_chance: ROD_CHANCE_BY_LEVEL[chance_level],
    })
}

/// Check `params` against the registry without running a trial. The batch
/// layer calls this up front so a bad configuration is rejected before any
/// trial runs.
pub fn validate_params(registry: &DataRegistry, params: &TrialParams) -> Result<(), ConfigError> {
    resolve_cast(registry, params).map(|_| ())
}

/// Run one trial. Configuration errors are rejected before any randomness is
/// consumed; `Ok(None)` means the loot sampler came up empty and the caller
/// should re-issue the trial.
pub fn simulate(
    registry: &DataRegistry,
    params: &TrialParams,
    rng: &mut Rng,
) -> Result<Option<TrialOutcome>, ConfigError> {
    let cast = resolve_cast(registry, params)?;

    // WAITING_FOR_BITE: each failed iteration compounds the base chance.
    let mut elapsed = 0.0;
    let mut failed_casts = 0.0;
    loop {
        elapsed += rng.uniform_range(BITE_WAIT_MIN_SECS, BITE_WAIT_MAX_SECS);
        let base = cast.bait.catch;
        let mut chance = base + base * failed_casts + base * cast.rod_chance;
        chance += params.zone_chance_boost * chance;
        chance *= cast.lure.catch_mult;
        if params.in_rain {
            chance *= RAIN_CATCH_MULT;
        }
        chance *= cast.soda.catch_mult;
        if rng.uniform() <= chance.clamp(0.0, 1.0) {
            break;
        }
        failed_casts += FAILED_CAST_PENALTY;
    }

    // HOOKED: bait accounting.
    let mut bait_used = 0u32;
    if rng.uniform() < cast.lure.bait_use_chance.clamp(0.0, 1.0) {
        bait_used += 1;
    }
    if rng.uniform() < cast.lure.extra_bait_chance.clamp(0.0, 1.0) {
        bait_used += 1;
    }
    bait_used += cast.lure.flat_extra_bait;

    // Zone and tier overrides.
    let mut zone = cast.lure.forced_zone.unwrap_or(&params.fish_type);
    let mut max_tier = cast.bait.tier_ceiling();
    let mut force_avg_size = false;
    let trash_chance = TRASH_BASE_CHANCE * cast.lure.treasure_mult * params.junk_mult;
    if rng.uniform() < trash_chance.clamp(0.0, 1.0) {
        zone = TRASH_TABLE_ID;
        max_tier = Some(0);
        force_avg_size = true;
    }
    if params.in_rain && rng.uniform() < RAIN_REDIRECT_CHANCE {
        zone = RAIN_TABLE_ID;
    }

    // RESOLVING_LOOT: three redundant (item, size) pairs; one survives the
    // reroll policy. Any exhausted roll nulls the whole trial, even though
    // only one roll is kept (preserved game behavior).
    let Some(table) = registry.loot_table(zone) else {
        return Ok(None); // override zones fail closed
    };
    let mut rolls: Vec<(String, f64)> = Vec::with_capacity(LOOT_ROLLS);
    for _ in 0..LOOT_ROLLS {
        let Some(item_id) = sampler::sample(registry, table, max_tier, rng) else {
            return Ok(None);
        };
        let Some(item) = registry.item(item_id) else {
            return Ok(None);
        };
        let size = derive::roll_size(item, rng);
        rolls.push((item_id.to_string(), size));
    }
    let chosen = select_roll(registry, &rolls, cast.lure.reroll);
    let (mut catch_id, mut size) = rolls[chosen].clone();

    // Quality roll: ascending ladder, each rung an independent upgrade roll.
    let mut quality = 0usize;
    for (rung, p) in cast.bait.quality.iter().enumerate() {
        if rng.uniform() < p.clamp(0.0, 1.0) {
            quality = rung + 1;
        }
    }

    // Treasure override replaces the catch outright.
    let treasure_chance = TREASURE_BASE_CHANCE * cast.lure.treasure_mult;
    if rng.uniform() < treasure_chance.clamp(0.0, 1.0) {
        catch_id = TREASURE_CHEST_ITEM_ID.to_string();
        size = TREASURE_SIZE;
        quality = 0;
    }

    let Some(catch_def) = registry.item(&catch_id) else {
        return Ok(None);
    };
    let quality_tier = registry.quality_tier(quality);
    if force_avg_size {
        size = catch_def.average_size;
    }
    let xp_per_catch = derive::xp(catch_def, size, quality_tier, cast.soda.xp_mult);

    // RESOLVING_BONUSES.
    let catches = if rng.uniform() < cast.lure.double_catch_chance {
        2
    } else {
        1
    };
    let mut items = Vec::with_capacity(catches + 1);
    if params.rod_luck_level > 0 && rng.uniform() < MONEYBAG_CHANCE {
        items.push(ItemInstance {
            id: MONEYBAG_ITEM_ID.to_string(),
            size: f64::from(rng.next_u32() % 15 + 15),
            quality: params.rod_luck_level as usize,
            tags: Vec::new(),
            fresh: true,
        });
    }
    let mut xp = 0.0;
    for _ in 0..catches {
        items.push(ItemInstance {
            id: catch_id.clone(),
            size,
            quality,
            tags: Vec::new(),
            fresh: true,
        });
        xp += xp_per_catch;
    }

    let mut bonus = BonusBreakdown::default();
    if cast.lure.gold_on_catch {
        let worth = derive::worth(catch_def, size, quality_tier, true, WorthMode::Money);
        bonus.lucky_lure = (worth * rng.uniform_range(0.01, 0.10)).ceil().max(1.0);
    }
    if let Some((lo, hi)) = cast.soda.flat_gold {
        debug_assert!(lo <= hi, "flat gold range reversed: {lo}..={hi}");
        bonus.soda_flat = f64::from(lo + rng.next_u32() % (hi - lo + 1));
    }
    if let Some((lo, hi)) = cast.soda.percent_gold {
        let worth = derive::worth(catch_def, size, quality_tier, true, WorthMode::Money);
        bonus.soda_percent = (worth * rng.uniform_range(lo, hi)).ceil();
    }

    Ok(Some(TrialOutcome {
        elapsed,
        bait_used,
        items,
        gold_bonus: bonus.total(),
        bonus,
        xp,
    }))
}

/// Pick the kept roll. Strict comparisons keep the earlier roll on ties.
fn select_roll(registry: &DataRegistry, rolls: &[(String, f64)], policy: RerollPolicy) -> usize {
    let tier_of = |idx: usize| registry.item(&rolls[idx].0).map_or(0, |item| item.tier);
    let rare = |idx: usize| registry.item(&rolls[idx].0).is_some_and(|item| item.rare);
    let mut chosen = 0;
    for idx in 1..rolls.len() {
        let better = match policy {
            RerollPolicy::First => false,
            RerollPolicy::Smallest => rolls[idx].1 < rolls[chosen].1,
            RerollPolicy::Largest => rolls[idx].1 > rolls[chosen].1,
            RerollPolicy::HighestTier => tier_of(idx) > tier_of(chosen),
            RerollPolicy::PreferRare => rare(idx) && !rare(chosen),
        };
        if better {
            chosen = idx;
        }
    }
    chosen
}
