//! Batch aggregation: run N trials, accumulate totals and per-item-per-
//! quality frequencies, and derive the presentation statistics.
//!
//! Null trials are re-issued in place so the requested count is honored;
//! each replacement trial is fully independent of the one it replaces.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{DataRegistry, LureEffect, MONEYBAG_ITEM_ID, TREASURE_CHEST_ITEM_ID};
use crate::error::ConfigError;
use crate::fishing::derive::{self, WorthMode};
use crate::fishing::rng::Rng;
use crate::fishing::trial::{self, BonusBreakdown, TrialOutcome, TrialParams};

/// Bait pouch capacity per upgrade level; one pouch purchase refills it.
pub const BAIT_POUCH_BY_LEVEL: [u32; 6] = [5, 10, 15, 20, 25, 30];

pub const WARN_ELAPSED_UNDERESTIMATE: &str =
    "elapsed times are a slight under-estimate (cast and reel animations not modeled)";
pub const WARN_REEL_SPEED_UNMODELED: &str =
    "time savings from higher rod reel speeds are not modeled";
pub const WARN_CHALLENGE_LURE_UNMODELED: &str = "challenge lure profits are not modeled";

/// Batch configuration: the per-trial params plus batch-only economy inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchParams {
    pub trial: TrialParams,
    /// Bait pouch upgrade level 0-5; sets the per-unit bait cost.
    pub max_bait_level: u8,
}

impl Default for BatchParams {
    fn default() -> Self {
        BatchParams {
            trial: TrialParams::default(),
            max_bait_level: 0,
        }
    }
}

impl BatchParams {
    pub fn validate(&self, registry: &DataRegistry) -> Result<(), ConfigError> {
        trial::validate_params(registry, &self.trial)?;
        if usize::from(self.max_bait_level) >= BAIT_POUCH_BY_LEVEL.len() {
            return Err(ConfigError::PouchLevelOutOfRange(self.max_bait_level));
        }
        Ok(())
    }

    fn pouch_size(&self) -> u32 {
        BAIT_POUCH_BY_LEVEL[usize::from(self.max_bait_level)]
    }
}

/// Running totals for one batch. Single-owner: reset at the start of a run,
/// mutated only by that run, surfaced once at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateStats {
    /// Trials that produced an outcome (null trials are replaced, not counted).
    pub trials: u64,
    pub total_elapsed: f64,
    pub total_bait: u64,
    pub total_xp: f64,
    /// item id -> quality tier -> count.
    pub freqs: HashMap<String, HashMap<usize, u64>>,
    pub income_catch_sale: f64,
    pub income_moneybags: f64,
    /// Bonus gold by source, accumulated across trials.
    pub bonus: BonusBreakdown,
    /// Gold spent on bait, filled in by `finalize`.
    pub spent_bait: f64,
    /// Gold spent re-buying the active soda, filled in by `finalize`.
    pub spent_soda: f64,
    /// Advisory notes for the presentation layer.
    pub warnings: Vec<&'static str>,
}

impl AggregateStats {
    /// Fold one trial outcome into the running totals.
    pub fn record(&mut self, registry: &DataRegistry, outcome: &TrialOutcome) {
        self.trials += 1;
        self.total_elapsed += outcome.elapsed;
        self.total_bait += u64::from(outcome.bait_used);
        self.total_xp += outcome.xp;
        self.bonus.lucky_lure += outcome.bonus.lucky_lure;
        self.bonus.soda_flat += outcome.bonus.soda_flat;
        self.bonus.soda_percent += outcome.bonus.soda_percent;
        for instance in &outcome.items {
            *self
                .freqs
                .entry(instance.id.clone())
                .or_default()
                .entry(instance.quality)
                .or_default() += 1;
            let worth = registry.item(&instance.id).map_or(0.0, |def| {
                derive::worth(
                    def,
                    instance.size,
                    registry.quality_tier(instance.quality),
                    instance.fresh,
                    WorthMode::Money,
                )
            });
            if instance.id == MONEYBAG_ITEM_ID {
                self.income_moneybags += worth;
            } else if instance.id == TREASURE_CHEST_ITEM_ID {
                // Chests are kept, not sold.
            } else {
                self.income_catch_sale += worth;
            }
        }
    }

    /// Compute expenses and advisory warnings once the run is over.
    pub fn finalize(&mut self, registry: &DataRegistry, params: &BatchParams) {
        if let Some(bait) = registry.bait(&params.trial.casted_bait) {
            let gold_per_bait = bait.cost / f64::from(params.pouch_size());
            self.spent_bait = self.total_bait as f64 * gold_per_bait;
        }
        let soda = params.trial.soda.modifiers();
        if soda.cost > 0.0 && soda.duration_secs.is_finite() && soda.duration_secs > 0.0 {
            self.spent_soda = (self.total_elapsed / soda.duration_secs).ceil() * soda.cost;
        }

        self.warnings.clear();
        self.warnings.push(WARN_ELAPSED_UNDERESTIMATE);
        if params.trial.rod_speed_level != 0 {
            self.warnings.push(WARN_REEL_SPEED_UNMODELED);
        }
        let challenge = registry
            .lure(&params.trial.lure_selected)
            .is_some_and(|lure| lure.effect_id == LureEffect::Challenge);
        if challenge {
            self.warnings.push(WARN_CHALLENGE_LURE_UNMODELED);
        }
    }

    pub fn total_income(&self) -> f64 {
        self.income_catch_sale + self.income_moneybags + self.bonus.total()
    }

    pub fn total_spent(&self) -> f64 {
        self.spent_bait + self.spent_soda
    }

    /// Events-per-hour rate. Zero elapsed time is defined as NaN, never a
    /// panic or an infinity.
    pub fn rate_per_hour(&self, count: f64) -> f64 {
        if self.total_elapsed <= 0.0 {
            return f64::NAN;
        }
        count * 3600.0 / self.total_elapsed
    }

    pub fn catches_per_hour(&self) -> f64 {
        self.rate_per_hour(self.trials as f64)
    }

    pub fn xp_per_hour(&self) -> f64 {
        self.rate_per_hour(self.total_xp)
    }

    pub fn profit_per_hour(&self) -> f64 {
        self.rate_per_hour(self.total_income() - self.total_spent())
    }

    /// Catch rate for one item at one quality tier.
    pub fn item_rate_per_hour(&self, item: &str, quality: usize) -> f64 {
        let count = self
            .freqs
            .get(item)
            .and_then(|by_quality| by_quality.get(&quality))
            .copied()
            .unwrap_or(0);
        self.rate_per_hour(count as f64)
    }
}

/// Run `trials` trials and aggregate them. The requested count is honored:
/// a null trial is discarded and a fresh one issued in its place.
pub fn run_batch(
    registry: &DataRegistry,
    params: &BatchParams,
    trials: usize,
    rng: &mut Rng,
) -> Result<AggregateStats, ConfigError> {
    params.validate(registry)?;
    let mut stats = AggregateStats::default();
    for _ in 0..trials {
        loop {
            if let Some(outcome) = trial::simulate(registry, &params.trial, rng)? {
                stats.record(registry, &outcome);
                break;
            }
        }
    }
    stats.finalize(registry, params);
    Ok(stats)
}
