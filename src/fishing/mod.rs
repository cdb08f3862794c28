//! The stochastic outcome engine: variate source, loot sampling, derivation
//! formulas, consumables, and the per-trial state machine.

pub mod derive;
pub mod rng;
pub mod sampler;
pub mod soda;
pub mod trial;

pub use derive::{difficulty, roll_size, size_tier_multiplier, worth, xp, WorthMode};
pub use rng::{stepify, Rng};
pub use sampler::{sample, MAX_SAMPLE_ATTEMPTS};
pub use soda::{Soda, SodaModifiers};
pub use trial::{
    simulate, validate_params, BonusBreakdown, ItemInstance, TrialOutcome, TrialParams,
    MAX_ROD_LEVEL, ROD_CHANCE_BY_LEVEL, ROD_POWER_BY_LEVEL, ROD_SPEED_BY_LEVEL,
};
