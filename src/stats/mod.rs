//! Batch aggregation and derived presentation statistics.

pub mod aggregate;

pub use aggregate::{
    run_batch, AggregateStats, BatchParams, BAIT_POUCH_BY_LEVEL, WARN_CHALLENGE_LURE_UNMODELED,
    WARN_ELAPSED_UNDERESTIMATE, WARN_REEL_SPEED_UNMODELED,
};
