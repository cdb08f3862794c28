//! tacklebox: fishing-trip outcome simulator and profit calculator.
//!
//! Models one fishing action (cast, bite wait, loot roll, quality roll,
//! bonus events) against static reference data, then aggregates tens of
//! thousands of trials into catch-rate, XP, and profit statistics. The crate
//! is a library: a presentation layer supplies [fishing::TrialParams] /
//! [stats::BatchParams] and renders the resulting [stats::AggregateStats].
//!
//! All randomness flows through an explicit seedable [fishing::Rng] handle,
//! so any batch is replayable bit for bit from its seed. Long batches run
//! through [schedule::Scheduler], a cooperative poll-until-done driver that
//! keeps the host frame loop responsive.

pub mod data;
pub mod error;
pub mod fishing;
pub mod schedule;
pub mod stats;

pub use data::DataRegistry;
pub use error::{ConfigError, DataError};
pub use fishing::{simulate, Rng, TrialOutcome, TrialParams};
pub use schedule::{BatchRun, Scheduler};
pub use stats::{run_batch, AggregateStats, BatchParams};
