//! Cooperative single-threaded scheduling for long batch runs.

pub mod runner;

pub use runner::{BatchRun, BatchStep, Scheduler, DEFAULT_FRAME_BUDGET, TRIALS_PER_CHECKPOINT};
