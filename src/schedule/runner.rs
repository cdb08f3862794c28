//! Cooperative batch execution: a resumable run polled until done.
//!
//! The run holds its own cursor, accumulator, and RNG; `poll` executes
//! fixed-size checkpoints of trial attempts until the frame budget elapses
//! and then hands control back. No coroutine machinery: the host drives an
//! explicit poll-until-done protocol, so the same run behaves identically
//! however often it is suspended.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::data::DataRegistry;
use crate::error::ConfigError;
use crate::fishing::rng::Rng;
use crate::fishing::trial;
use crate::stats::{AggregateStats, BatchParams};

/// Trial attempts run between wall-clock checks. Attempts, not completions:
/// null trials count toward the checkpoint too.
pub const TRIALS_PER_CHECKPOINT: usize = 1000;

/// Default time slice per poll, sized for a ~30fps host frame.
pub const DEFAULT_FRAME_BUDGET: Duration = Duration::from_millis(33);

/// Result of one poll.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchStep {
    /// Budget elapsed; call `poll` again to continue.
    Pending { completed: usize, target: usize },
    /// All trials done. Repeated polls return the same stats.
    Complete(AggregateStats),
}

/// A suspended batch computation. Constructing one validates the params (the
/// pre-start yield point) but runs nothing until the first `poll`.
#[derive(Debug)]
pub struct BatchRun {
    registry: Arc<DataRegistry>,
    params: BatchParams,
    target: usize,
    completed: usize,
    rng: Rng,
    stats: AggregateStats,
    finished: bool,
}

impl BatchRun {
    pub fn new(
        registry: Arc<DataRegistry>,
        params: BatchParams,
        trials: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        params.validate(&registry)?;
        Ok(BatchRun {
            registry,
            params,
            target: trials,
            completed: 0,
            rng: Rng::new(seed),
            stats: AggregateStats::default(),
            finished: false,
        })
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Run trial attempts until `frame_budget` elapses or the run completes.
    /// Suspension never changes results: the variate stream advances exactly
    /// as it would in one uninterrupted run.
    pub fn poll(&mut self, frame_budget: Duration) -> Result<BatchStep, ConfigError> {
        if self.finished {
            return Ok(BatchStep::Complete(self.stats.clone()));
        }
        let deadline = Instant::now() + frame_budget;
        let mut attempts = 0usize;
        while self.completed < self.target {
            // Null trials are replaced without advancing the cursor so the
            // requested count is honored.
            if let Some(outcome) =
                trial::simulate(&self.registry, &self.params.trial, &mut self.rng)?
            {
                self.stats.record(&self.registry, &outcome);
                self.completed += 1;
            }
            attempts += 1;
            // Checkpoints count attempts, not completions: a configuration
            // whose trials all resolve null must still hand the frame back.
            if attempts >= TRIALS_PER_CHECKPOINT {
                attempts = 0;
                if self.completed < self.target && Instant::now() >= deadline {
                    return Ok(BatchStep::Pending {
                        completed: self.completed,
                        target: self.target,
                    });
                }
            }
        }
        self.stats.finalize(&self.registry, &self.params);
        self.finished = true;
        Ok(BatchStep::Complete(self.stats.clone()))
    }
}

/// Drives at most one [BatchRun] at a time. Submitting a new run supersedes
/// the in-flight one: its partial accumulator is dropped, never merged or
/// surfaced, and it is simply never polled again.
#[derive(Debug, Default)]
pub struct Scheduler {
    active: Option<BatchRun>,
    frame_budget: Option<Duration>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler::default()
    }

    pub fn with_frame_budget(frame_budget: Duration) -> Self {
        Scheduler {
            active: None,
            frame_budget: Some(frame_budget),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_none()
    }

    /// Queue `run` as the only active computation, discarding any in-flight
    /// run. Immediate from the caller's perspective; nothing of the old run
    /// survives.
    pub fn submit(&mut self, run: BatchRun) {
        if let Some(old) = self.active.take() {
            debug!(
                completed = old.completed(),
                target = old.target(),
                "superseding in-flight batch"
            );
        }
        self.active = Some(run);
    }

    /// Poll the active run for one frame. Returns `Some` exactly once per
    /// completed run; `None` while idle or still in flight.
    pub fn tick(&mut self) -> Result<Option<AggregateStats>, ConfigError> {
        let budget = self.frame_budget.unwrap_or(DEFAULT_FRAME_BUDGET);
        let Some(run) = self.active.as_mut() else {
            return Ok(None);
        };
        match run.poll(budget) {
            Ok(BatchStep::Pending { .. }) => Ok(None),
            Ok(BatchStep::Complete(stats)) => {
                debug!(trials = stats.trials, "batch complete");
                self.active = None;
                Ok(Some(stats))
            }
            Err(err) => {
                self.active = None;
                Err(err)
            }
        }
    }

    /// Tick until the active run completes. Test and non-interactive hosts
    /// use this; interactive hosts call [Scheduler::tick] from their frame
    /// loop instead.
    pub fn run_to_completion(&mut self) -> Result<Option<AggregateStats>, ConfigError> {
        while !self.is_idle() {
            if let Some(stats) = self.tick()? {
                return Ok(Some(stats));
            }
        }
        Ok(None)
    }
}
