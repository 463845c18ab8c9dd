use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::controllers::movie::job::{FrameJobRunner, JobOutcome, JobStatus};
use crate::controllers::movie::slot_pool::SlotPool;
use crate::core::data::frame_descriptor::FrameDescriptor;
use crate::core::errors::{MandelError, MandelResult};

/// Aggregate result of a batch where every dispatched job ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    AllSucceeded,
    PartialFailure,
    TotalFailure,
}

impl BatchStatus {
    /// Process exit code reported by the batch driver.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::AllSucceeded => 0,
            Self::PartialFailure => 2,
            Self::TotalFailure => 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    outcomes: Vec<JobOutcome>,
    elapsed: Duration,
    peak_active: usize,
}

impl BatchReport {
    /// Outcomes in frame order, regardless of completion order.
    #[must_use]
    pub fn outcomes(&self) -> &[JobOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failures(&self) -> impl Iterator<Item = &JobOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    #[must_use]
    pub fn status(&self) -> BatchStatus {
        match (self.succeeded(), self.failed()) {
            (_, 0) => BatchStatus::AllSucceeded,
            (0, _) => BatchStatus::TotalFailure,
            _ => BatchStatus::PartialFailure,
        }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Most jobs that held a slot at the same time during the run.
    #[must_use]
    pub fn peak_active(&self) -> usize {
        self.peak_active
    }
}

/// Runs frames as independent jobs, admitting at most `slots.capacity()` at once.
///
/// Frames are dispatched strictly in iteration order; they may complete in any
/// order. `run` returns only after every dispatched job has finished.
pub struct FrameScheduler<'p, R> {
    slots: &'p SlotPool,
    runner: R,
}

impl<'p, R: FrameJobRunner> FrameScheduler<'p, R> {
    pub fn new(slots: &'p SlotPool, runner: R) -> Self {
        Self { slots, runner }
    }

    /// Dispatches every frame and waits for all of them.
    ///
    /// A runner error stops further dispatch. Jobs already running are still
    /// waited for, then the first such error is returned instead of a report.
    pub fn run<I>(&self, frames: I) -> MandelResult<BatchReport>
    where
        I: IntoIterator<Item = FrameDescriptor>,
    {
        let start = Instant::now();
        let aborted = AtomicBool::new(false);
        let fatal: Mutex<Option<MandelError>> = Mutex::new(None);
        let outcomes: Mutex<Vec<JobOutcome>> = Mutex::new(Vec::new());
        let gauge = BatchGauge::default();

        let dispatched = thread::scope(|scope| -> MandelResult<()> {
            let (aborted, fatal, outcomes, gauge) = (&aborted, &fatal, &outcomes, &gauge);

            for frame in frames {
                let permit = self.slots.acquire();
                if aborted.load(Ordering::SeqCst) {
                    warn!(frame = frame.frame_index(), "batch aborted, frame not dispatched");
                    break;
                }

                let frame_index = frame.frame_index();
                let in_flight = gauge.enter();
                info!(frame = frame_index, active = self.slots.active(), "job dispatched");

                thread::Builder::new()
                    .name(format!("mandel-job-{frame_index:02}"))
                    .spawn_scoped(scope, move || {
                        let _permit = permit;
                        let _in_flight = in_flight;
                        let result = panic::catch_unwind(AssertUnwindSafe(|| self.runner.run(&frame)));

                        let outcome = match result {
                            Ok(Ok(outcome)) => outcome,
                            Ok(Err(err)) => {
                                error!(frame = frame_index, error = %err, "job could not run");
                                aborted.store(true, Ordering::SeqCst);
                                fatal
                                    .lock()
                                    .unwrap_or_else(PoisonError::into_inner)
                                    .get_or_insert(err);
                                return;
                            }
                            Err(payload) => JobOutcome::failed(
                                &frame,
                                format!("job panicked: {}", panic_message(payload.as_ref())),
                                Duration::ZERO,
                            ),
                        };

                        match &outcome.status {
                            JobStatus::Succeeded => {
                                info!(frame = frame_index, elapsed = ?outcome.elapsed, "job finished");
                            }
                            JobStatus::Failed { details } => {
                                warn!(frame = frame_index, %details, "job failed");
                            }
                        }
                        outcomes
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(outcome);
                    })
                    .map_err(|e| {
                        MandelError::resource_exhaustion(
                            format!("failed to start job for frame {frame_index}"),
                            e,
                        )
                    })?;
            }

            Ok(())
        });

        dispatched?;
        if let Some(err) = fatal.into_inner().unwrap_or_else(PoisonError::into_inner) {
            return Err(err);
        }

        let mut outcomes = outcomes.into_inner().unwrap_or_else(PoisonError::into_inner);
        outcomes.sort_by_key(|outcome| outcome.frame_index);

        let report = BatchReport {
            outcomes,
            elapsed: start.elapsed(),
            peak_active: gauge.peak(),
        };
        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            peak_active = report.peak_active(),
            elapsed = ?report.elapsed(),
            "batch finished"
        );

        Ok(report)
    }
}

/// Jobs of one `run` that currently hold a slot, and the most seen at once.
#[derive(Debug, Default)]
struct BatchGauge {
    active: AtomicUsize,
    peak: AtomicUsize,
}

impl BatchGauge {
    fn enter(&self) -> InFlight<'_> {
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        InFlight { gauge: self }
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

struct InFlight<'a> {
    gauge: &'a BatchGauge,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.gauge.active.fetch_sub(1, Ordering::SeqCst);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
