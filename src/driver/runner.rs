use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use reqwest::{Client, Url};
use tokio::time::{Instant, sleep, sleep_until};
use tokio_util::task::TaskTracker;
use tracing::{debug, error, info};

use crate::http::fetch_and_log;

use super::plan::{LoadPlan, SustainedPhase};

/// Linear lifecycle of one run; there is no branch back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Init,
    Phase1Running,
    Phase2Running,
    Draining,
    Done,
}

impl fmt::Display for DriverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DriverState::Init => "init",
            DriverState::Phase1Running => "phase1-running",
            DriverState::Phase2Running => "phase2-running",
            DriverState::Draining => "draining",
            DriverState::Done => "done",
        };
        f.write_str(label)
    }
}

/// What a finished run dispatched. Outcomes of individual fetches are only
/// ever logged, never counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub sustained_dispatched: usize,
    pub reduced_dispatched: usize,
    pub elapsed: Duration,
}

impl RunReport {
    #[must_use]
    pub const fn total_dispatched(&self) -> usize {
        self.sustained_dispatched.saturating_add(self.reduced_dispatched)
    }
}

struct Dispatcher {
    client: Client,
    targets: Arc<[Url]>,
    in_flight: TaskTracker,
}

impl Dispatcher {
    /// Spawns one fetch task per target and returns how many were spawned.
    fn dispatch_round(&self) -> usize {
        for url in self.targets.iter() {
            let client = self.client.clone();
            let url = url.clone();
            self.in_flight.spawn(async move {
                fetch_and_log(&client, &url).await;
            });
        }
        debug!(
            in_flight = self.in_flight.len(),
            "Dispatched round of {} request(s)",
            self.targets.len()
        );
        self.targets.len()
    }
}

fn advance(state: &mut DriverState, next: DriverState) {
    debug!("Driver state {} -> {}", state, next);
    *state = next;
}

/// Runs both phases against `plan` and waits for every fetch to finish.
///
/// Individual fetch failures are logged by their tasks and never stop,
/// retry, or reshape the schedule, so this always completes with a report.
pub async fn run(plan: &LoadPlan, client: &Client) -> RunReport {
    let mut state = DriverState::Init;
    let start = Instant::now();
    let dispatcher = Arc::new(Dispatcher {
        client: client.clone(),
        targets: plan.shared_targets(),
        in_flight: TaskTracker::new(),
    });
    info!("Starting autoscaling test at {}", Local::now());

    advance(&mut state, DriverState::Phase1Running);
    info!(
        "Phase 1: High load ({:?}) - triggering scale-up...",
        plan.sustained.duration
    );
    let sustained_loop = tokio::spawn(run_sustained(
        Arc::clone(&dispatcher),
        plan.sustained,
        start,
    ));
    wait_for_phase_end(start, plan.sustained.duration).await;

    advance(&mut state, DriverState::Phase2Running);
    info!("Phase 2: Reduced load - allowing scale-down...");
    let mut reduced_dispatched: usize = 0;
    for _ in 0..plan.reduced.iterations {
        reduced_dispatched = reduced_dispatched.saturating_add(dispatcher.dispatch_round());
        sleep(plan.reduced.interval).await;
    }

    advance(&mut state, DriverState::Draining);
    info!("Waiting for all requests to complete...");
    // The sustained loop may still be finishing its last round; collect it
    // before waiting so no fetch is spawned after the wait has begun.
    let sustained_dispatched = match sustained_loop.await {
        Ok(count) => count,
        Err(err) => {
            error!("Sustained phase loop failed: {}", err);
            0
        }
    };
    dispatcher.in_flight.close();
    dispatcher.in_flight.wait().await;

    let elapsed = start.elapsed();
    advance(&mut state, DriverState::Done);
    info!("Autoscaling test completed. Total duration: {:?}", elapsed);

    let report = RunReport {
        sustained_dispatched,
        reduced_dispatched,
        elapsed,
    };
    debug!(
        sustained = report.sustained_dispatched,
        reduced = report.reduced_dispatched,
        "Run report"
    );
    report
}

async fn run_sustained(
    dispatcher: Arc<Dispatcher>,
    phase: SustainedPhase,
    start: Instant,
) -> usize {
    let mut dispatched: usize = 0;
    while start.elapsed() < phase.duration {
        dispatched = dispatched.saturating_add(dispatcher.dispatch_round());
        sleep(phase.interval).await;
    }
    dispatched
}

async fn wait_for_phase_end(start: Instant, duration: Duration) {
    match start.checked_add(duration) {
        Some(deadline) => sleep_until(deadline).await,
        None => sleep(duration).await,
    }
}
