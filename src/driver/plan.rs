use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;

use crate::args::{DEFAULT_TARGETS, DriverArgs};
use crate::error::{AppError, AppResult, HttpError};

/// High-frequency phase: dispatch a round every `interval` until `duration`
/// has passed since the run started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SustainedPhase {
    pub duration: Duration,
    pub interval: Duration,
}

/// Low-frequency phase: `iterations` rounds, each followed by `interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedPhase {
    pub iterations: usize,
    pub interval: Duration,
}

/// Everything one run needs; the target list is read-only once built.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    targets: Arc<[Url]>,
    pub sustained: SustainedPhase,
    pub reduced: ReducedPhase,
}

impl LoadPlan {
    /// Builds a plan from raw target strings.
    ///
    /// # Errors
    ///
    /// Returns an error when `targets` is empty or an entry is not a valid URL.
    pub fn new<I, S>(
        targets: I,
        sustained: SustainedPhase,
        reduced: ReducedPhase,
    ) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for target in targets {
            let raw = target.as_ref();
            let url = Url::parse(raw).map_err(|err| {
                AppError::http(HttpError::InvalidUrl {
                    url: raw.to_owned(),
                    source: err,
                })
            })?;
            parsed.push(url);
        }
        if parsed.is_empty() {
            return Err(AppError::http(HttpError::UrlListEmpty));
        }
        Ok(Self {
            targets: Arc::from(parsed),
            sustained,
            reduced,
        })
    }

    /// Builds the plan for the built-in target list with CLI/config timings.
    ///
    /// # Errors
    ///
    /// Returns an error when the built-in target list fails to parse.
    pub fn from_args(args: &DriverArgs) -> AppResult<Self> {
        Self::new(
            DEFAULT_TARGETS,
            SustainedPhase {
                duration: args.sustained_duration,
                interval: args.sustained_interval,
            },
            ReducedPhase {
                iterations: args.reduced_iterations.get(),
                interval: args.reduced_interval,
            },
        )
    }

    #[must_use]
    pub fn targets(&self) -> &[Url] {
        &self.targets
    }

    pub(super) fn shared_targets(&self) -> Arc<[Url]> {
        Arc::clone(&self.targets)
    }

    /// Number of fetches the reduced phase dispatches.
    #[must_use]
    pub fn reduced_attempts(&self) -> usize {
        self.reduced.iterations.saturating_mul(self.targets.len())
    }
}
