use clap::ArgMatches;
use clap::parser::ValueSource;
use std::time::Duration;

use crate::args::{DriverArgs, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

/// Applies configuration values to CLI arguments.
///
/// Values passed explicitly on the command line are left untouched.
///
/// # Errors
///
/// Returns an error when a config value is zero or malformed.
pub fn apply_config(
    args: &mut DriverArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if let Some(sustained) = config.sustained.as_ref() {
        if !is_cli(matches, "sustained_duration")
            && let Some(duration) = sustained.duration.as_ref()
        {
            args.sustained_duration = to_duration(duration, "sustained.duration")?;
        }
        if !is_cli(matches, "sustained_interval")
            && let Some(interval) = sustained.interval.as_ref()
        {
            args.sustained_interval = to_duration(interval, "sustained.interval")?;
        }
    }

    if let Some(reduced) = config.reduced.as_ref() {
        if !is_cli(matches, "reduced_iterations")
            && let Some(iterations) = reduced.iterations
        {
            args.reduced_iterations = ensure_positive_usize(iterations, "reduced.iterations")?;
        }
        if !is_cli(matches, "reduced_interval")
            && let Some(interval) = reduced.interval.as_ref()
        {
            args.reduced_interval = to_duration(interval, "reduced.interval")?;
        }
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn to_duration(value: &DurationValue, field: &'static str) -> AppResult<Duration> {
    value
        .to_duration()
        .map_err(|err| AppError::config(ConfigError::InvalidDuration { field, source: err }))
}

fn ensure_positive_usize(value: usize, field: &'static str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive { field, source: err })
    })
}
