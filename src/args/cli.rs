use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Two-phase HTTP load driver for exercising autoscaling: a sustained high-frequency burst followed by a reduced-rate tail."
)]
pub struct DriverArgs {
    /// How long the sustained phase runs, measured from start (supports ms/s/m/h)
    #[arg(
        long = "sustained-duration",
        default_value = "10m",
        value_parser = parse_duration_arg,
        help_heading = "Phases"
    )]
    pub sustained_duration: Duration,

    /// Sleep between dispatch rounds in the sustained phase (supports ms/s/m/h)
    #[arg(
        long = "sustained-interval",
        default_value = "50ms",
        value_parser = parse_duration_arg,
        help_heading = "Phases"
    )]
    pub sustained_interval: Duration,

    /// Number of dispatch rounds in the reduced phase
    #[arg(
        long = "reduced-iterations",
        default_value = "10",
        value_parser = parse_positive_usize,
        help_heading = "Phases"
    )]
    pub reduced_iterations: PositiveUsize,

    /// Sleep after each dispatch round in the reduced phase (supports ms/s/m/h)
    #[arg(
        long = "reduced-interval",
        default_value = "5s",
        value_parser = parse_duration_arg,
        help_heading = "Phases"
    )]
    pub reduced_interval: Duration,

    /// Path to config file (TOML/JSON). Defaults to ./scaleprobe.toml or ./scaleprobe.json if present.
    #[arg(long, help_heading = "Common Options")]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by SCALEPROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v', alias = "debug", help_heading = "Common Options")]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color", env = "NO_COLOR", value_parser = parse_bool_env, help_heading = "Common Options")]
    pub no_color: bool,
}
