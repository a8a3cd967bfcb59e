//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::DriverArgs;
pub use defaults::{
    DEFAULT_REDUCED_INTERVAL, DEFAULT_REDUCED_ITERATIONS, DEFAULT_SUSTAINED_DURATION,
    DEFAULT_SUSTAINED_INTERVAL, DEFAULT_TARGETS,
};
pub use parsers::parse_duration_arg;
pub use types::PositiveUsize;
