//! Two-phase load driver: a sustained burst, a reduced tail, then a drain.
mod plan;
mod runner;

pub use plan::{LoadPlan, ReducedPhase, SustainedPhase};
pub use runner::{DriverState, RunReport, run};
