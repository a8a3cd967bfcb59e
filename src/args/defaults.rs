use std::time::Duration;

use super::types::PositiveUsize;

/// Services hit by every dispatched fetch.
pub const DEFAULT_TARGETS: [&str; 1] = ["http://10.42.0.33:8080/"];

/// Wall-clock length of the sustained phase, measured from run start.
///
/// The phase has historically been announced as a ten second burst, but the
/// schedule has always run for ten minutes. The literal value is kept.
pub const DEFAULT_SUSTAINED_DURATION: Duration = Duration::from_secs(600);
pub const DEFAULT_SUSTAINED_INTERVAL: Duration = Duration::from_millis(50);

pub const DEFAULT_REDUCED_ITERATIONS: PositiveUsize = PositiveUsize::new_or_min(10);
pub const DEFAULT_REDUCED_INTERVAL: Duration = Duration::from_secs(5);
