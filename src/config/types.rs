use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;
use crate::error::ValidationError;

/// Phase tuning read from `scaleprobe.toml` / `scaleprobe.json`.
///
/// ```toml
/// [sustained]
/// duration = "10m"
/// interval = "50ms"
///
/// [reduced]
/// iterations = 10
/// interval = "5s"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub sustained: Option<SustainedConfig>,
    pub reduced: Option<ReducedConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SustainedConfig {
    pub duration: Option<DurationValue>,
    pub interval: Option<DurationValue>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ReducedConfig {
    pub iterations: Option<usize>,
    pub interval: Option<DurationValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
