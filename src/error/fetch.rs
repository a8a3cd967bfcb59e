use std::error::Error as _;

use thiserror::Error;

/// Failure of a single fetch task.
///
/// Both kinds are logged where they happen and end only the task that hit
/// them; the driver never sees them.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Error fetching {url}: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Error reading response from {url}: {source}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Connection { url, .. } | Self::Read { url, .. } => url.as_str(),
        }
    }

    /// Renders the error followed by every underlying cause, `: `-separated.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        // The direct source is already part of `Display`.
        let mut cause = self.source().and_then(|source| source.source());
        while let Some(err) = cause {
            let text = err.to_string();
            if !message.ends_with(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            cause = err.source();
        }
        message
    }
}
