use reqwest::Client;

use crate::error::{AppError, AppResult, HttpError};

/// Builds the client shared by every fetch task.
///
/// No timeouts, extra headers, or retry policy are configured: a hung
/// endpoint holds its task until the connection resolves on its own.
///
/// # Errors
///
/// Returns an error when the TLS backend or resolver cannot be initialised.
pub fn build_client() -> AppResult<Client> {
    Client::builder()
        .build()
        .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))
}
