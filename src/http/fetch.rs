use futures_util::StreamExt;
use reqwest::{Client, Url};
use tracing::{error, info};

use crate::error::FetchError;

/// Issues one GET against `url` and drains the body, returning its length.
///
/// # Errors
///
/// Returns [`FetchError::Connection`] when the request cannot be sent or no
/// response arrives, and [`FetchError::Read`] when the body breaks off
/// part-way.
pub async fn fetch_data(client: &Client, url: &Url) -> Result<u64, FetchError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|err| FetchError::Connection {
            url: url.to_string(),
            source: err,
        })?;

    drain_response_body(response)
        .await
        .map_err(|err| FetchError::Read {
            url: url.to_string(),
            source: err,
        })
}

/// Runs [`fetch_data`] and reports the outcome as exactly one log line.
///
/// Failures are logged with their whole cause chain.
pub async fn fetch_and_log(client: &Client, url: &Url) {
    match fetch_data(client, url).await {
        Ok(length) => info!("Response from {} (length: {} bytes)", url, length),
        Err(err) => error!("{}", err.describe()),
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
