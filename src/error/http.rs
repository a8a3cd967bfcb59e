use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("URL list was empty.")]
    UrlListEmpty,
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
}
