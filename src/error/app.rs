use thiserror::Error;

use super::{ConfigError, HttpError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_wrap_their_layer() -> Result<(), String> {
        if !matches!(
            AppError::config(ConfigError::MissingExtension),
            AppError::Config(ConfigError::MissingExtension)
        ) {
            return Err("Expected Config variant".to_owned());
        }
        if !matches!(
            AppError::http(HttpError::UrlListEmpty),
            AppError::Http(HttpError::UrlListEmpty)
        ) {
            return Err("Expected Http variant".to_owned());
        }
        Ok(())
    }

    #[test]
    fn runtime_io_failure_converts() -> Result<(), String> {
        let result: AppResult<()> = Err(std::io::Error::other("runtime")).map_err(AppError::from);
        match result {
            Err(AppError::Io { source }) if source.to_string() == "runtime" => Ok(()),
            other => Err(format!("Unexpected result: {:?}", other)),
        }
    }
}
