use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Looked up in the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["scaleprobe.toml", "scaleprobe.json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some(ext) => Err(ConfigError::UnsupportedExtension {
                ext: ext.to_owned(),
            }),
            None => Err(ConfigError::MissingExtension),
        }
    }

    fn parse(self, path: &Path, content: &str) -> Result<ConfigFile, ConfigError> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|source| ConfigError::ParseToml {
                path: path.to_path_buf(),
                source,
            }),
            Self::Json => {
                serde_json::from_str(content).map_err(|source| ConfigError::ParseJson {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

/// A parsed config file together with where it came from.
#[derive(Debug)]
pub struct LoadedConfig {
    pub path: PathBuf,
    pub file: ConfigFile,
}

fn find_default_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.is_file())
}

/// Resolves and loads the phase-timing overrides.
///
/// An explicit `path` must exist. Without one, the first default file present
/// in the working directory is used. The chosen path is logged at `info`
/// since it changes the run's schedule.
///
/// # Errors
///
/// Returns an error when the resolved file cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> AppResult<Option<LoadedConfig>> {
    let Some(path) = path.map(PathBuf::from).or_else(find_default_config) else {
        return Ok(None);
    };
    let file = load_config_file(&path)?;
    info!("Phase timings loaded from config file {}", path.display());
    Ok(Some(LoadedConfig { path, file }))
}

/// Reads one config file, picking the format from its extension.
///
/// # Errors
///
/// Returns an error when the file has no supported extension, cannot be
/// read, or fails to parse.
pub fn load_config_file(path: &Path) -> AppResult<ConfigFile> {
    let format = ConfigFormat::from_path(path).map_err(AppError::config)?;
    let content = std::fs::read_to_string(path).map_err(|source| {
        AppError::config(ConfigError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })
    })?;
    format.parse(path, &content).map_err(AppError::config)
}
