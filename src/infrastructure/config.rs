use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::application::Page;

use super::errors::{InfraError, InfraResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "streamly.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub start_page: Page,
    pub notification_ttl_secs: u64,
    pub log_file: PathBuf,
    pub log_filter: String,
    pub export_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_page: Page::Dashboard,
            notification_ttl_secs: 4,
            log_file: PathBuf::from("streamly-admin.log"),
            log_filter: "info".into(),
            export_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.notification_ttl_secs)
    }

    /// Loads settings from `path`, or from [`DEFAULT_CONFIG_FILE`] when no
    /// path is given.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> InfraResult<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound && !explicit => {
                return Ok(Self::default());
            }
            Err(e) => return Err(InfraError::io(path, e)),
        };

        Self::from_toml(&raw).map_err(|source| InfraError::Config { path, source })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
