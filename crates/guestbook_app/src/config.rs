//! RON configuration for the `guestbook` binary.
//!
//! A missing file is not an error: every field has a default, and a file only
//! needs to name the fields it overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use alloy_primitives::Address;
use engine_logging::engine_info;
use guestbook_engine::{EngineConfig, RpcSettings, GUESTBOOK_ADDRESS};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_CONFIG_FILENAME: &str = "guestbook.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid rpc_url {url:?}: {source}")]
    InvalidUrl { url: String, source: url::ParseError },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub rpc_url: String,
    pub explorer_url: String,
    pub contract_address: Address,
    pub connect_timeout_ms: u64,
    pub request_timeout_ms: u64,
    pub receipt_poll_interval_ms: u64,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            explorer_url: "https://basescan.org".to_string(),
            contract_address: GUESTBOOK_ADDRESS,
            connect_timeout_ms: 10_000,
            request_timeout_ms: 30_000,
            receipt_poll_interval_ms: 2_000,
            log_file: PathBuf::from("guestbook.log"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let found = Self::read(path)?;
        Ok(Self::resolve(path, found))
    }

    /// Reads and parses `path` without logging; `None` when the file is missing.
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        ron::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Falls back to defaults for a missing file and reports which one is in use.
    pub fn resolve(path: &Path, found: Option<Self>) -> Self {
        match found {
            Some(config) => {
                engine_info!("Loaded config from {:?}", path);
                config
            }
            None => {
                engine_info!("No config at {:?}, using defaults", path);
                Self::default()
            }
        }
    }

    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        let url = Url::parse(&self.rpc_url).map_err(|source| ConfigError::InvalidUrl {
            url: self.rpc_url.clone(),
            source,
        })?;
        Ok(EngineConfig {
            rpc: RpcSettings {
                url,
                connect_timeout: Duration::from_millis(self.connect_timeout_ms),
                request_timeout: Duration::from_millis(self.request_timeout_ms),
            },
            contract: self.contract_address,
            receipt_poll_interval: Duration::from_millis(self.receipt_poll_interval_ms),
        })
    }

    pub fn transaction_url(&self, hash: &str) -> String {
        format!("{}/tx/{}", self.explorer_url.trim_end_matches('/'), hash)
    }
}
