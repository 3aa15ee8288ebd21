//! # Terminal Configuration
//!
//! Stores terminal configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line arguments (`--api-url`, `--store-code`, ...)
//! 2. Environment variables (`REGI_API_URL`, `REGI_API_TIMEOUT_SECS`)
//! 3. Config file (`terminal.toml`)
//! 4. Defaults (localhost backend, identity 30/90/EMP001)
//!
//! ## Configuration File Format
//! ```toml
//! # terminal.toml
//! [backend]
//! base_url = "http://localhost:8000"
//! timeout_secs = 30
//!
//! [terminal]
//! store_code = "30"
//! pos_id = "90"
//! employee_code = "EMP001"
//! ```
//!
//! The file lives under the platform config dir
//! (`~/.config/regi-pos/terminal.toml` on Linux) unless `--config` points
//! elsewhere. A missing file is not an error - defaults apply.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use regi_backend::BackendConfig;
use regi_core::TerminalIdentity;

use crate::error::TerminalError;

/// Config file name under the platform config directory.
const CONFIG_FILE_NAME: &str = "terminal.toml";

/// Fully resolved terminal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    /// Backend connection settings.
    pub backend: BackendConfig,

    /// Terminal identity attached to every purchase submission.
    pub identity: TerminalIdentity,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            backend: BackendConfig::default(),
            identity: TerminalIdentity::default(),
        }
    }
}

// =============================================================================
// File Schema
// =============================================================================
// Every field optional: the file only overrides what it mentions.

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    backend: Option<FileBackendSection>,
    terminal: Option<FileTerminalSection>,
}

#[derive(Debug, Default, Deserialize)]
struct FileBackendSection {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct FileTerminalSection {
    store_code: Option<String>,
    pos_id: Option<String>,
    employee_code: Option<String>,
}

// =============================================================================
// Resolution
// =============================================================================

impl TerminalConfig {
    /// Loads the configuration: defaults, then file, then environment.
    ///
    /// CLI argument overrides are applied by the caller on top of the
    /// returned value (they are the highest-priority layer).
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, TerminalError> {
        let mut config = TerminalConfig::default();

        let path = match explicit_path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        if let Some(path) = path {
            if path.exists() {
                let raw = std::fs::read_to_string(&path)
                    .map_err(|e| TerminalError::ConfigLoad(e.to_string()))?;
                let file: FileConfig = toml::from_str(&raw)?;
                config.apply_file(file);
                debug!(?path, "terminal config file applied");
            } else if explicit_path.is_some() {
                // An explicitly named file that is missing is an error;
                // the default location is allowed to be absent
                return Err(TerminalError::ConfigLoad(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
        }

        config.backend.apply_env();
        Ok(config)
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(backend) = file.backend {
            if let Some(base_url) = backend.base_url {
                self.backend.base_url = base_url;
            }
            if let Some(secs) = backend.timeout_secs {
                if secs > 0 {
                    self.backend.timeout = Duration::from_secs(secs);
                }
            }
        }

        if let Some(terminal) = file.terminal {
            if let Some(store_code) = terminal.store_code {
                self.identity.store_code = store_code;
            }
            if let Some(pos_id) = terminal.pos_id {
                self.identity.pos_id = pos_id;
            }
            if let Some(employee_code) = terminal.employee_code {
                self.identity.employee_code = employee_code;
            }
        }
    }
}

/// The default config file path under the platform config directory.
fn default_config_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("jp", "regi", "regi-pos")?;
    Some(dirs.config_dir().join(CONFIG_FILE_NAME))
}

// =============================================================================
// Unit Tests
// =============================================================================
