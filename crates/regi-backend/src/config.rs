//! # Backend Configuration
//!
//! Where the client finds the backend.
//!
//! ## Configuration Sources (Priority Order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest)      --api-url http://host:8000             │
//! │                                                                         │
//! │  2. Environment Variables       REGI_API_URL=http://host:8000          │
//! │                                 REGI_API_TIMEOUT_SECS=30               │
//! │                                                                         │
//! │  3. TOML Config File            [backend] section of terminal.toml     │
//! │     (loaded by apps/terminal)                                          │
//! │                                                                         │
//! │  4. Default Values (lowest)     http://localhost:8000, 30s             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Layers 1 and 3 are merged in by the terminal app; this module owns the
//! env layer and the defaults.

use std::time::Duration;

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "REGI_API_URL";

/// Environment variable overriding the per-request timeout in seconds.
pub const ENV_API_TIMEOUT_SECS: &str = "REGI_API_TIMEOUT_SECS";

/// Default backend base URL for development.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// Base URL the two endpoint paths are appended to.
    pub base_url: String,

    /// Per-request timeout. There is no retry: on timeout the operator
    /// sees the failure and re-triggers manually.
    pub timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl BackendConfig {
    /// Creates a config from defaults plus environment overrides.
    pub fn from_env() -> Self {
        let mut config = BackendConfig::default();
        config.apply_env();
        config
    }

    /// Applies environment overrides onto the current values.
    ///
    /// Invalid values are ignored in favor of what is already set; a typo
    /// in an env var should not take the register down.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.base_url = url;
            }
        }

        if let Ok(secs) = std::env::var(ENV_API_TIMEOUT_SECS) {
            if let Ok(secs) = secs.trim().parse::<u64>() {
                if secs > 0 {
                    self.timeout = Duration::from_secs(secs);
                }
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
