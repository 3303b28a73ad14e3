//! Service configuration, stored as camelCase JSON.
//!
//! Every field has a default, so a missing file, a corrupt file and a
//! partial file all load. Relative paths resolve against the working
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "seedgate.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Unencrypted PEM private key used to open envelopes.
    #[serde(default = "default_private_key_path")]
    pub private_key_path: PathBuf,

    /// Seed slot file.
    #[serde(default = "default_seed_path")]
    pub seed_path: PathBuf,

    /// Accepted steps on each side of the current one.
    #[serde(default = "default_verify_window")]
    pub verify_window: u32,

    /// Log filter used when `SEEDGATE_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            private_key_path: default_private_key_path(),
            seed_path: default_seed_path(),
            verify_window: default_verify_window(),
            log_level: default_log_level(),
        }
    }
}

fn default_private_key_path() -> PathBuf {
    "student_private.pem".into()
}
fn default_seed_path() -> PathBuf {
    PathBuf::from("data").join("seed.txt")
}
const fn default_verify_window() -> u32 {
    seedgate_crypto_core::DEFAULT_WINDOW
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load from `path`, falling back to [`Default::default()`] when the
    /// file is missing or not valid JSON.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path).map_or_else(
            |_| Self::default(),
            |contents| serde_json::from_str(&contents).unwrap_or_default(),
        )
    }
}

// ── Tests ──────────────────────────────────────────────────────────
