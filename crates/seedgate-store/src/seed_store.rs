//! The single-slot seed store and its durable file backend.
//!
//! On disk the slot is one file holding the seed's 64-character lowercase
//! hex form with no trailing newline. Each write goes to its own uniquely
//! named temporary sibling, is flushed, then renamed over the slot, so a
//! reader sees either the previous seed or the new one and never a
//! partial value.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use seedgate_crypto_core::{CryptoError, Seed};
use tempfile::NamedTempFile;
use zeroize::Zeroizing;

use crate::error::StoreError;

/// Holder of the one current seed.
///
/// `persist` replaces the slot wholesale. Implementations are shared
/// across threads; a reader never observes a partially written seed.
pub trait SeedStore: Send + Sync {
    /// Atomically replace the stored seed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backend rejects the write.
    fn persist(&self, seed: &Seed) -> Result<(), StoreError>;

    /// Read the current seed.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotProvisioned` if nothing has been persisted.
    /// - `StoreError::Crypto(SeedFormat)` if the stored value is invalid.
    /// - `StoreError::Io` for other read failures.
    fn load(&self) -> Result<Seed, StoreError>;

    /// Whether a seed has been persisted. Never fails.
    fn is_provisioned(&self) -> bool;
}

// ---------------------------------------------------------------------------
// FileSeedStore
// ---------------------------------------------------------------------------

/// File-backed [`SeedStore`] (owner-only `0600` on Unix).
///
/// Any number of handles, in any number of processes, may share one path:
/// every write uses its own uniquely named temporary file.
#[derive(Debug, Clone)]
pub struct FileSeedStore {
    path: PathBuf,
}

impl FileSeedStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory holding the slot; `.` for a bare file name.
    fn slot_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }

    /// Temporaries are hidden siblings: `.{name}.XXXXXX.tmp`.
    fn temp_prefix(&self) -> String {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "seed".into(), |n| n.to_string_lossy().into_owned());
        format!(".{name}.")
    }
}

impl SeedStore for FileSeedStore {
    fn persist(&self, seed: &Seed) -> Result<(), StoreError> {
        let dir = self.slot_dir();
        fs::create_dir_all(dir)?;

        let hex = seed.to_hex();
        let result = write_temp(dir, &self.temp_prefix(), hex.as_bytes()).and_then(|tmp| {
            tmp.persist(&self.path)
                .map(|_| ())
                .map_err(io::Error::from)
        });
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), "seed write failed: {e}");
            return Err(e.into());
        }

        // Best effort: persist the rename itself.
        #[cfg(unix)]
        {
            if let Ok(handle) = fs::File::open(dir) {
                let _ = handle.sync_all();
            }
        }

        tracing::debug!(path = %self.path.display(), "seed slot replaced");
        Ok(())
    }

    fn load(&self) -> Result<Seed, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => Zeroizing::new(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(StoreError::NotProvisioned)
            }
            Err(e) => return Err(e.into()),
        };
        let text = std::str::from_utf8(&bytes)
            .map_err(|_| CryptoError::SeedFormat("stored seed is not UTF-8".into()))?;
        Ok(Seed::from_hex(text.trim())?)
    }

    fn is_provisioned(&self) -> bool {
        self.path.is_file()
    }
}

/// Create a fresh `0600` temporary in `dir`, write `contents` and fsync.
/// The file is removed again if the returned handle is dropped unpersisted.
fn write_temp(dir: &Path, prefix: &str, contents: &[u8]) -> io::Result<NamedTempFile> {
    let mut tmp = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".tmp")
        .tempfile_in(dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

// ── Tests ──────────────────────────────────────────────────────────
