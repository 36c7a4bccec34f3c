//! Disk-backed key-value store.
//!
//! One JSON file per key with an expiry envelope, so cached statuses and
//! ledgers survive restarts. Writes are atomic (temp file + rename) and
//! files get owner-only permissions on Unix.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default data directory.
///
/// - macOS: `~/Library/Application Support/upbadge`
/// - Linux: `~/.local/share/upbadge`
/// - Windows: `%APPDATA%\upbadge`
pub fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support").join("upbadge"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::data_dir()
            .map(|d| d.join("upbadge"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

// ============================================================================
// Stored Envelope
// ============================================================================

/// On-disk record: the value plus its absolute expiry.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<DateTime<Utc>>,
    value: Value,
}

impl StoredRecord {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}

// ============================================================================
// Permissions
// ============================================================================

/// Sets owner-only permissions (0o600) on Unix systems.
#[cfg(unix)]
async fn set_restrictive_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = tokio::fs::metadata(path).await?;
    let mut perms = metadata.permissions();
    perms.set_mode(0o600);
    tokio::fs::set_permissions(path, perms).await?;
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_restrictive_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// Disk Store
// ============================================================================

/// File-per-key store rooted at a data directory.
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        if !dir.exists() {
            debug!(dir = %dir.display(), "Creating store directory");
            tokio::fs::create_dir_all(&dir).await?;
        }
        Ok(Self { dir })
    }

    /// Opens a store at the platform default data directory.
    pub async fn open_default() -> Result<Self, StoreError> {
        Self::open(default_data_dir()).await
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are `prefix:id`; ':' is not portable in filenames.
        let file = key.replace(':', "-");
        self.dir.join(format!("{file}.json"))
    }
}

#[async_trait]
impl KeyValueStore for DiskStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(key);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: StoredRecord = serde_json::from_str(&content)?;
        if record.is_expired() {
            debug!(key = %key, "Removing expired record");
            if let Err(e) = tokio::fs::remove_file(&path).await {
                warn!(key = %key, error = %e, "Failed to remove expired record");
            }
            return Ok(None);
        }

        Ok(Some(record.value))
    }

    async fn put(&self, key: &str, value: Value, ttl: Option<Duration>) -> Result<(), StoreError> {
        let record = StoredRecord {
            expires_at: ttl.and_then(|t| {
                chrono::Duration::from_std(t).ok().map(|d| Utc::now() + d)
            }),
            value,
        };

        let json = serde_json::to_string(&record)?;
        let path = self.path_for(key);

        // Write atomically so a crash never leaves a truncated record.
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &json).await?;
        tokio::fs::rename(&temp_path, &path).await?;

        set_restrictive_permissions(&path).await?;

        debug!(key = %key, path = %path.display(), "Record saved");
        Ok(())
    }
}
