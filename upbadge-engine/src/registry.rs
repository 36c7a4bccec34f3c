//! Monitor registry.

use std::sync::Arc;

use ring::rand::{SecureRandom, SystemRandom};
use tracing::info;
use upbadge_core::{MonitorConfig, Theme};
use upbadge_probe::prober::normalize_url;
use upbadge_store::{KeyValueStore, get_record, keys, put_record};

use crate::error::EngineError;

/// Characters monitor ids are drawn from.
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Monitor id length. 36^8 ids makes accidental collision negligible.
const ID_LEN: usize = 8;

/// Maps opaque monitor ids to target configurations.
///
/// Configs are created at registration, read on every check, and never
/// auto-deleted; they are stored without a TTL.
#[derive(Clone)]
pub struct MonitorRegistry {
    store: Arc<dyn KeyValueStore>,
    rng: SystemRandom,
}

impl MonitorRegistry {
    /// Creates a registry over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            rng: SystemRandom::new(),
        }
    }

    /// Validates the target, mints an id, and persists a new monitor config.
    ///
    /// `display_name` falls back to the target URL when not provided.
    pub async fn create(
        &self,
        target_url: &str,
        display_name: Option<String>,
        theme: Theme,
    ) -> Result<MonitorConfig, EngineError> {
        let normalized = normalize_url(target_url);
        if url::Url::parse(&normalized).is_err() {
            return Err(EngineError::InvalidTarget(target_url.to_string()));
        }

        let id = self.generate_id()?;
        let config = MonitorConfig::new(
            id,
            target_url,
            display_name.unwrap_or_else(|| target_url.to_string()),
            theme,
        );

        put_record(self.store.as_ref(), &keys::config_key(&config.id), &config, None).await?;

        info!(
            monitor_id = %config.id,
            target_url = %config.target_url,
            "Monitor registered"
        );
        Ok(config)
    }

    /// Looks up a monitor config by id.
    pub async fn lookup(&self, monitor_id: &str) -> Result<Option<MonitorConfig>, EngineError> {
        let config =
            get_record(self.store.as_ref(), &keys::config_key(monitor_id)).await?;
        Ok(config)
    }

    /// Draws an id of [`ID_LEN`] characters from the system CSPRNG.
    fn generate_id(&self) -> Result<String, EngineError> {
        let mut id = String::with_capacity(ID_LEN);
        // Rejection-sample to keep the draw uniform over the alphabet.
        let bound = (u8::MAX as usize / ID_ALPHABET.len()) * ID_ALPHABET.len();
        while id.len() < ID_LEN {
            let mut byte = [0u8; 1];
            self.rng
                .fill(&mut byte)
                .map_err(|_| EngineError::IdGeneration)?;
            if (byte[0] as usize) < bound {
                id.push(ID_ALPHABET[byte[0] as usize % ID_ALPHABET.len()] as char);
            }
        }
        Ok(id)
    }
}
