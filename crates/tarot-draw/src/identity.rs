//! Stable per-device identifier.

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::store::KeyValueStore;

/// Store key holding the device identifier.
pub const DEVICE_ID_KEY: &str = "tarot_device_id";

/// A fresh identifier: `<uuid-v4>_<unix millis>`.
pub fn new_device_id(now: DateTime<Utc>) -> String {
    format!("{}_{}", Uuid::new_v4(), now.timestamp_millis())
}

/// Return the persisted device id, generating and persisting one if needed.
///
/// Never fails: an unreadable store is treated as empty and a failed write
/// only means the next session will generate another id.
pub fn device_id<S: KeyValueStore>(store: &mut S, now: DateTime<Utc>) -> String {
    match store.get(DEVICE_ID_KEY) {
        Ok(Some(id)) if !id.trim().is_empty() => return id.trim().to_string(),
        Ok(_) => {}
        Err(e) => warn!(error = %e, "device id unreadable, generating a new one"),
    }

    let id = new_device_id(now);
    match store.set(DEVICE_ID_KEY, &id) {
        Ok(()) => info!(device_id = %id, "created device id"),
        Err(e) => warn!(error = %e, "failed to persist device id"),
    }
    id
}
