//! Request Gateway
//!
//! The only component that crosses the process boundary. One operation per
//! backend capability; on success the relevant store is updated, on failure
//! the error is logged and surfaced as exactly one alert. Failures are
//! never re-thrown to the presentation layer: a read operation that comes
//! back `None` always co-occurs with an alert having been raised.

pub mod thumbnails;

use crate::bridge::ContentBridge;
use crate::error::BridgeError;
use crate::model::{Metadata, Preferences, SmartFolder};
use crate::store::{AlertQueue, AlertSeverity, CatalogStore, FilterStore, PreferencesStore};
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// How long an error alert stays on screen.
const ERROR_ALERT_TTL: Duration = Duration::from_secs(5);

/// The full set of UI stores, held together so the gateway and the
/// presentation layer share one context object.
pub struct Stores {
    pub catalog: CatalogStore,
    pub filters: FilterStore,
    pub alerts: AlertQueue,
    pub preferences: PreferencesStore,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            catalog: CatalogStore::new(),
            filters: FilterStore::new(),
            alerts: AlertQueue::new(),
            preferences: PreferencesStore::new(),
        }
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

pub struct RequestGateway {
    bridge: Arc<dyn ContentBridge>,
    stores: Arc<Stores>,
}

impl RequestGateway {
    pub fn new(bridge: Arc<dyn ContentBridge>, stores: Arc<Stores>) -> Self {
        Self { bridge, stores }
    }

    pub fn stores(&self) -> &Stores {
        &self.stores
    }

    /// Uniform failure path: diagnostics log plus one user-visible alert.
    fn report_error(&self, err: &BridgeError) {
        error!(code = err.code, description = %err.description, "Backend call failed");
        self.stores
            .alerts
            .push(err.to_string(), AlertSeverity::Error, ERROR_ALERT_TTL);
    }

    /// Convenience for explicit, non-error notices.
    pub fn show_alert(&self, message: impl Into<String>, severity: AlertSeverity, ttl: Duration) {
        self.stores.alerts.push(message, severity, ttl);
    }

    pub async fn add_files(&self, file_paths: Vec<String>) {
        debug!(count = file_paths.len(), "Adding files");
        if let Err(err) = self.bridge.add_files(file_paths).await {
            self.report_error(&err);
        }
    }

    /// Fetch preferences and mirror them into the preferences store.
    pub async fn get_preferences(&self) -> Option<Preferences> {
        match self.bridge.get_preferences().await {
            Ok(preferences) => {
                self.stores.preferences.set(preferences.clone());
                Some(preferences)
            }
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    /// Push the store's current preferences object back to the backend.
    pub async fn update_preferences(&self) {
        let Some(preferences) = self.stores.preferences.get() else {
            warn!("No preferences loaded; skipping update");
            return;
        };
        if let Err(err) = self.bridge.update_preferences(preferences).await {
            self.report_error(&err);
        }
    }

    /// Search results are returned to the caller only; they do not populate
    /// the catalog. Search is query-scoped, unlike the tag/folder refreshes.
    pub async fn search_content(&self, query: &str) -> Option<Vec<Metadata>> {
        debug!(query, "Searching content");
        match self.bridge.search_content(query).await {
            Ok(results) => Some(results),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    pub async fn get_metadata_by_hashes(&self, hashes: Vec<String>) -> Option<Vec<Metadata>> {
        match self.bridge.get_metadata_by_hashes(hashes).await {
            Ok(found) => Some(found),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    /// Delete the given entries. Only after the backend confirms are they
    /// dropped from the catalog and pruned from the selection.
    pub async fn delete_content(&self, metadata: &[Metadata]) {
        let hashes: Vec<String> = metadata.iter().map(|m| m.hash.clone()).collect();
        match self.bridge.delete_content(hashes.clone()).await {
            Ok(()) => {
                self.stores.catalog.remove_by_hashes(&hashes);
                let remaining: Vec<String> = self
                    .stores
                    .catalog
                    .selected()
                    .into_iter()
                    .filter(|hash| !hashes.contains(hash))
                    .collect();
                self.stores.catalog.set_selected(remaining);
            }
            Err(err) => self.report_error(&err),
        }
    }

    /// Stamp the modification time, apply the edit optimistically, and push
    /// it to the backend. If the push fails the local entry is re-synced to
    /// backend truth so the UI cannot keep diverged state.
    pub async fn update_metadata(&self, mut metadata: Metadata) {
        metadata.timestamp_modified = Utc::now().timestamp();
        self.stores.catalog.upsert_one(metadata.clone());

        if let Err(err) = self.bridge.update_content(metadata.clone()).await {
            self.report_error(&err);
            self.resync_entry(&metadata.hash).await;
        }
    }

    /// Replace a local entry with the backend's version, or remove it if the
    /// backend no longer knows the hash. A failure here is logged only; the
    /// user already saw the alert for the write that triggered the re-sync.
    async fn resync_entry(&self, hash: &str) {
        match self
            .bridge
            .get_metadata_by_hashes(vec![hash.to_string()])
            .await
        {
            Ok(found) => match found.into_iter().next() {
                Some(truth) => {
                    self.stores.catalog.upsert_one(truth);
                }
                None => {
                    self.stores.catalog.remove_by_hashes(&[hash.to_string()]);
                }
            },
            Err(err) => {
                warn!(code = err.code, hash, "Re-sync after failed update also failed");
            }
        }
    }

    pub async fn open_in_explorer(&self, path: &str) {
        if let Err(err) = self.bridge.open_in_explorer(path).await {
            self.report_error(&err);
        }
    }

    pub async fn get_file_size(&self, file_path: &str) -> Option<u64> {
        match self.bridge.get_file_size(file_path).await {
            Ok(size) => Some(size),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    /// Refresh the global tag vocabulary into the catalog store.
    pub async fn get_all_tags(&self) {
        match self.bridge.get_all_tags().await {
            Ok(tags) => self.stores.catalog.set_tags(tags),
            Err(err) => self.report_error(&err),
        }
    }

    pub async fn validate_folder_name(&self, folder_name: &str) -> Option<bool> {
        match self.bridge.validate_folder_name(folder_name).await {
            Ok(available) => Some(available),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    pub async fn validate_folder_path(&self, folder_path: &str) -> Option<bool> {
        match self.bridge.validate_folder_path(folder_path).await {
            Ok(available) => Some(available),
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    pub async fn add_folder(&self, folder_name: &str, folder_path: &str) {
        if let Err(err) = self.bridge.add_folder(folder_name, folder_path).await {
            self.report_error(&err);
        }
    }

    /// Refresh the smart folder list into the catalog store, replacing it
    /// wholesale.
    pub async fn get_all_folders(&self) -> Option<Vec<SmartFolder>> {
        match self.bridge.get_all_folders().await {
            Ok(folders) => {
                self.stores.catalog.set_folders(folders.clone());
                Some(folders)
            }
            Err(err) => {
                self.report_error(&err);
                None
            }
        }
    }

    /// Resolve the local thumbnail path for a hash. Pure derivation with no
    /// backend round-trip, but resolution failures route through the same
    /// alert mechanism as bridge errors.
    pub fn thumbnail_path(&self, hash: &str) -> Option<PathBuf> {
        match thumbnails::resolve(hash) {
            Ok(path) => Some(path),
            Err(err) => {
                self.report_error(&BridgeError::from(err));
                None
            }
        }
    }
}
