//! Backend bridge contract.
//!
//! The only crossing point to the backend process. Every capability is one
//! async method; failures come back as the backend's structured
//! `{code, description}` error. Calls are not cancellable and no timeout is
//! enforced here; a hung backend call hangs its caller.

use crate::error::BridgeError;
use crate::model::{Metadata, Preferences, SmartFolder};
use async_trait::async_trait;

/// Request/response surface of the external backend.
///
/// Implementations wrap whatever transport actually reaches the backend
/// process; tests script one in memory. No ordering is imposed between
/// calls, so racing edits to the same entity resolve last-response-wins.
#[async_trait]
pub trait ContentBridge: Send + Sync {
    async fn add_files(&self, file_paths: Vec<String>) -> Result<(), BridgeError>;

    async fn get_preferences(&self) -> Result<Preferences, BridgeError>;

    async fn update_preferences(&self, preferences: Preferences) -> Result<(), BridgeError>;

    async fn search_content(&self, query: &str) -> Result<Vec<Metadata>, BridgeError>;

    async fn get_metadata_by_hashes(
        &self,
        hashes: Vec<String>,
    ) -> Result<Vec<Metadata>, BridgeError>;

    async fn delete_content(&self, hashes: Vec<String>) -> Result<(), BridgeError>;

    async fn update_content(&self, metadata: Metadata) -> Result<(), BridgeError>;

    async fn open_in_explorer(&self, path: &str) -> Result<(), BridgeError>;

    async fn get_file_size(&self, file_path: &str) -> Result<u64, BridgeError>;

    async fn get_all_tags(&self) -> Result<Vec<String>, BridgeError>;

    async fn validate_folder_name(&self, folder_name: &str) -> Result<bool, BridgeError>;

    async fn validate_folder_path(&self, folder_path: &str) -> Result<bool, BridgeError>;

    async fn add_folder(&self, folder_name: &str, folder_path: &str) -> Result<(), BridgeError>;

    async fn get_all_folders(&self) -> Result<Vec<SmartFolder>, BridgeError>;
}
