//! The pipeline's view of the project/asset store.
//!
//! [`PgStore`] is the production implementation over the repositories in
//! `vibeshift-db`; [`MemoryStore`] backs tests and local dry runs.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use vibeshift_core::status::ProjectStatus;
use vibeshift_core::types::DbId;
use vibeshift_db::models::asset::CreateAsset;
use vibeshift_db::repositories::{AssetRepo, ProjectRepo};
use vibeshift_db::DbPool;

use crate::error::StoreError;

#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Set a project's status. Returns `false` if the project does not exist.
    async fn set_project_status(&self, id: DbId, status: ProjectStatus)
        -> Result<bool, StoreError>;

    async fn insert_asset(&self, asset: &CreateAsset) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationStore for PgStore {
    async fn set_project_status(
        &self,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<bool, StoreError> {
        Ok(ProjectRepo::update_status(&self.pool, id, status)
            .await?
            .is_some())
    }

    async fn insert_asset(&self, asset: &CreateAsset) -> Result<(), StoreError> {
        AssetRepo::create(&self.pool, asset).await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

/// Store that keeps everything in process memory.
///
/// Projects must be registered with [`MemoryStore::add_project`] before a
/// run; unknown ids behave like a missing row.
#[derive(Default)]
pub struct MemoryStore {
    statuses: Mutex<HashMap<DbId, Vec<ProjectStatus>>>,
    assets: Mutex<Vec<CreateAsset>>,
    reject_assets: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose asset inserts always fail.
    pub fn rejecting_assets() -> Self {
        Self {
            reject_assets: true,
            ..Self::default()
        }
    }

    pub fn add_project(&self, id: DbId) {
        self.statuses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, vec![ProjectStatus::Created]);
    }

    /// Current status of a project.
    pub fn status(&self, id: DbId) -> Option<ProjectStatus> {
        self.status_history(id).last().copied()
    }

    /// Every status the project has held, oldest first.
    pub fn status_history(&self, id: DbId) -> Vec<ProjectStatus> {
        self.statuses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Assets for a project in timeline order (stable on ties).
    pub fn assets(&self, project_id: DbId) -> Vec<CreateAsset> {
        let mut assets: Vec<CreateAsset> = self
            .assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|a| a.project_id == project_id)
            .cloned()
            .collect();
        assets.sort_by_key(|a| a.order_index);
        assets
    }
}

#[async_trait]
impl GenerationStore for MemoryStore {
    async fn set_project_status(
        &self,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<bool, StoreError> {
        let mut statuses = self
            .statuses
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        match statuses.get_mut(&id) {
            Some(history) => {
                history.push(status);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_asset(&self, asset: &CreateAsset) -> Result<(), StoreError> {
        if self.reject_assets {
            return Err(StoreError::Backend("asset inserts disabled".into()));
        }
        self.assets
            .lock()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?
            .push(asset.clone());
        Ok(())
    }
}
