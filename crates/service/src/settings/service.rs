use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{SettingsCreate, SettingsList, SettingsResponse, SettingsUpdate};
use super::repository::SettingsRepository;
use crate::errors::ServiceError;
use crate::pagination::Pagination;

/// Settings application service, independent of the web framework.
///
/// Holds no per-request state; every call is one repository round trip.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self { Self { repo } }

    /// Store a new document under a freshly generated id.
    ///
    /// # Examples
    /// ```
    /// use service::settings::{SettingsService, domain::SettingsCreate, repository::mock::MockSettingsRepository};
    /// use std::sync::Arc;
    /// let svc = SettingsService::new(Arc::new(MockSettingsRepository::default()));
    /// let created = tokio_test::block_on(svc.create_settings(SettingsCreate { data: serde_json::json!({"theme": "dark"}) })).unwrap();
    /// assert_eq!(created.data["theme"], "dark");
    /// assert!(!created.id.is_empty());
    /// ```
    #[instrument(skip(self, payload))]
    pub async fn create_settings(&self, payload: SettingsCreate) -> Result<SettingsResponse, ServiceError> {
        let created = self.repo.create(payload.data).await?;
        info!(id = %created.id, "settings_created");
        Ok(created.into())
    }

    /// One page of settings, `page` being 1-based. `total` counts every stored record.
    #[instrument(skip(self))]
    pub async fn get_all_settings(&self, page: u64, page_size: u64) -> Result<SettingsList, ServiceError> {
        let (skip, limit) = Pagination::new(page, page_size).window();
        let (items, total) = self.repo.list_page(skip, limit).await?;
        debug!(count = items.len(), total, skip, "settings_page_loaded");
        Ok(SettingsList {
            items: items.into_iter().map(SettingsResponse::from).collect(),
            total,
            page,
            page_size,
        })
    }

    #[instrument(skip(self))]
    pub async fn get_settings_by_id(&self, id: &str) -> Result<Option<SettingsResponse>, ServiceError> {
        Ok(self.repo.get_by_id(id).await?.map(SettingsResponse::from))
    }

    /// Replace the whole document; `None` when `id` does not exist.
    #[instrument(skip(self, payload))]
    pub async fn update_settings(&self, id: &str, payload: SettingsUpdate) -> Result<Option<SettingsResponse>, ServiceError> {
        let updated = self.repo.update(id, payload.data).await?;
        if updated.is_some() {
            info!(id, "settings_replaced");
        }
        Ok(updated.map(SettingsResponse::from))
    }

    /// Idempotent: succeeds whether or not the record existed.
    ///
    /// # Examples
    /// ```
    /// use service::settings::{SettingsService, repository::mock::MockSettingsRepository};
    /// use std::sync::Arc;
    /// let svc = SettingsService::new(Arc::new(MockSettingsRepository::default()));
    /// assert!(tokio_test::block_on(svc.delete_settings("never-created")).unwrap());
    /// ```
    #[instrument(skip(self))]
    pub async fn delete_settings(&self, id: &str) -> Result<bool, ServiceError> {
        let existed = self.repo.delete(id).await?;
        info!(id, existed, "settings_deleted");
        Ok(true)
    }
}
