use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::errors::ServiceError;
use models::settings::Model as SettingsRecord;

/// Persistence primitives for settings records.
///
/// Absence is reported as `Ok(None)` / `Ok(false)`; errors are reserved for
/// invalid documents and store faults.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn create(&self, data: Value) -> Result<SettingsRecord, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<SettingsRecord>, ServiceError>;
    /// At most `limit` records after `skip`, in key order, plus the total record count.
    async fn list_page(&self, skip: u64, limit: u64) -> Result<(Vec<SettingsRecord>, u64), ServiceError>;
    async fn update(&self, id: &str, data: Value) -> Result<Option<SettingsRecord>, ServiceError>;
    async fn delete(&self, id: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmSettingsRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn create(&self, data: Value) -> Result<SettingsRecord, ServiceError> {
        Ok(models::settings::create(&self.db, data).await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<SettingsRecord>, ServiceError> {
        Ok(models::settings::find(&self.db, id).await?)
    }

    async fn list_page(&self, skip: u64, limit: u64) -> Result<(Vec<SettingsRecord>, u64), ServiceError> {
        Ok(models::settings::list_page(&self.db, skip, limit).await?)
    }

    async fn update(&self, id: &str, data: Value) -> Result<Option<SettingsRecord>, ServiceError> {
        Ok(models::settings::replace_data(&self.db, id, data).await?)
    }

    async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(models::settings::delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    use models::settings::{generate_id, validate_data};

    /// Keyed by id, so listing order matches the SQL store's primary-key order.
    #[derive(Default)]
    pub struct MockSettingsRepository {
        records: RwLock<BTreeMap<String, Value>>,
    }

    impl MockSettingsRepository {
        pub async fn len(&self) -> usize { self.records.read().await.len() }

        pub async fn is_empty(&self) -> bool { self.records.read().await.is_empty() }
    }

    fn to_usize(n: u64) -> usize { usize::try_from(n).unwrap_or(usize::MAX) }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepository {
        async fn create(&self, data: Value) -> Result<SettingsRecord, ServiceError> {
            validate_data(&data)?;
            let id = generate_id();
            self.records.write().await.insert(id.clone(), data.clone());
            Ok(SettingsRecord { id, data })
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<SettingsRecord>, ServiceError> {
            let records = self.records.read().await;
            Ok(records.get(id).map(|data| SettingsRecord { id: id.to_string(), data: data.clone() }))
        }

        async fn list_page(&self, skip: u64, limit: u64) -> Result<(Vec<SettingsRecord>, u64), ServiceError> {
            let records = self.records.read().await;
            let items = records
                .iter()
                .skip(to_usize(skip))
                .take(to_usize(limit))
                .map(|(id, data)| SettingsRecord { id: id.clone(), data: data.clone() })
                .collect();
            Ok((items, records.len() as u64))
        }

        async fn update(&self, id: &str, data: Value) -> Result<Option<SettingsRecord>, ServiceError> {
            validate_data(&data)?;
            let mut records = self.records.write().await;
            let Some(slot) = records.get_mut(id) else { return Ok(None) };
            *slot = data.clone();
            Ok(Some(SettingsRecord { id: id.to_string(), data }))
        }

        async fn delete(&self, id: &str) -> Result<bool, ServiceError> {
            Ok(self.records.write().await.remove(id).is_some())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use serde_json::json;

        #[tokio::test]
        async fn mock_lists_in_key_order_with_full_count() {
            let repo = MockSettingsRepository::default();
            for i in 0..5 {
                repo.create(json!({"i": i})).await.unwrap();
            }
            let (page, total) = repo.list_page(1, 2).await.unwrap();
            assert_eq!(total, 5);
            assert_eq!(page.len(), 2);
            let (all, _) = repo.list_page(0, 100).await.unwrap();
            let mut ids: Vec<_> = all.iter().map(|r| r.id.clone()).collect();
            let in_order = ids.clone();
            ids.sort();
            assert_eq!(ids, in_order);
            assert_eq!(page[0].id, in_order[1]);
        }

        #[tokio::test]
        async fn mock_update_of_missing_id_writes_nothing() {
            let repo = MockSettingsRepository::default();
            assert!(repo.update("nope", json!({"a": 1})).await.unwrap().is_none());
            assert!(repo.is_empty().await);
        }

        #[tokio::test]
        async fn mock_rejects_null_documents() {
            let repo = MockSettingsRepository::default();
            let err = repo.create(Value::Null).await.unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)));
            assert_eq!(repo.len().await, 0);
        }
    }
}
