/// Database connection tests
pub mod db_tests;


use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::sync::{Mutex, OnceCell};

// migrations run once per test process, on a throwaway connection
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Held by tests that write rows, so listing windows are not shifted by a
/// concurrent insert or delete.
pub(crate) static TABLE_LOCK: Mutex<()> = Mutex::const_new(());

/// Live-database tests run only when `DATABASE_URL` is provided and
/// `SKIP_DB_TESTS` is not set.
pub(crate) fn db_tests_disabled() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err()
}

/// Setup test database with migrations
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    MIGRATED
        .get_or_try_init(|| async {
            let db = crate::db::connect().await?;
            migration::Migrator::up(&db, None).await?;
            Ok::<(), anyhow::Error>(())
        })
        .await?;
    crate::db::connect().await
}
