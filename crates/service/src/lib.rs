//! Service layer for settings objects.
//! - `settings::repository` owns persistence of records (SeaORM and in-memory).
//! - `settings::service` maps wire payloads onto it and composes paginated listings.

pub mod errors;
pub mod pagination;
pub mod settings;
#[cfg(test)]
pub mod test_support;
