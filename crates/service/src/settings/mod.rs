//! Settings module: three-layer architecture (domain, repository, service).
//!
//! The repository owns persistence of settings records; the service maps wire
//! payloads onto it and assembles paginated listings.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::SettingsService;
