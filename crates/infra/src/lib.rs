//! Infrastructure layer: file persistence, the store, configuration.

pub mod config;
pub mod repository;
pub mod store;

pub use config::StoreConfig;
pub use repository::{
    InMemoryRepository, LoadReport, ParseError, RecordRepository, RepositoryError,
    TextFileRepository,
};
pub use store::{Store, StoreError};
