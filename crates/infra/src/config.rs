//! Store configuration.
//!
//! There are no flags or environment overrides; defaults live here.

use std::path::PathBuf;

use crate::repository::{LoadReport, RepositoryError, TextFileRepository};
use crate::store::Store;

/// Backing file, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.txt";

/// Units added by a restock when the user accepts the default.
pub const DEFAULT_RESTOCK_AMOUNT: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub default_restock: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_FILE),
            default_restock: DEFAULT_RESTOCK_AMOUNT,
        }
    }
}

impl StoreConfig {
    /// Open a file-backed store at `path`.
    pub fn open(&self) -> Result<(Store<TextFileRepository>, LoadReport), RepositoryError> {
        Store::open(TextFileRepository::new(&self.path))
    }
}
