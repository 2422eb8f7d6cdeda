//! The store: authoritative in-memory inventory plus write-through persistence.

use thiserror::Error;

use shoestock_core::{DomainError, DomainResult, ProductCode};
use shoestock_inventory::{Inventory, InventoryValuationSummary, NewShoe, ShoeRecord};

use crate::repository::{LoadReport, RecordRepository, RepositoryError};

#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected by the domain; state unchanged.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Persisting failed; the process should stop.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Owns the record set for the process lifetime.
///
/// Every mutation rewrites the full set through the repository.
#[derive(Debug)]
pub struct Store<R> {
    repo: R,
    inventory: Inventory,
}

impl<R: RecordRepository> Store<R> {
    /// Load from `repo`. Skipped lines are reported, not fatal.
    pub fn open(repo: R) -> Result<(Self, LoadReport), RepositoryError> {
        let loaded = repo.load()?;
        Ok((
            Self {
                repo,
                inventory: loaded.inventory,
            },
            loaded.report,
        ))
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn list(&self) -> &[ShoeRecord] {
        self.inventory.list()
    }

    pub fn add(&mut self, input: &NewShoe) -> Result<ShoeRecord, StoreError> {
        let record = self.inventory.add(input)?.clone();
        tracing::info!(code = %record.code(), "shoe added");
        self.persist()?;
        Ok(record)
    }

    pub fn find_lowest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.inventory.lowest_quantity()
    }

    pub fn find_highest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.inventory.highest_quantity()
    }

    /// Add `amount` units to `code` and persist.
    pub fn restock(&mut self, code: &ProductCode, amount: u64) -> Result<ShoeRecord, StoreError> {
        let record = self.inventory.restock(code, amount)?.clone();
        self.persist()?;
        Ok(record)
    }

    pub fn value_per_item(&self) -> impl Iterator<Item = (&ProductCode, u64)> + '_ {
        self.inventory.value_per_item()
    }

    pub fn valuation(&self) -> InventoryValuationSummary {
        self.inventory.valuation()
    }

    pub fn find_by_code(&self, code: &str) -> DomainResult<&ShoeRecord> {
        self.inventory.find_by_code(code)
    }

    /// Rewrite the backing storage from the current state.
    pub fn persist(&self) -> Result<(), RepositoryError> {
        self.repo.save(self.inventory.list())
    }
}
