use std::path::PathBuf;

use thiserror::Error;

use shoestock_inventory::{Inventory, ShoeRecord};

use super::codec::ParseError;

/// IO failure against the backing storage. Not recoverable by the caller.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("failed to read inventory file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write inventory file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What happened while loading, for the user to see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Lines that were skipped.
    pub issues: Vec<ParseError>,
    /// The backing file did not exist; the inventory starts empty.
    pub source_missing: bool,
}

/// Loaded state plus the report describing how it was loaded.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub inventory: Inventory,
    pub report: LoadReport,
}

/// Storage boundary for the full record set.
///
/// The whole set is read at once and written at once; there is no incremental
/// update.
pub trait RecordRepository {
    /// Read every record. A missing source is not an error.
    fn load(&self) -> Result<Loaded, RepositoryError>;

    /// Replace the stored set with `records`, in order.
    fn save(&self, records: &[ShoeRecord]) -> Result<(), RepositoryError>;
}

impl<R> RecordRepository for &R
where
    R: RecordRepository + ?Sized,
{
    fn load(&self) -> Result<Loaded, RepositoryError> {
        (**self).load()
    }

    fn save(&self, records: &[ShoeRecord]) -> Result<(), RepositoryError> {
        (**self).save(records)
    }
}
