use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shoestock_inventory::{Inventory, ShoeRecord};

use super::codec;
use super::r#trait::{LoadReport, Loaded, RecordRepository, RepositoryError};

/// Delimited text file holding the whole inventory.
///
/// Saves overwrite the file in place (no temp file, no backup), so a crash
/// mid-write can leave it truncated.
#[derive(Debug, Clone)]
pub struct TextFileRepository {
    path: PathBuf,
}

impl TextFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordRepository for TextFileRepository {
    fn load(&self) -> Result<Loaded, RepositoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "inventory file not found; starting empty");
                return Ok(Loaded {
                    inventory: Inventory::new(),
                    report: LoadReport {
                        issues: Vec::new(),
                        source_missing: true,
                    },
                });
            }
            Err(source) => {
                return Err(RepositoryError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let (inventory, issues) = codec::decode(&bytes);
        tracing::debug!(
            path = %self.path.display(),
            records = inventory.len(),
            skipped = issues.len(),
            "inventory loaded"
        );
        Ok(Loaded {
            inventory,
            report: LoadReport {
                issues,
                source_missing: false,
            },
        })
    }

    fn save(&self, records: &[ShoeRecord]) -> Result<(), RepositoryError> {
        fs::write(&self.path, codec::encode(records)).map_err(|source| RepositoryError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), records = records.len(), "inventory persisted");
        Ok(())
    }
}
