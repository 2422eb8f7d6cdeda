use std::path::PathBuf;
use std::sync::RwLock;

use shoestock_inventory::{Inventory, ShoeRecord};

use super::codec;
use super::r#trait::{LoadReport, Loaded, RecordRepository, RepositoryError};

/// In-memory repository holding the encoded file contents.
///
/// Intended for tests/dev. Goes through the same codec as the text file.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    contents: RwLock<Option<String>>,
    fail_writes: bool,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing file contents.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
            fail_writes: false,
        }
    }

    /// Every save fails with a write error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Current contents, `None` if nothing was ever written.
    pub fn contents(&self) -> Option<String> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    fn pseudo_path() -> PathBuf {
        PathBuf::from("<memory>")
    }
}

impl RecordRepository for InMemoryRepository {
    fn load(&self) -> Result<Loaded, RepositoryError> {
        let Some(text) = self.contents() else {
            return Ok(Loaded {
                inventory: Inventory::new(),
                report: LoadReport {
                    issues: Vec::new(),
                    source_missing: true,
                },
            });
        };
        let (inventory, issues) = codec::decode(text.as_bytes());
        Ok(Loaded {
            inventory,
            report: LoadReport {
                issues,
                source_missing: false,
            },
        })
    }

    fn save(&self, records: &[ShoeRecord]) -> Result<(), RepositoryError> {
        let write_error = |msg: &str| RepositoryError::Write {
            path: Self::pseudo_path(),
            source: std::io::Error::other(msg.to_string()),
        };
        if self.fail_writes {
            return Err(write_error("writes disabled"));
        }
        let mut contents = self.contents.write().map_err(|_| write_error("lock poisoned"))?;
        *contents = Some(codec::encode(records));
        Ok(())
    }
}
