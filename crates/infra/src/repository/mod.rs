//! Record storage boundary.
//!
//! The store reads the full record set once at startup and writes the full
//! set back after every mutation. Implementations decide where the bytes live.

pub mod codec;
pub mod in_memory;
pub mod text_file;
pub mod r#trait;

pub use codec::ParseError;
pub use in_memory::InMemoryRepository;
pub use text_file::TextFileRepository;
pub use r#trait::{LoadReport, Loaded, RecordRepository, RepositoryError};
