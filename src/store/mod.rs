//! Storage layer.
//!
//! [`RecordStore`] abstracts persistence so the publication logic never
//! touches I/O directly. Stores persist whatever they are given and return
//! everything they hold; hiding drafts is the query layer's job, not the
//! store's.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: for tests and embedding, with a write-error
//!   switch for failure-path tests.
//! - [`fs::JsonFileStore`]: a single JSON file holding the id → record map.

use uuid::Uuid;

use crate::error::Result;
use crate::record::Record;

pub mod fs;
pub mod memory;

/// Abstract interface for record persistence.
pub trait RecordStore<R: Record> {
    /// Save a record (create or update).
    fn save(&mut self, record: &R) -> Result<()>;

    /// Get a record by id.
    fn get(&self, id: &Uuid) -> Result<R>;

    /// List all records, drafts included.
    fn list(&self) -> Result<Vec<R>>;

    /// Delete a record permanently.
    fn delete(&mut self, id: &Uuid) -> Result<()>;
}
