use std::collections::HashMap;

use uuid::Uuid;

use super::RecordStore;
use crate::error::{DraftableError, Result};
use crate::record::Record;

/// In-memory store for tests and embedding.
#[derive(Debug)]
pub struct InMemoryStore<R> {
    records: HashMap<Uuid, R>,
    simulate_write_error: bool,
}

impl<R> InMemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            simulate_write_error: false,
        }
    }

    /// Make every subsequent save fail, for failure-path tests.
    pub fn set_simulate_write_error(&mut self, fail: bool) {
        self.simulate_write_error = fail;
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for InMemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record + Clone> RecordStore<R> for InMemoryStore<R> {
    fn save(&mut self, record: &R) -> Result<()> {
        if self.simulate_write_error {
            return Err(DraftableError::Store("simulated write error".to_string()));
        }
        self.records.insert(record.id(), record.clone());
        Ok(())
    }

    fn get(&self, id: &Uuid) -> Result<R> {
        self.records
            .get(id)
            .cloned()
            .ok_or(DraftableError::RecordNotFound(*id))
    }

    fn list(&self) -> Result<Vec<R>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or(DraftableError::RecordNotFound(*id))
    }
}
