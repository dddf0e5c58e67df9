//! JSON-file store.
//!
//! A single `data.json` under the store root holds the full id → record map.
//! Writes land in a temp file in the same directory and are renamed over the
//! target, so a crash mid-write leaves the previous file intact.

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::RecordStore;
use crate::error::{DraftableError, Result};
use crate::record::Record;

pub struct JsonFileStore<R> {
    root: PathBuf,
    _records: PhantomData<fn() -> R>,
}

impl<R> JsonFileStore<R>
where
    R: Record + Serialize + DeserializeOwned,
{
    /// A store rooted at `root`. The directory is created on first write.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            _records: PhantomData,
        }
    }

    fn data_file(&self) -> PathBuf {
        self.root.join("data.json")
    }

    fn load(&self) -> Result<HashMap<Uuid, R>> {
        let path = self.data_file();
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn persist(&self, records: &HashMap<Uuid, R>) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let content = serde_json::to_string_pretty(records)?;

        let tmp = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, self.data_file())?;
        Ok(())
    }
}

impl<R> RecordStore<R> for JsonFileStore<R>
where
    R: Record + Clone + Serialize + DeserializeOwned,
{
    fn save(&mut self, record: &R) -> Result<()> {
        let mut records = self.load()?;
        records.insert(record.id(), record.clone());
        self.persist(&records)
    }

    fn get(&self, id: &Uuid) -> Result<R> {
        self.load()?
            .remove(id)
            .ok_or(DraftableError::RecordNotFound(*id))
    }

    fn list(&self) -> Result<Vec<R>> {
        Ok(self.load()?.into_values().collect())
    }

    fn delete(&mut self, id: &Uuid) -> Result<()> {
        let mut records = self.load()?;
        if records.remove(id).is_none() {
            return Err(DraftableError::RecordNotFound(*id));
        }
        self.persist(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::Post;
    use chrono::Utc;

    #[test]
    fn save_and_get_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        let mut post = Post::new("On disk", "Body");
        post.published_at = Some(Utc::now());
        store.save(&post).unwrap();

        let loaded = store.get(&post.id).unwrap();
        assert_eq!(loaded.title, "On disk");
        assert_eq!(loaded.published_at, post.published_at);
    }

    #[test]
    fn records_survive_a_new_store_instance() {
        let dir = tempfile::tempdir().unwrap();
        let post = Post::new("Persistent", "");

        {
            let mut store = JsonFileStore::new(dir.path());
            store.save(&post).unwrap();
        }

        let reopened: JsonFileStore<Post> = JsonFileStore::new(dir.path());
        let listed = reopened.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, post.id);
    }

    #[test]
    fn empty_root_lists_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Post> = JsonFileStore::new(dir.path());
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn get_missing_record_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Post> = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.get(&Uuid::new_v4()),
            Err(DraftableError::RecordNotFound(_))
        ));
    }

    #[test]
    fn delete_removes_and_errors_on_missing() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path());

        let post = Post::new("Short-lived", "");
        store.save(&post).unwrap();
        store.delete(&post.id).unwrap();

        assert!(store.list().unwrap().is_empty());
        assert!(store.delete(&post.id).is_err());
    }

    #[test]
    fn corrupt_data_file_surfaces_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "not json").unwrap();

        let store: JsonFileStore<Post> = JsonFileStore::new(dir.path());
        assert!(matches!(
            store.list(),
            Err(DraftableError::Serialization(_))
        ));
    }
}
