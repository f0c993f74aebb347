use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store.io_error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store.corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

/// A record kept in a [`JsonStore`], identified by a positive integer.
pub trait Record {
    fn id(&self) -> u64;
}

/// One JSON array file mirrored in memory.
///
/// The file is always rewritten whole, pretty-printed. The in-memory list
/// only changes once the write has succeeded, so memory and disk agree
/// after every call.
pub struct JsonStore<T> {
    path: PathBuf,
    records: Vec<T>,
    next_id: u64,
}

impl<T> JsonStore<T>
where
    T: Record + Serialize + DeserializeOwned + Clone,
{
    /// Loads the file at `path`, creating it with an empty array if it does
    /// not exist. Invalid JSON is reported as [`StoreError::Corrupted`].
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<Vec<T>>(&bytes)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "Store file missing, creating it");
                write_records::<T>(&path, &[]).await?;
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };

        let next_id = next_id_after(&records);
        tracing::debug!(
            path = %path.display(),
            records = records.len(),
            next_id,
            "Store loaded"
        );

        Ok(Self {
            path,
            records,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Id to hand out to the next new record. Never decreases while the
    /// store is open, even when the highest record is deleted.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Overwrites the file with `records`, then adopts them in memory.
    pub async fn persist(&mut self, records: Vec<T>) -> Result<(), StoreError> {
        write_records(&self.path, &records).await?;
        self.next_id = self.next_id.max(next_id_after(&records));
        self.records = records;
        Ok(())
    }
}

fn next_id_after<T: Record>(records: &[T]) -> u64 {
    records
        .iter()
        .map(Record::id)
        .max()
        .map_or(1, |max| max + 1)
}

async fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StoreError> {
    let json = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u64,
        text: String,
    }

    impl Record for Note {
        fn id(&self) -> u64 {
            self.id
        }
    }

    fn note(id: u64, text: &str) -> Note {
        Note {
            id,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_file_with_empty_array_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let store = JsonStore::<Note>::open(&path).await.unwrap();

        assert!(store.records().is_empty());
        assert_eq!(store.next_id(), 1);
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn should_continue_ids_after_highest_existing_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, r#"[{"id":3,"text":"a"},{"id":8,"text":"b"}]"#).unwrap();

        let store = JsonStore::<Note>::open(&path).await.unwrap();

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.next_id(), 9);
    }

    #[tokio::test]
    async fn should_fail_when_file_holds_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        std::fs::write(&path, "{ not json").unwrap();

        let result = JsonStore::<Note>::open(&path).await;

        assert!(matches!(result, Err(StoreError::Corrupted(_))));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{ not json");
    }

    #[tokio::test]
    async fn should_write_pretty_json_and_reload_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = JsonStore::<Note>::open(&path).await.unwrap();

        store
            .persist(vec![note(1, "first"), note(2, "second")])
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  {\n    \"id\": 1,"));

        let reloaded = JsonStore::<Note>::open(&path).await.unwrap();
        assert_eq!(reloaded.records(), store.records());
        assert_eq!(reloaded.next_id(), 3);
    }

    #[tokio::test]
    async fn should_not_lower_next_id_when_highest_record_removed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let mut store = JsonStore::<Note>::open(&path).await.unwrap();
        store
            .persist(vec![note(1, "first"), note(2, "second")])
            .await
            .unwrap();

        store.persist(vec![note(1, "first")]).await.unwrap();

        assert_eq!(store.next_id(), 3);
    }
}
