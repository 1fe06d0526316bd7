//! # File-Backed Key-Value Store
//!
//! Durable store for hosts that embed the directory without a database:
//! the full entry map is kept in memory and snapshotted to disk on every
//! write, via a temp file renamed over the previous snapshot so a crash
//! mid-write never leaves a torn file behind.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::errors::KvStoreError;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanDirection};

use super::scan_map_prefix;

/// File-backed ordered key-value store.
#[derive(Debug)]
pub struct FileBackedKvStore {
    data: BTreeMap<Vec<u8>, Vec<u8>>,
    path: PathBuf,
}

impl FileBackedKvStore {
    /// Open a store at the given path, loading any existing snapshot.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, KvStoreError> {
        let path = path.as_ref().to_path_buf();
        let data = Self::load_snapshot(&path)?;

        #[cfg(feature = "tracing-log")]
        if data.is_empty() {
            tracing::info!("[gov-directory] no existing snapshot at {}", path.display());
        } else {
            tracing::info!(
                "[gov-directory] loaded {} keys from {}",
                data.len(),
                path.display()
            );
        }

        Ok(Self { data, path })
    }

    fn load_snapshot(path: &Path) -> Result<BTreeMap<Vec<u8>, Vec<u8>>, KvStoreError> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(KvStoreError::Io {
                    message: e.to_string(),
                })
            }
        };

        bincode::deserialize(&bytes).map_err(|e| KvStoreError::Corruption {
            message: e.to_string(),
        })
    }

    fn save_snapshot(&self) -> Result<(), KvStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| KvStoreError::Io {
                message: e.to_string(),
            })?;
        }

        let bytes = bincode::serialize(&self.data).map_err(|e| KvStoreError::Io {
            message: e.to_string(),
        })?;

        // Write atomically via temp file + rename.
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| KvStoreError::Io {
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| KvStoreError::Io {
            message: e.to_string(),
        })?;
        file.sync_all().map_err(|e| KvStoreError::Io {
            message: e.to_string(),
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| KvStoreError::Io {
            message: e.to_string(),
        })
    }
}

impl KeyValueStore for FileBackedKvStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, KvStoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), KvStoreError> {
        self.data.insert(key.to_vec(), value.to_vec());
        self.save_snapshot()
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), KvStoreError> {
        self.data.remove(key);
        self.save_snapshot()
    }

    fn exists(&self, key: &[u8]) -> Result<bool, KvStoreError> {
        Ok(self.data.contains_key(key))
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), KvStoreError> {
        for op in operations {
            match op {
                BatchOperation::Put { key, value } => {
                    self.data.insert(key, value);
                }
                BatchOperation::Delete { key } => {
                    self.data.remove(&key);
                }
            }
        }
        self.save_snapshot()
    }

    fn scan_prefix<'a>(
        &'a self,
        prefix: &[u8],
        direction: ScanDirection,
    ) -> Result<Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>, KvStoreError> {
        Ok(scan_map_prefix(&self.data, prefix, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.db");

        {
            let mut store = FileBackedKvStore::open(&path).unwrap();
            store.put(b"g:a", b"1").unwrap();
            store.put(b"g:b", b"2").unwrap();
            store.delete(b"g:a").unwrap();
        }

        let store = FileBackedKvStore::open(&path).unwrap();
        assert_eq!(store.get(b"g:a").unwrap(), None);
        assert_eq!(store.get(b"g:b").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileBackedKvStore::open(dir.path().join("fresh.db")).unwrap();
        assert_eq!(store.get(b"anything").unwrap(), None);
    }

    #[test]
    fn test_batch_write_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.db");

        {
            let mut store = FileBackedKvStore::open(&path).unwrap();
            store
                .atomic_batch_write(vec![
                    BatchOperation::put(b"p:x", b"1"),
                    BatchOperation::put(b"p:y", b"2"),
                ])
                .unwrap();
        }

        let store = FileBackedKvStore::open(&path).unwrap();
        let keys: Vec<_> = store
            .scan_prefix(b"p:", ScanDirection::Ascending)
            .unwrap()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec![b"p:x".to_vec(), b"p:y".to_vec()]);
    }

    #[test]
    fn test_corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("directory.db");
        fs::write(&path, b"\xFF\xFFnot a snapshot").unwrap();

        let err = FileBackedKvStore::open(&path).unwrap_err();
        assert!(matches!(err, KvStoreError::Corruption { .. }));
    }
}
