//! File-backed parameter store
//!
//! Layout on disk mirrors the device parameter directory:
//!
//! ```text
//! <root>/
//!   d/
//!     DisableTouchInput   # contents "1" or "0"
//!   .tmp_<key>_<pid>_<n>  # transient, renamed over d/<key>
//! ```
//!
//! A value is `true` only when the file content is exactly `1`. Writes go to a
//! temp file in `<root>` which is fsynced and then renamed into `d/`, so a
//! reader never observes a partially written value.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{StoreError, StoreResult};
use crate::store::{validate_key, ParamStore};

/// Default parameter root on the device
pub const DEFAULT_PARAMS_ROOT: &str = "/data/params";

const VALUES_DIR: &str = "d";

/// Parameter store backed by one file per key
#[derive(Debug)]
pub struct FileParamStore {
    root: PathBuf,
    tmp_seq: AtomicU64,
}

impl FileParamStore {
    /// Open (and create if needed) the store rooted at `root`
    pub async fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        let values_dir = root.join(VALUES_DIR);

        tokio::fs::create_dir_all(&values_dir).await.map_err(|e| {
            StoreError::Unavailable(format!("cannot create {}: {}", values_dir.display(), e))
        })?;

        tracing::debug!(root = %root.display(), "Opened file parameter store");

        Ok(Self {
            root,
            tmp_seq: AtomicU64::new(0),
        })
    }

    /// Store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path holding the value for `key`
    pub fn value_path(&self, key: &str) -> PathBuf {
        self.root.join(VALUES_DIR).join(key)
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        let seq = self.tmp_seq.fetch_add(1, Ordering::Relaxed);
        self.root.join(format!(".tmp_{}_{}_{}", key, std::process::id(), seq))
    }

    async fn write_atomic(&self, key: &str, contents: &[u8]) -> std::io::Result<()> {
        let tmp = self.tmp_path(key);

        let result = async {
            let mut file = tokio::fs::File::create(&tmp).await?;
            file.write_all(contents).await?;
            file.sync_all().await?;
            drop(file);
            tokio::fs::rename(&tmp, self.value_path(key)).await
        }
        .await;

        if result.is_err() {
            let _ = tokio::fs::remove_file(&tmp).await;
        }
        result
    }
}

#[async_trait]
impl ParamStore for FileParamStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn get_bool(&self, key: &str) -> StoreResult<bool> {
        validate_key(key)?;

        match tokio::fs::read(self.value_path(key)).await {
            Ok(contents) => Ok(contents == b"1"),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Read {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn put_bool(&self, key: &str, value: bool) -> StoreResult<()> {
        validate_key(key)?;

        let contents: &[u8] = if value { b"1" } else { b"0" };
        self.write_atomic(key, contents)
            .await
            .map_err(|source| StoreError::Write {
                key: key.to_string(),
                source,
            })?;

        tracing::debug!(key, value, "Parameter written");
        Ok(())
    }
}
