//! Persisted-record store. A single last-writer-wins slot; no versioning.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::ResumeRecord;

const RECORD_FILE: &str = "resume.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage task failed: {0}")]
    Task(String),
}

/// Saves and loads the one resume the editor works on.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn save(&self, record: &ResumeRecord) -> Result<(), StoreError>;

    /// Returns the last saved record, or `None` if nothing has been saved yet.
    async fn load(&self) -> Result<Option<ResumeRecord>, StoreError>;
}

/// Stores the record as `<dir>/resume.json`.
///
/// Writes go to a temp file in the same directory and are renamed into place,
/// so a concurrent reader sees either the old or the new record.
#[derive(Debug, Clone)]
pub struct FileResumeStore {
    dir: PathBuf,
}

impl FileResumeStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(RECORD_FILE)
    }
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn save(&self, record: &ResumeRecord) -> Result<(), StoreError> {
        let json = serde_json::to_vec(record)?;
        let dir = self.dir.clone();
        let path = self.path();

        tokio::task::spawn_blocking(move || write_atomically(&dir, &path, &json))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        info!(path = %self.path().display(), "Resume saved");
        Ok(())
    }

    async fn load(&self) -> Result<Option<ResumeRecord>, StoreError> {
        let path = self.path();
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No saved resume yet");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn write_atomically(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}
