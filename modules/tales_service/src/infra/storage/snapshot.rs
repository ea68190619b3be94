//! Offline snapshot: a JSON array of tale rows on local disk

use super::row::TaleRow;
use crate::contract::{Tale, TaleQuery};
use crate::domain::filter::{apply_filters, distinct_nations};
use crate::domain::repository::TaleRepository;
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Snapshot file errors
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("offline snapshot {path} is missing")]
    Missing { path: PathBuf },

    #[error("failed to read offline snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("offline snapshot {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tales served from the offline snapshot
///
/// The file is read on every call, so a re-exported snapshot is picked up
/// without a restart.
#[derive(Debug, Clone)]
pub struct SnapshotTaleRepository {
    path: PathBuf,
}

impl SnapshotTaleRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Raw file contents
    pub async fn read_raw(&self) -> Result<Vec<u8>, SnapshotError> {
        tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnapshotError::Missing {
                    path: self.path.clone(),
                }
            } else {
                SnapshotError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })
    }

    /// All tales in file order
    pub async fn load(&self) -> Result<Vec<Tale>, SnapshotError> {
        let bytes = self.read_raw().await?;
        let rows: Vec<TaleRow> =
            serde_json::from_slice(&bytes).map_err(|e| SnapshotError::Malformed {
                path: self.path.clone(),
                source: e,
            })?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl TaleRepository for SnapshotTaleRepository {
    async fn find(&self, query: &TaleQuery) -> anyhow::Result<Vec<Tale>> {
        Ok(apply_filters(self.load().await?, query))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Tale>> {
        Ok(self.load().await?.into_iter().find(|t| t.id == id))
    }

    async fn list_nations(&self) -> anyhow::Result<Vec<String>> {
        Ok(distinct_nations(
            self.load().await?.into_iter().map(|t| t.nation),
        ))
    }
}

/// Write tales as a pretty-printed snapshot, replacing `path` atomically
///
/// Blocking; async callers go through `spawn_blocking`.
pub fn write_snapshot(path: &Path, tales: &[Tale]) -> Result<(), SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };

    let rows: Vec<TaleRow> = tales.iter().map(TaleRow::from).collect();
    let json = serde_json::to_string_pretty(&rows).map_err(|e| SnapshotError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir).map_err(io_err)?;

    let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(io_err)?;
    tmp.write_all(json.as_bytes()).map_err(io_err)?;
    tmp.write_all(b"\n").map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
