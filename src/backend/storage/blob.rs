/**
 * Single-slot Blob Store
 *
 * One file on disk holds the most recently uploaded archive. Every upload
 * replaces it; there is no per-document identity.
 *
 * Writes are serialized behind a mutex and land in a `.part` sibling that is
 * renamed over the slot, so a concurrent download sees either the old or the
 * new archive, never a partial one.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct BlobStore {
    path: PathBuf,
    part_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl BlobStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut part_name = path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        part_name.push(".part");
        let part_path = path.with_file_name(part_name);

        Self {
            path,
            part_path,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the slot contents
    pub async fn write(&self, data: &[u8]) -> std::io::Result<()> {
        let _guard = self.write_lock.lock().await;
        tokio::fs::write(&self.part_path, data).await?;
        tokio::fs::rename(&self.part_path, &self.path).await?;
        tracing::debug!("[Storage] Wrote {} bytes to {}", data.len(), self.path.display());
        Ok(())
    }

    /// Read the slot contents
    ///
    /// Fails with `ErrorKind::NotFound` if nothing was uploaded yet.
    pub async fn read(&self) -> std::io::Result<Bytes> {
        let data = tokio::fs::read(&self.path).await?;
        Ok(Bytes::from(data))
    }
}
