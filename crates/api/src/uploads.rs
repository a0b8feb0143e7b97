//! Filesystem store for uploaded photo and map files.
//!
//! Files live at `{root}/{namespace}/{filename}`. An upload is first staged
//! to a hidden file in the namespace directory and only renamed over the
//! live path once its metadata record exists. The rename replaces any
//! existing file with the same name (last write wins).

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use vsp_core::attachment::{is_single_component, relative_path, AttachmentKind};

static STAGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Writes uploaded attachment bytes under a fixed root directory.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write `bytes` next to the final location of `filename` without
    /// touching the live file.
    ///
    /// `filename` must already be sanitized to a single path component.
    /// The returned [`StagedFile`] removes its bytes when dropped unless
    /// [`StagedFile::commit`] succeeded.
    pub async fn stage(
        &self,
        kind: AttachmentKind,
        filename: &str,
        bytes: &[u8],
    ) -> io::Result<StagedFile> {
        if !is_single_component(filename) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("refusing to store '{filename}' outside its namespace"),
            ));
        }

        let dir = self.root.join(kind.namespace());
        tokio::fs::create_dir_all(&dir).await?;

        let seq = STAGE_SEQ.fetch_add(1, Ordering::Relaxed);
        let temp = dir.join(format!(".{filename}.{}.{seq}.part", std::process::id()));
        let staged = StagedFile {
            temp,
            target: dir.join(filename),
            relative: relative_path(kind, filename),
            committed: false,
        };
        tokio::fs::write(&staged.temp, bytes).await?;

        Ok(staged)
    }
}

/// Upload bytes waiting to be moved onto their live path.
#[derive(Debug)]
pub struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
    relative: String,
    committed: bool,
}

impl StagedFile {
    /// Storage path relative to the root, e.g. `photos/a.jpg`.
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    /// Atomically replace the live file with the staged bytes.
    pub async fn commit(mut self) -> io::Result<String> {
        tokio::fs::rename(&self.temp, &self.target).await?;
        self.committed = true;
        tracing::info!(path = %self.relative, "Stored attachment file");
        Ok(std::mem::take(&mut self.relative))
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if self.committed {
            return;
        }
        if let Err(e) = std::fs::remove_file(&self.temp) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %self.temp.display(), error = %e, "Failed to discard staged upload");
            }
        }
    }
}
