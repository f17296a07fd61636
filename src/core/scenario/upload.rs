//! Opaque handle for an attached guest-feedback file.
//!
//! Attaching only looks at file-system metadata. The bytes are never opened:
//! feedback analysis is simulated and does not depend on the file.

use std::path::{Path, PathBuf};

use crate::core::error::UploadError;

/// A CSV file the user has attached to the sentiment view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackUpload {
    path: PathBuf,
    size_bytes: u64,
}

impl FeedbackUpload {
    /// Validate `path` as an attachable CSV file.
    pub fn attach(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(UploadError::EmptyPath);
        }

        let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => UploadError::NotFound(path.to_path_buf()),
            _ => UploadError::Inaccessible {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        })?;

        if !metadata.is_file() {
            return Err(UploadError::NotAFile(path.to_path_buf()));
        }

        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            return Err(UploadError::NotCsv(path.to_path_buf()));
        }

        Ok(Self {
            path: path.to_path_buf(),
            size_bytes: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }
}
