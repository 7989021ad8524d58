use crate::modules::retrieval::IngestionError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Directory that uploaded documents are copied into before indexing.
/// Files keep their original name; re-uploading a name replaces the old file.
#[derive(Debug, Clone)]
pub struct UploadDirectory {
    root: PathBuf,
}

impl UploadDirectory {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn store(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, IngestionError> {
        // Only the final component is kept so an upload cannot land outside the directory.
        let name = Path::new(file_name)
            .file_name()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| IngestionError::InvalidFileName(file_name.to_string()))?;

        std::fs::create_dir_all(&self.root)?;

        let destination = self.root.join(name);
        std::fs::write(&destination, bytes)?;

        info!(path = %destination.display(), bytes = bytes.len(), "stored upload");
        Ok(destination)
    }

    pub fn list(&self) -> Result<Vec<PathBuf>, IngestionError> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        Ok(files)
    }
}
