use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("No documents could be loaded from {attempted} path(s)")]
    NoDocuments { attempted: usize },

    #[error("Invalid upload file name: '{0}'")]
    InvalidFileName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A piece of an ingested document returned for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Passage {
    pub source: PathBuf,
    pub text: String,
    pub score: f32,
}

impl Passage {
    pub fn new(source: impl Into<PathBuf>, text: impl Into<String>, score: f32) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            score,
        }
    }
}

/// Retrieval backend. `ingest` produces an opaque handle; `retrieve` only reads it.
pub trait DocumentIndex {
    type Handle;

    fn ingest(&mut self, paths: &[PathBuf]) -> Result<Self::Handle, IngestionError>;

    fn retrieve(&self, handle: &Self::Handle, query: &str) -> Vec<Passage>;
}

pub fn display_source(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
