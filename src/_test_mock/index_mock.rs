use crate::modules::retrieval::{DocumentIndex, IngestionError, Passage};
use std::path::PathBuf;

/// Index that accepts any non-empty path list and answers every query with
/// the same passages.
#[derive(Default)]
pub struct StaticIndex {
    pub passages: Vec<Passage>,
}

impl DocumentIndex for StaticIndex {
    type Handle = Vec<PathBuf>;

    fn ingest(&mut self, paths: &[PathBuf]) -> Result<Self::Handle, IngestionError> {
        if paths.is_empty() {
            return Err(IngestionError::NoDocuments { attempted: 0 });
        }
        Ok(paths.to_vec())
    }

    fn retrieve(&self, _handle: &Self::Handle, _query: &str) -> Vec<Passage> {
        self.passages.clone()
    }
}
