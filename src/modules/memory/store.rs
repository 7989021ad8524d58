use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type MemoryStoreResult<T> = Result<T, MemoryStoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: String,
    pub message: String,
}

impl ChatMessage {
    pub fn new(speaker: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            message: message.into(),
        }
    }
}

/// The conversation so far, plus the JSON record it is mirrored to.
///
/// The sequence only grows. The record is rewritten wholesale by `persist`,
/// never appended to, so after a successful persist the file and the
/// in-memory sequence are identical. A failed persist leaves the previous
/// record in place.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
    messages: Vec<ChatMessage>,
}

impl MemoryStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            messages: Vec::new(),
        }
    }

    /// Creates the store and fills it from the record at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> MemoryStoreResult<Self> {
        let mut store = Self::new(path);
        store.messages = store.load()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record. A record that does not exist yet is an empty conversation.
    pub fn load(&self) -> MemoryStoreResult<Vec<ChatMessage>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let messages: Vec<ChatMessage> = serde_json::from_str(&content)?;

        Ok(messages)
    }

    pub fn append(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn append_pair(&mut self, user: ChatMessage, reply: ChatMessage) {
        self.messages.push(user);
        self.messages.push(reply);
    }

    pub fn persist(&self, messages: &[ChatMessage]) -> MemoryStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(messages)?;
        let temp_path = self.temp_path();
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, &self.path)?;

        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn persist_all(&self) -> MemoryStoreResult<()> {
        self.persist(&self.messages)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn recent(&self, limit: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(limit);
        &self.messages[start..]
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
