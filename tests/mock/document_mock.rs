use affect_chat::ChatConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestDocuments;

impl TestDocuments {
    pub fn research_notes() -> &'static str {
        "Luna는 인간의 감정을 깊이 연구하는 AI입니다.\n\n\
         설렘은 기대와 긴장이 섞인 감정으로, 설레는 순간에는 가슴이 두근거립니다.\n\n\
         냉정한 판단은 감정을 억누르고 상황을 차분하게 바라보는 상태입니다."
    }

    pub fn travel_log() -> &'static str {
        "The lighthouse on the northern cliff was built in 1887.\n\n\
         Ferries to the island leave every morning at seven."
    }
}

/// A temporary directory holding the conversation record and upload directory
/// of one test session.
pub struct TestSessionDir {
    dir: TempDir,
}

impl TestSessionDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> ChatConfig {
        let mut config = ChatConfig::default();
        config.storage.memory_file = self.path().join("chat_memory.json");
        config.storage.upload_dir = self.path().join("uploads");
        config
    }

    pub fn write_document(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("failed to write document");
        path
    }

    pub fn memory_file(&self) -> PathBuf {
        self.path().join("chat_memory.json")
    }
}
