use crate::config::ChatConfig;
use crate::modules::memory::ChatMessage;
use std::path::Path;

pub struct MemoryTestHelpers;

impl MemoryTestHelpers {
    pub const USER: &'static str = "나";
    pub const CHARACTER: &'static str = "Luna";

    /// `turns` (user, character) pairs in conversation order.
    pub fn conversation(turns: usize) -> Vec<ChatMessage> {
        (0..turns)
            .flat_map(|turn| {
                [
                    ChatMessage::new(Self::USER, format!("질문 {}", turn)),
                    ChatMessage::new(Self::CHARACTER, format!("대답 {}", turn)),
                ]
            })
            .collect()
    }

    /// Default configuration with every file kept under `dir`.
    pub fn config_in(dir: &Path) -> ChatConfig {
        let mut config = ChatConfig::default();
        config.storage.memory_file = dir.join("chat_memory.json");
        config.storage.upload_dir = dir.join("uploads");
        config
    }
}
