pub mod chat_config;

pub use chat_config::{
    CharacterProfile, ChatConfig, ConfigError, EmotionConfig, GeneratorConfig, PromptConfig,
    RetrievalConfig, StorageConfig,
};
