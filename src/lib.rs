pub mod config;
pub mod modules;
pub mod utils;

#[cfg(test)]
mod _test_mock;

pub use config::{CharacterProfile, ChatConfig, ConfigError};
pub use modules::emotion::{resolve, EmotionLabel, EmotionTrigger, StyleTable, TriggerTable};
pub use modules::generation::{GenerationError, OpenAiCompatibleGenerator, ResponseGenerator};
pub use modules::memory::{ChatMessage, MemoryStore, MemoryStoreError};
pub use modules::prompt::{compose, PromptComposer};
pub use modules::retrieval::{DocumentIndex, IngestionError, LocalDocumentIndex, Passage, UploadDirectory};
pub use modules::session::{ChatSession, SessionError, TurnOutcome};
