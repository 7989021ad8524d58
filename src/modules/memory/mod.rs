pub mod store;

pub use store::{ChatMessage, MemoryStore, MemoryStoreError, MemoryStoreResult};
