pub mod composer;

pub use composer::{compose, ComposeError, PromptComposer};
