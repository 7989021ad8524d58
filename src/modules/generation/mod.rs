pub mod generator;
pub mod openai;

pub use generator::{GenerationError, ResponseGenerator};
pub use openai::OpenAiCompatibleGenerator;
