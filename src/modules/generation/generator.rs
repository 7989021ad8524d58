use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Generator returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl From<reqwest::Error> for GenerationError {
    fn from(error: reqwest::Error) -> Self {
        GenerationError::Http(error.to_string())
    }
}

impl From<std::io::Error> for GenerationError {
    fn from(error: std::io::Error) -> Self {
        GenerationError::Runtime(error.to_string())
    }
}

/// Text completion backend. A call blocks until the reply is complete.
pub trait ResponseGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError>;
}

impl<G: ResponseGenerator + ?Sized> ResponseGenerator for Box<G> {
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError> {
        (**self).generate(prompt)
    }
}
