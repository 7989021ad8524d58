use affect_chat::{GenerationError, ResponseGenerator};
use mockall::mock;

mock! {
    pub Generator {}

    impl ResponseGenerator for Generator {
        fn generate(&mut self, prompt: &str) -> Result<String, GenerationError>;
    }
}

impl MockGenerator {
    /// A generator that must never be called.
    pub fn unused() -> Self {
        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);
        generator
    }

    /// A generator that answers `reply` to every prompt.
    pub fn replying(reply: &'static str) -> Self {
        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .returning(move |_| Ok(reply.to_string()));
        generator
    }
}
