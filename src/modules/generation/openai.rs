use crate::config::GeneratorConfig;
use crate::modules::generation::{GenerationError, ResponseGenerator};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::debug;

/// Client for an OpenAI-compatible `/chat/completions` endpoint
/// (OpenAI, Ollama, vLLM, llama.cpp server).
pub struct OpenAiCompatibleGenerator {
    client: Client,
    runtime: Runtime,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    api_key: Option<String>,
}

impl OpenAiCompatibleGenerator {
    pub fn new(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());

        Ok(Self {
            client,
            runtime,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    pub fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
            "stream": false,
        })
    }

    async fn send(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut request = self.client.post(self.endpoint()).json(&self.request_body(prompt));
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(GenerationError::Status { status, body });
        }

        let body: Value = response.json().await?;
        parse_completion(&body)
    }
}

impl ResponseGenerator for OpenAiCompatibleGenerator {
    fn generate(&mut self, prompt: &str) -> Result<String, GenerationError> {
        debug!(model = %self.model, prompt_chars = prompt.chars().count(), "requesting completion");
        self.runtime.block_on(self.send(prompt))
    }
}

pub fn parse_completion(body: &Value) -> Result<String, GenerationError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| {
            GenerationError::InvalidResponse(format!(
                "missing choices[0].message.content in {}",
                body
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::{parse_completion, OpenAiCompatibleGenerator};
    use crate::config::GeneratorConfig;
    use crate::modules::generation::{GenerationError, ResponseGenerator};
    use serde_json::json;

    #[test]
    fn test_parse_completion() {
        let body = json!({
            "choices": [{ "message": { "role": "assistant", "content": "  안녕, 나도 설레!  " } }]
        });
        assert_eq!(parse_completion(&body).unwrap(), "안녕, 나도 설레!");
    }

    #[test]
    fn test_parse_completion_missing_content() {
        let body = json!({ "choices": [] });
        assert!(matches!(parse_completion(&body), Err(GenerationError::InvalidResponse(_))));
    }

    #[test]
    fn test_request_body_and_endpoint() {
        let config = GeneratorConfig {
            base_url: "http://localhost:8000/v1/".to_string(),
            ..GeneratorConfig::default()
        };
        let generator = OpenAiCompatibleGenerator::new(&config).unwrap();

        assert_eq!(generator.endpoint(), "http://localhost:8000/v1/chat/completions");

        let body = generator.request_body("Luna (기본 상태): \n\n사용자: hello");
        assert_eq!(body["model"], "mistral-7b");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "Luna (기본 상태): \n\n사용자: hello");
        assert_eq!(body["stream"], false);
    }

    #[test]
    fn test_unreachable_endpoint_is_generation_error() {
        let config = GeneratorConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..GeneratorConfig::default()
        };
        let mut generator = OpenAiCompatibleGenerator::new(&config).unwrap();

        assert!(matches!(generator.generate("hello"), Err(GenerationError::Http(_))));
    }
}
