use crate::modules::emotion::resolver::default_triggers;
use crate::modules::emotion::style::default_styles;
use crate::modules::emotion::{EmotionLabel, EmotionTrigger, StyleTable, TriggerTable};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterProfile {
    pub name: String,
    pub age: u8,
    pub persona: String,
    pub background: String,
    pub speaking_style: String,
}

impl CharacterProfile {
    pub fn new(name: impl Into<String>, age: u8) -> Self {
        Self {
            name: name.into(),
            age,
            persona: String::new(),
            background: String::new(),
            speaking_style: String::new(),
        }
    }

    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_speaking_style(mut self, speaking_style: impl Into<String>) -> Self {
        self.speaking_style = speaking_style.into();
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Character name must not be empty".to_string());
        }

        if self.age < MIN_AGE || self.age > MAX_AGE {
            return Err(format!(
                "Character age is {}, but must be between {} and {}",
                self.age, MIN_AGE, MAX_AGE
            ));
        }

        Ok(())
    }
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self::new("Luna", 25)
            .with_persona("감정을 강하게 표현하는 AI.")
            .with_background("인간의 감정을 깊이 연구하는 AI.")
            .with_speaking_style("부드러우면서도 감정을 담아.")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    pub initial: EmotionLabel,
    pub triggers: Vec<EmotionTrigger>,
    pub styles: HashMap<EmotionLabel, String>,
}

impl EmotionConfig {
    pub fn trigger_table(&self) -> Result<TriggerTable, String> {
        TriggerTable::new(self.triggers.clone())
    }

    pub fn style_table(&self) -> StyleTable {
        StyleTable::new(self.styles.clone())
    }
}

impl Default for EmotionConfig {
    fn default() -> Self {
        Self {
            initial: EmotionLabel::default(),
            triggers: default_triggers(),
            styles: default_styles(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub memory_file: PathBuf,
    pub upload_dir: PathBuf,
    pub display_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            memory_file: PathBuf::from("chat_memory.json"),
            upload_dir: PathBuf::from("uploads"),
            display_limit: 20,
        }
    }
}

/// Words spliced into the prompt and the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    pub state_word: String,
    pub user_label: String,
    pub user_speaker: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            state_word: "상태".to_string(),
            user_label: "사용자".to_string(),
            user_speaker: "나".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
    pub api_key_env: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            model: "mistral-7b".to_string(),
            temperature: 1.1,
            max_tokens: 512,
            timeout_secs: 120,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub chunk_size: usize,
    pub top_k: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            chunk_size: 800,
            top_k: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub character: CharacterProfile,
    pub emotion: EmotionConfig,
    pub storage: StorageConfig,
    pub prompt: PromptConfig,
    pub generator: GeneratorConfig,
    pub retrieval: RetrievalConfig,
}

impl ChatConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ChatConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    /// Like [`ChatConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.character.validate().map_err(ConfigError::Invalid)?;
        self.emotion.trigger_table().map_err(ConfigError::Invalid)?;

        let limits = [
            ("storage.display_limit", self.storage.display_limit as u64),
            ("retrieval.chunk_size", self.retrieval.chunk_size as u64),
            ("retrieval.top_k", self.retrieval.top_k as u64),
            ("generator.timeout_secs", self.generator.timeout_secs),
        ];

        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("'{}' must be greater than 0", name)));
            }
        }

        Ok(())
    }
}
