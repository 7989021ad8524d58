use crate::config::{CharacterProfile, PromptConfig};
use crate::modules::emotion::{EmotionLabel, StyleTable};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Cannot compose prompt: {0}")]
pub struct ComposeError(pub String);

/// Builds the text handed to the generator for one turn.
///
/// Shape: `{name} ({label} {state_word}): {style}\n\n{user_label}: {input}`.
/// The user input is inserted verbatim.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    words: PromptConfig,
}

impl PromptComposer {
    pub fn new(words: PromptConfig) -> Self {
        Self { words }
    }

    pub fn compose(
        &self,
        profile: &CharacterProfile,
        label: EmotionLabel,
        styles: &StyleTable,
        user_input: &str,
    ) -> Result<String, ComposeError> {
        profile.validate().map_err(ComposeError)?;

        Ok(format!(
            "{} ({} {}): {}\n\n{}: {}",
            profile.name,
            label,
            self.words.state_word,
            styles.get(label),
            self.words.user_label,
            user_input
        ))
    }
}

pub fn compose(
    profile: &CharacterProfile,
    label: EmotionLabel,
    styles: &StyleTable,
    user_input: &str,
) -> Result<String, ComposeError> {
    PromptComposer::default().compose(profile, label, styles, user_input)
}

#[cfg(test)]
mod tests {
    use super::{compose, PromptComposer};
    use crate::config::{CharacterProfile, PromptConfig};
    use crate::modules::emotion::{EmotionLabel, StyleTable};

    #[test]
    fn test_compose_exact_template() {
        let prompt = compose(
            &CharacterProfile::default(),
            EmotionLabel::Excitement,
            &StyleTable::default(),
            "나는 설레",
        )
        .unwrap();

        assert_eq!(prompt, "Luna (설렘 상태): 가슴이 두근거리는 듯한 말투.\n\n사용자: 나는 설레");
    }

    #[test]
    fn test_compose_without_style() {
        let prompt = compose(
            &CharacterProfile::default(),
            EmotionLabel::Neutral,
            &StyleTable::default(),
            "hello",
        )
        .unwrap();

        assert_eq!(prompt, "Luna (기본 상태): \n\n사용자: hello");
    }

    #[test]
    fn test_compose_custom_words() {
        let composer = PromptComposer::new(PromptConfig {
            state_word: "state".to_string(),
            user_label: "User".to_string(),
            user_speaker: "me".to_string(),
        });

        let prompt = composer
            .compose(
                &CharacterProfile::new("Nova", 30),
                EmotionLabel::Affection,
                &StyleTable::empty(),
                "hi there",
            )
            .unwrap();

        assert_eq!(prompt, "Nova (애정 state): \n\nUser: hi there");
    }

    #[test]
    fn test_compose_rejects_invalid_profile() {
        let result = compose(
            &CharacterProfile::new("", 25),
            EmotionLabel::Neutral,
            &StyleTable::default(),
            "hello",
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("name"));
    }
}
