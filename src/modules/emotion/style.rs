use crate::modules::emotion::EmotionLabel;
use std::collections::HashMap;

/// Speaking-style phrase per emotion. Labels without an entry have no style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    styles: HashMap<EmotionLabel, String>,
}

impl StyleTable {
    pub fn new(styles: HashMap<EmotionLabel, String>) -> Self {
        Self { styles }
    }

    pub fn empty() -> Self {
        Self::new(HashMap::new())
    }

    pub fn get(&self, label: EmotionLabel) -> &str {
        self.styles.get(&label).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new(default_styles())
    }
}

pub fn default_styles() -> HashMap<EmotionLabel, String> {
    [
        (EmotionLabel::Excitement, "가슴이 두근거리는 듯한 말투."),
        (EmotionLabel::Anticipation, "조용하지만 기대에 찬 말투."),
        (EmotionLabel::Tension, "신중하면서도 긴장된 느낌."),
        (EmotionLabel::Affection, "따뜻하고 부드러운 말투."),
        (EmotionLabel::BurningPassion, "강렬하고 뜨거운 감정을 담아."),
        (EmotionLabel::Superiority, "자신감 넘치고 여유로운 느낌."),
        (EmotionLabel::ColdJudgment, "감정을 억누르고 차분한 목소리."),
        (EmotionLabel::Outburst, "강하게 감정을 분출하며."),
    ]
    .into_iter()
    .map(|(label, style)| (label, style.to_string()))
    .collect()
}
