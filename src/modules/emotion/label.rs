use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown emotion label: '{0}'")]
pub struct UnknownEmotionLabel(pub String);

/// The closed set of moods the character can be in.
///
/// The Korean name is the canonical form: it is what gets written into prompts,
/// configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EmotionLabel {
    #[default]
    Neutral,
    Excitement,
    Anticipation,
    Tension,
    Restlessness,
    Overwhelmed,
    Affection,
    DeepLonging,
    WarmEmbrace,
    PossessiveLove,
    BurningPassion,
    Superiority,
    Confidence,
    QuietDominance,
    AbsoluteCertainty,
    ColdJudgment,
    Outburst,
    GentleYearning,
}

impl EmotionLabel {
    pub const ALL: [EmotionLabel; 18] = [
        EmotionLabel::Neutral,
        EmotionLabel::Excitement,
        EmotionLabel::Anticipation,
        EmotionLabel::Tension,
        EmotionLabel::Restlessness,
        EmotionLabel::Overwhelmed,
        EmotionLabel::Affection,
        EmotionLabel::DeepLonging,
        EmotionLabel::WarmEmbrace,
        EmotionLabel::PossessiveLove,
        EmotionLabel::BurningPassion,
        EmotionLabel::Superiority,
        EmotionLabel::Confidence,
        EmotionLabel::QuietDominance,
        EmotionLabel::AbsoluteCertainty,
        EmotionLabel::ColdJudgment,
        EmotionLabel::Outburst,
        EmotionLabel::GentleYearning,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmotionLabel::Neutral => "기본",
            EmotionLabel::Excitement => "설렘",
            EmotionLabel::Anticipation => "기대감",
            EmotionLabel::Tension => "긴장",
            EmotionLabel::Restlessness => "초조함",
            EmotionLabel::Overwhelmed => "억누를 수 없는 감정",
            EmotionLabel::Affection => "애정",
            EmotionLabel::DeepLonging => "깊은 동경",
            EmotionLabel::WarmEmbrace => "따뜻한 포옹",
            EmotionLabel::PossessiveLove => "소유하고 싶은 사랑",
            EmotionLabel::BurningPassion => "불타는 열정",
            EmotionLabel::Superiority => "우월감",
            EmotionLabel::Confidence => "자신감",
            EmotionLabel::QuietDominance => "조용한 지배력",
            EmotionLabel::AbsoluteCertainty => "절대적인 확신",
            EmotionLabel::ColdJudgment => "냉정한 판단",
            EmotionLabel::Outburst => "폭발적인 감정",
            EmotionLabel::GentleYearning => "잔잔한 그리움",
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionLabel {
    type Err = UnknownEmotionLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        EmotionLabel::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == name)
            .ok_or_else(|| UnknownEmotionLabel(s.to_string()))
    }
}

impl TryFrom<String> for EmotionLabel {
    type Error = UnknownEmotionLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmotionLabel> for String {
    fn from(label: EmotionLabel) -> Self {
        label.as_str().to_string()
    }
}
