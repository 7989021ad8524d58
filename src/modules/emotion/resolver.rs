use crate::modules::emotion::EmotionLabel;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTrigger {
    pub keyword: String,
    pub label: EmotionLabel,
}

impl EmotionTrigger {
    pub fn new(keyword: impl Into<String>, label: EmotionLabel) -> Self {
        Self {
            keyword: keyword.into(),
            label,
        }
    }
}

/// Keyword triggers in declaration order.
///
/// Order is part of the contract: when several keywords occur in the same input,
/// the trigger declared first wins, wherever the keywords sit in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerTable {
    triggers: Vec<EmotionTrigger>,
}

impl TriggerTable {
    pub fn new(triggers: Vec<EmotionTrigger>) -> Result<Self, String> {
        for (index, trigger) in triggers.iter().enumerate() {
            if trigger.keyword.is_empty() {
                return Err(format!(
                    "Trigger at index {} ('{}') has an empty keyword",
                    index, trigger.label
                ));
            }
        }

        Ok(Self { triggers })
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (&'a str, EmotionLabel)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(keyword, label)| EmotionTrigger::new(keyword, label))
                .collect(),
        )
    }

    pub fn triggers(&self) -> &[EmotionTrigger] {
        &self.triggers
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn first_match(&self, input: &str) -> Option<&EmotionTrigger> {
        self.triggers
            .iter()
            .find(|trigger| input.contains(trigger.keyword.as_str()))
    }

    pub fn resolve(&self, current: EmotionLabel, input: &str) -> EmotionLabel {
        resolve(current, input, self)
    }
}

impl Default for TriggerTable {
    fn default() -> Self {
        Self {
            triggers: default_triggers(),
        }
    }
}

pub fn default_triggers() -> Vec<EmotionTrigger> {
    vec![
        EmotionTrigger::new("설레", EmotionLabel::Excitement),
        EmotionTrigger::new("기대돼", EmotionLabel::Anticipation),
        EmotionTrigger::new("두근거려", EmotionLabel::Tension),
        EmotionTrigger::new("소유하고 싶어", EmotionLabel::PossessiveLove),
        EmotionTrigger::new("너무 좋아", EmotionLabel::BurningPassion),
        EmotionTrigger::new("자신 있어", EmotionLabel::Confidence),
        EmotionTrigger::new("불안해", EmotionLabel::Restlessness),
        EmotionTrigger::new("차분해져", EmotionLabel::ColdJudgment),
    ]
}

/// Picks the label of the first trigger (in table order) whose keyword is a
/// case-sensitive substring of `input`; keeps `current` when nothing matches.
pub fn resolve(current: EmotionLabel, input: &str, table: &TriggerTable) -> EmotionLabel {
    match table.first_match(input) {
        Some(trigger) => {
            debug!(keyword = %trigger.keyword, from = %current, to = %trigger.label, "emotion trigger matched");
            trigger.label
        }
        None => current,
    }
}
