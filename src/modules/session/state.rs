use crate::modules::emotion::EmotionLabel;
use crate::modules::memory::MemoryStore;
use std::fmt;
use uuid::Uuid;

/// Whether a document index is available to answer turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    Idle,
    Ready,
}

/// Progress of one turn, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStage {
    AwaitingInput,
    Resolving,
    Composing,
    Generating,
    Persisting,
    Displayed,
}

impl fmt::Display for TurnStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnStage::AwaitingInput => "awaiting_input",
            TurnStage::Resolving => "resolving",
            TurnStage::Composing => "composing",
            TurnStage::Generating => "generating",
            TurnStage::Persisting => "persisting",
            TurnStage::Displayed => "displayed",
        };
        f.write_str(name)
    }
}

/// Everything that changes over a session: the current emotion, the index
/// handle once documents are ingested, and the conversation.
///
/// The emotion picked by hand and the emotion resolved from the last turn are
/// the same field; whichever was written last is what the next turn starts from.
#[derive(Debug)]
pub struct SessionState<H> {
    session_id: Uuid,
    current_emotion: EmotionLabel,
    index: Option<H>,
    memory: MemoryStore,
}

impl<H> SessionState<H> {
    pub fn new(memory: MemoryStore, initial_emotion: EmotionLabel) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            current_emotion: initial_emotion,
            index: None,
            memory,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_emotion(&self) -> EmotionLabel {
        self.current_emotion
    }

    pub fn set_emotion(&mut self, label: EmotionLabel) {
        self.current_emotion = label;
    }

    pub fn readiness(&self) -> Readiness {
        match self.index {
            Some(_) => Readiness::Ready,
            None => Readiness::Idle,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    pub fn index(&self) -> Option<&H> {
        self.index.as_ref()
    }

    pub fn set_index(&mut self, handle: H) {
        self.index = Some(handle);
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut MemoryStore {
        &mut self.memory
    }
}
