use crate::config::{CharacterProfile, ChatConfig};
use crate::modules::emotion::{EmotionLabel, StyleTable, TriggerTable};
use crate::modules::generation::ResponseGenerator;
use crate::modules::memory::{ChatMessage, MemoryStore};
use crate::modules::prompt::PromptComposer;
use crate::modules::retrieval::{DocumentIndex, Passage, UploadDirectory};
use crate::modules::session::{SessionError, SessionState, TurnStage};
use std::path::PathBuf;
use tracing::{debug, info, info_span, trace, warn};

/// What a completed turn produced.
#[derive(Debug)]
pub struct TurnOutcome {
    pub previous_emotion: EmotionLabel,
    pub emotion: EmotionLabel,
    pub reply: String,
    pub passages: Vec<Passage>,
    /// Set when the reply is kept in memory but could not be written to disk.
    pub persist_warning: Option<SessionError>,
}

impl TurnOutcome {
    pub fn emotion_changed(&self) -> bool {
        self.previous_emotion != self.emotion
    }
}

/// One conversation with one character.
///
/// Every operation takes `&mut self`, so ingesting documents and running a turn
/// can never overlap.
pub struct ChatSession<I: DocumentIndex, G: ResponseGenerator> {
    profile: CharacterProfile,
    triggers: TriggerTable,
    styles: StyleTable,
    composer: PromptComposer,
    user_speaker: String,
    display_limit: usize,
    uploads: UploadDirectory,
    index: I,
    generator: G,
    state: SessionState<I::Handle>,
}

impl<I: DocumentIndex, G: ResponseGenerator> ChatSession<I, G> {
    pub fn new(config: &ChatConfig, index: I, generator: G) -> Result<Self, SessionError> {
        config.validate()?;

        let memory = MemoryStore::open(&config.storage.memory_file).map_err(SessionError::Load)?;
        let triggers = config
            .emotion
            .trigger_table()
            .map_err(SessionError::Configuration)?;

        let state = SessionState::new(memory, config.emotion.initial);

        info!(
            session_id = %state.session_id(),
            character = %config.character.name,
            emotion = %state.current_emotion(),
            loaded_messages = state.memory().len(),
            "session started"
        );

        Ok(Self {
            profile: config.character.clone(),
            triggers,
            styles: config.emotion.style_table(),
            composer: PromptComposer::new(config.prompt.clone()),
            user_speaker: config.prompt.user_speaker.clone(),
            display_limit: config.storage.display_limit,
            uploads: UploadDirectory::new(&config.storage.upload_dir),
            index,
            generator,
            state,
        })
    }

    pub fn profile(&self) -> &CharacterProfile {
        &self.profile
    }

    pub fn state(&self) -> &SessionState<I::Handle> {
        &self.state
    }

    pub fn uploads(&self) -> &UploadDirectory {
        &self.uploads
    }

    pub fn current_emotion(&self) -> EmotionLabel {
        self.state.current_emotion()
    }

    pub fn select_emotion(&mut self, label: EmotionLabel) {
        debug!(from = %self.state.current_emotion(), to = %label, "emotion selected");
        self.state.set_emotion(label);
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Builds a new index over `paths`. On failure the previous index, if any, stays.
    pub fn ingest(&mut self, paths: &[PathBuf]) -> Result<(), SessionError> {
        let handle = self.index.ingest(paths).map_err(|e| {
            warn!(error = %e, "ingestion failed");
            e
        })?;

        self.state.set_index(handle);
        Ok(())
    }

    /// Saves a document into the upload directory and re-indexes everything in it.
    pub fn upload(&mut self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SessionError> {
        let stored = self.uploads.store(file_name, bytes)?;
        self.reindex_uploads()?;
        Ok(stored)
    }

    pub fn reindex_uploads(&mut self) -> Result<(), SessionError> {
        let files = self.uploads.list()?;
        self.ingest(&files)
    }

    pub fn submit(&mut self, input: &str) -> Result<TurnOutcome, SessionError> {
        let span = info_span!("turn", session_id = %self.state.session_id());
        let _guard = span.enter();

        trace!(stage = %TurnStage::AwaitingInput);
        if input.is_empty() {
            return Err(SessionError::EmptyInput);
        }

        let Some(handle) = self.state.index() else {
            warn!("turn rejected: no document index");
            return Err(SessionError::NotReady);
        };

        trace!(stage = %TurnStage::Resolving);
        let passages = self.index.retrieve(handle, input);
        let previous_emotion = self.state.current_emotion();
        let emotion = self.triggers.resolve(previous_emotion, input);

        trace!(stage = %TurnStage::Composing);
        let prompt = self.composer.compose(&self.profile, emotion, &self.styles, input)?;

        trace!(stage = %TurnStage::Generating);
        let reply = self.generator.generate(&prompt).map_err(|e| {
            warn!(error = %e, "generation failed");
            e
        })?;

        trace!(stage = %TurnStage::Persisting);
        self.state.set_emotion(emotion);
        self.state.memory_mut().append_pair(
            ChatMessage::new(self.user_speaker.as_str(), input),
            ChatMessage::new(self.profile.name.as_str(), reply.as_str()),
        );

        let persist_warning = match self.state.memory().persist_all() {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    path = %self.state.memory().path().display(),
                    error = %e,
                    "conversation kept in memory but not saved"
                );
                Some(SessionError::Persistence(e))
            }
        };

        trace!(stage = %TurnStage::Displayed);
        info!(
            emotion = %emotion,
            passages = passages.len(),
            messages = self.state.memory().len(),
            "turn completed"
        );

        Ok(TurnOutcome {
            previous_emotion,
            emotion,
            reply,
            passages,
            persist_warning,
        })
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.state.memory().messages()
    }

    /// The tail of the conversation that gets shown to the user.
    pub fn recent_messages(&self) -> &[ChatMessage] {
        self.state.memory().recent(self.display_limit)
    }
}
