pub mod chat_session;
pub mod error;
pub mod state;

pub use chat_session::{ChatSession, TurnOutcome};
pub use error::{SessionError, NOT_READY_MESSAGE};
pub use state::{Readiness, SessionState, TurnStage};
