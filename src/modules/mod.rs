pub mod emotion;
pub mod generation;
pub mod memory;
pub mod prompt;
pub mod retrieval;
pub mod session;
