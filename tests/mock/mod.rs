#![allow(dead_code)]

pub mod generator_mock;
pub mod document_mock;

pub use document_mock::{TestDocuments, TestSessionDir};
pub use generator_mock::MockGenerator;
