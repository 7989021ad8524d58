pub mod generator_mock;
pub mod index_mock;
pub mod memory_mock;
