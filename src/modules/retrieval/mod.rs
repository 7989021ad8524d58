pub mod index;
pub mod local;
pub mod uploads;

pub use index::{DocumentIndex, IngestionError, Passage};
pub use local::{LocalDocumentIndex, LocalIndexHandle};
pub use uploads::UploadDirectory;
