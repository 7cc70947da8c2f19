mod document;

pub use document::{Document, DocumentStatus, IngestStatus};
