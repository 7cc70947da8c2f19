mod document_alert;

pub use document_alert::{most_recent, DocumentAlert};
