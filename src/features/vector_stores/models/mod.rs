mod vector_store;

pub use vector_store::{DocumentAccess, VectorStore};
