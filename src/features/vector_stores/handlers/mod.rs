mod vector_store_handler;

pub use vector_store_handler::{handle, VectorStoreCommand};
