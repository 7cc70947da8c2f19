mod vector_store_service;

pub use vector_store_service::VectorStoreService;
