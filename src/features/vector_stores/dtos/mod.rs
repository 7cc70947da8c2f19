mod vector_store_dto;

pub use vector_store_dto::{DocumentAccessDto, VectorStoreDto};
