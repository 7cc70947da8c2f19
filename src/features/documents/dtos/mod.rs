mod document_dto;

pub use document_dto::{IngestResponseDto, IngestS3Dto, IngestSource};
