mod thread_dto;

pub use thread_dto::{CreateMessageDto, CreateRunDto, ThreadDto};
