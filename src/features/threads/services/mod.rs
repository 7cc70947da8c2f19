mod message_service;
mod run_service;
mod thread_service;

pub use message_service::MessageService;
pub use run_service::RunService;
pub use thread_service::ThreadService;
