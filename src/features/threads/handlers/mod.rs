mod chat_handler;
mod thread_handler;

pub use chat_handler::{chat, ChatArgs};
pub use thread_handler::{handle, ThreadCommand};
