//! Thread chat view: optimistic send, run start, run polling, message refresh.

mod backend;
mod thread_chat;

pub use backend::{ChatBackend, RemoteChatBackend};
pub use thread_chat::{ChatError, ChatSnapshot, SendOutcome, ThreadChat};
