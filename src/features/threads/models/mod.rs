mod message;
mod run;
mod thread;

pub use message::{sort_by_creation, Message, MessageRole, TEMP_ID_PREFIX};
pub use run::{Run, RunStatus};
pub use thread::Thread;
