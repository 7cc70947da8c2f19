use async_trait::async_trait;
use std::sync::Arc;

use crate::core::error::Result;
use crate::features::threads::models::{Message, Run, Thread};
use crate::features::threads::services::{MessageService, RunService, ThreadService};

/// Remote operations the chat view depends on
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn get_thread(&self, thread_id: &str) -> Result<Thread>;

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message>;

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run>;

    async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run>;

    /// Messages in any order; callers sort
    async fn list_messages(&self, thread_id: &str) -> Result<Vec<Message>>;
}

/// Chat backend over the REST services
pub struct RemoteChatBackend {
    threads: Arc<ThreadService>,
    messages: Arc<MessageService>,
    runs: Arc<RunService>,
}

impl RemoteChatBackend {
    pub fn new(
        threads: Arc<ThreadService>,
        messages: Arc<MessageService>,
        runs: Arc<RunService>,
    ) -> Self {
        Self {
            threads,
            messages,
            runs,
        }
    }
}

#[async_trait]
impl ChatBackend for RemoteChatBackend {
    async fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        self.threads.get(thread_id).await
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message> {
        self.messages.create(thread_id, content).await
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        self.runs.create(thread_id, assistant_id).await
    }

    async fn get_run(&self, _thread_id: &str, run_id: &str) -> Result<Run> {
        self.runs.get(run_id).await
    }

    async fn list_messages(&self, thread_id: &str) -> Result<Vec<Message>> {
        self.threads.list_messages(thread_id).await
    }
}
