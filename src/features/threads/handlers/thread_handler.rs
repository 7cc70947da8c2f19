use clap::Subcommand;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::threads::models::{sort_by_creation, Message, Thread};

#[derive(Subcommand, Debug)]
pub enum ThreadCommand {
    /// List threads
    List,
    /// Show one thread
    Get { id: String },
    /// Start a thread on a vector store
    Create {
        #[arg(long)]
        vector_store: String,
    },
    /// Move a thread to another vector store
    Update {
        id: String,
        #[arg(long)]
        vector_store: String,
    },
    /// Delete a thread
    Delete { id: String },
    /// Print the messages of a thread, oldest first
    Messages { id: String },
}

fn thread_line(thread: &Thread) -> String {
    format!(
        "{}  [{}]  {}",
        thread.id,
        thread
            .vector_store_name
            .as_deref()
            .or(thread.vector_store_id.as_deref())
            .unwrap_or("-"),
        thread.created_at.format("%Y-%m-%d %H:%M")
    )
}

pub fn message_line(message: &Message) -> String {
    format!(
        "[{}] {}: {}",
        message.created_at.format("%H:%M:%S"),
        message.role,
        message.content
    )
}

pub async fn handle(ctx: &AppContext, command: ThreadCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        ThreadCommand::List => {
            let threads = ctx.threads.list().await?;
            out.list(&threads, "No threads found.", thread_line)
        }
        ThreadCommand::Get { id } => {
            let thread = ctx.threads.get(&id).await?;
            out.item(&thread, thread_line)
        }
        ThreadCommand::Create { vector_store } => {
            let thread = ctx.threads.create(&vector_store).await?;
            out.item(&thread, |t| format!("Created thread {}.", t.id))
        }
        ThreadCommand::Update { id, vector_store } => {
            let thread = ctx.threads.update(&id, &vector_store).await?;
            out.item(&thread, thread_line)
        }
        ThreadCommand::Delete { id } => {
            ctx.threads.delete(&id).await?;
            out.message(format!("Thread {} deleted.", id))
        }
        ThreadCommand::Messages { id } => {
            let mut messages = ctx.threads.list_messages(&id).await?;
            sort_by_creation(&mut messages);
            out.list(&messages, "No messages yet.", message_line)
        }
    }
}
