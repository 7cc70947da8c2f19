use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::threads::chat::{ChatBackend, ChatError, SendOutcome, ThreadChat};
use crate::features::threads::handlers::thread_handler::message_line;
use crate::features::threads::models::{Message, MessageRole, Run};
use crate::shared::polling::Poller;

#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Thread to chat in
    pub thread: String,

    /// Assistant answering the messages
    #[arg(long, short)]
    pub assistant: Option<String>,

    /// Send this one message and exit instead of starting an interactive session
    #[arg(long, short)]
    pub message: Option<String>,
}

#[derive(Serialize)]
struct Reply<'a> {
    run: &'a Run,
    messages: Vec<&'a Message>,
}

/// Messages of the view not printed yet
struct Transcript {
    seen: HashSet<String>,
}

impl Transcript {
    fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    fn unseen<'a>(&mut self, messages: &'a [Message]) -> Vec<&'a Message> {
        messages
            .iter()
            .filter(|m| !m.is_optimistic() && self.seen.insert(m.id.clone()))
            .collect()
    }
}

pub async fn chat(ctx: &AppContext, args: ChatArgs) -> Result<()> {
    let poller = Poller::new(ctx.config.polling.run_interval);
    let chat = Arc::new(ThreadChat::new(ctx.chat_backend(), args.thread, poller));

    chat.load().await?;
    chat.select_assistant(args.assistant);

    let mut transcript = Transcript::new();
    let history = chat.snapshot().messages;

    match args.message {
        Some(text) => {
            transcript.unseen(&history);
            chat.set_input(text);
            let outcome = send_interruptible(&chat).await?;
            print_reply(ctx, &chat, &mut transcript, &outcome)
        }
        None => {
            if !ctx.output.is_json() {
                for message in transcript.unseen(&history) {
                    println!("{}", message_line(message));
                }
            }
            interactive(ctx, &chat, &mut transcript).await
        }
    }
}

/// Run a send in its own task; Ctrl-C closes the view so polling stops
async fn send_interruptible<B: ChatBackend + 'static>(
    chat: &Arc<ThreadChat<B>>,
) -> std::result::Result<SendOutcome, ChatError> {
    let mut task = tokio::spawn({
        let chat = Arc::clone(chat);
        async move { chat.send().await }
    });

    let joined = tokio::select! {
        joined = &mut task => joined,
        _ = tokio::signal::ctrl_c() => {
            chat.close();
            task.await
        }
    };

    joined.unwrap_or_else(|e| {
        tracing::error!("Send task failed: {}", e);
        Err(ChatError::Closed)
    })
}

fn print_reply<B: ChatBackend>(
    ctx: &AppContext,
    chat: &ThreadChat<B>,
    transcript: &mut Transcript,
    outcome: &SendOutcome,
) -> Result<()> {
    let snapshot = chat.snapshot();
    let messages: Vec<&Message> = transcript
        .unseen(&snapshot.messages)
        .into_iter()
        .filter(|m| m.role == MessageRole::Assistant)
        .collect();

    if ctx.output.is_json() {
        let reply = Reply {
            run: &outcome.run,
            messages,
        };
        return ctx.output.item(&reply, |_| String::new());
    }

    if messages.is_empty() {
        println!("(run {} completed without a reply)", outcome.run.id);
    }
    for message in messages {
        println!("{}", message_line(message));
    }
    Ok(())
}

/// One line typed into the interactive session
#[derive(Debug, PartialEq, Eq)]
enum ChatLine<'a> {
    Blank,
    Quit,
    Assistant(Option<&'a str>),
    Refresh,
    Send(&'a str),
}

fn parse_line(line: &str) -> ChatLine<'_> {
    let line = line.trim();
    match line.split_once(' ').unwrap_or((line, "")) {
        ("", _) => ChatLine::Blank,
        ("/quit" | "/exit", _) => ChatLine::Quit,
        ("/assistant", id) => {
            let id = id.trim();
            ChatLine::Assistant((!id.is_empty()).then_some(id))
        }
        ("/refresh", _) => ChatLine::Refresh,
        _ => ChatLine::Send(line),
    }
}

async fn interactive<B: ChatBackend + 'static>(
    ctx: &AppContext,
    chat: &Arc<ThreadChat<B>>,
    transcript: &mut Transcript,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    eprintln!("Chatting in {}. /assistant <id>, /refresh, /quit.", chat.thread_id());

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else {
            break;
        };

        match parse_line(&line) {
            ChatLine::Blank => continue,
            ChatLine::Quit => break,
            ChatLine::Assistant(None) => eprintln!("Usage: /assistant <id>"),
            ChatLine::Assistant(Some(id)) => {
                chat.select_assistant(Some(id.to_string()));
                eprintln!("Assistant set to {}.", id);
            }
            ChatLine::Refresh => match chat.refresh_messages().await {
                Ok(_) => {
                    for message in transcript.unseen(&chat.snapshot().messages) {
                        println!("{}", message_line(message));
                    }
                }
                Err(e) => eprintln!("{}", e),
            },
            ChatLine::Send(text) => {
                chat.set_input(text);
                match send_interruptible(chat).await {
                    Ok(outcome) => print_reply(ctx, chat, transcript, &outcome)?,
                    Err(ChatError::Closed) => break,
                    Err(e) => eprintln!("{}", e),
                }
            }
        }
    }

    chat.close();
    Ok(())
}
