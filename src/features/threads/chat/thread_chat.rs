use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::error::AppError;
use crate::features::threads::chat::ChatBackend;
use crate::features::threads::models::{sort_by_creation, Message, Run, RunStatus, Thread};
use crate::shared::polling::{PollError, PollStep, Poller, Teardown};

/// Why a send did not end with the assistant's reply on screen
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("No message content provided.")]
    EmptyMessage,

    #[error("Please select an assistant.")]
    NoAssistantSelected,

    #[error("A message is already being sent.")]
    SendInFlight,

    #[error("Failed to send message. {}", .0.detail())]
    Persist(AppError),

    #[error("Failed to start the assistant run. {}", .0.detail())]
    RunCreate(AppError),

    #[error("The assistant run {run_id} failed.")]
    RunFailed { run_id: String },

    #[error("Thread not found. It might have been deleted.")]
    ThreadGone(AppError),

    #[error("Failed to refresh messages. {}", .0.detail())]
    Refresh(AppError),

    #[error("Failed to load thread information. {}", .0.detail())]
    Load(AppError),

    #[error("Session expired while waiting for the assistant. Log in again.")]
    SessionExpired(AppError),

    #[error("Chat view closed.")]
    Closed,
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        let message = err.to_string();
        match err {
            ChatError::EmptyMessage | ChatError::NoAssistantSelected | ChatError::SendInFlight => {
                AppError::Validation(message)
            }
            ChatError::ThreadGone(_) => AppError::NotFound(message),
            ChatError::SessionExpired(_) => AppError::Unauthorized(message),
            ChatError::Persist(inner)
            | ChatError::RunCreate(inner)
            | ChatError::Refresh(inner)
            | ChatError::Load(inner)
                if inner.is_unauthorized() =>
            {
                AppError::Unauthorized(message)
            }
            ChatError::Closed => AppError::Internal(message),
            _ => AppError::ExternalServiceError(message),
        }
    }
}

/// Result of a send that ran to completion
#[derive(Debug, Clone)]
pub struct SendOutcome {
    pub run: Run,
    pub message_count: usize,
}

/// Read-only copy of what the view shows
#[derive(Debug, Clone, Default)]
pub struct ChatSnapshot {
    pub thread: Option<Thread>,
    pub messages: Vec<Message>,
    pub input: String,
    pub selected_assistant: Option<String>,
    pub is_sending: bool,
    pub error: Option<String>,
    pub send_error: Option<String>,
}

#[derive(Default)]
struct ChatState {
    thread: Option<Thread>,
    messages: Vec<Message>,
    input: String,
    selected_assistant: Option<String>,
    error: Option<String>,
    send_error: Option<String>,
}

/// Clears the in-flight flag on every exit path of a send
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Chat view over one thread.
///
/// At most one send is in flight at a time. State lives behind a mutex that is
/// never held across an await, so the view can be shared with a spawned send.
pub struct ThreadChat<B: ChatBackend> {
    backend: Arc<B>,
    thread_id: String,
    poller: Poller,
    state: Mutex<ChatState>,
    sending: AtomicBool,
    teardown: Teardown,
}

impl<B: ChatBackend> ThreadChat<B> {
    pub fn new(backend: Arc<B>, thread_id: impl Into<String>, poller: Poller) -> Self {
        Self {
            backend,
            thread_id: thread_id.into(),
            poller,
            state: Mutex::new(ChatState::default()),
            sending: AtomicBool::new(false),
            teardown: Teardown::new(),
        }
    }

    pub fn thread_id(&self) -> &str {
        &self.thread_id
    }

    fn lock(&self) -> MutexGuard<'_, ChatState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> ChatSnapshot {
        let state = self.lock();
        ChatSnapshot {
            thread: state.thread.clone(),
            messages: state.messages.clone(),
            input: state.input.clone(),
            selected_assistant: state.selected_assistant.clone(),
            is_sending: self.is_sending(),
            error: state.error.clone(),
            send_error: state.send_error.clone(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.sending.load(Ordering::Acquire)
    }

    pub fn set_input(&self, input: impl Into<String>) {
        self.lock().input = input.into();
    }

    pub fn select_assistant(&self, assistant_id: Option<String>) {
        let mut state = self.lock();
        state.selected_assistant = assistant_id.filter(|id| !id.trim().is_empty());
        state.send_error = None;
    }

    /// Fetch the thread and its messages together
    pub async fn load(&self) -> Result<(), ChatError> {
        self.lock().error = None;

        let result = futures::try_join!(
            self.backend.get_thread(&self.thread_id),
            self.backend.list_messages(&self.thread_id)
        );

        let mut state = self.lock();
        match result {
            Ok((thread, mut messages)) => {
                sort_by_creation(&mut messages);
                tracing::debug!(
                    "Loaded thread {} with {} messages",
                    thread.id,
                    messages.len()
                );
                state.thread = Some(thread);
                state.messages = messages;
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load thread {}: {}", self.thread_id, e);
                let err = ChatError::Load(e);
                state.error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-fetch the message list; the current list stays on failure
    pub async fn refresh_messages(&self) -> Result<usize, ChatError> {
        self.lock().error = None;

        match self.backend.list_messages(&self.thread_id).await {
            Ok(messages) => Ok(self.replace_messages(messages)),
            Err(e) => {
                tracing::error!("Failed to refresh messages of {}: {}", self.thread_id, e);
                let err = ChatError::Refresh(e);
                self.lock().error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Send the current input and wait for the assistant's reply.
    ///
    /// The message shows up immediately under a temporary id, then gets
    /// swapped for the persisted one. A run is started and polled until it
    /// completes or fails, or until the view is closed.
    pub async fn send(&self) -> Result<SendOutcome, ChatError> {
        let (content, assistant_id, original_input, temp_id) = {
            let mut state = self.lock();

            // A submit rejected while sending never touches send_error
            if self.is_sending() {
                tracing::debug!("Rejected send while another is in flight");
                return Err(ChatError::SendInFlight);
            }

            let Some(assistant_id) = state.selected_assistant.clone() else {
                state.send_error = Some(ChatError::NoAssistantSelected.to_string());
                return Err(ChatError::NoAssistantSelected);
            };

            let content = state.input.trim().to_string();
            if content.is_empty() {
                state.send_error = Some(ChatError::EmptyMessage.to_string());
                return Err(ChatError::EmptyMessage);
            }

            if self.teardown.is_fired() {
                return Err(ChatError::Closed);
            }

            if self
                .sending
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                tracing::debug!("Rejected send while another is in flight");
                return Err(ChatError::SendInFlight);
            }

            state.send_error = None;
            let optimistic = Message::optimistic(&self.thread_id, &content);
            let temp_id = optimistic.id.clone();
            state.messages.push(optimistic);
            let original_input = std::mem::take(&mut state.input);

            (content, assistant_id, original_input, temp_id)
        };
        let _in_flight = InFlight(&self.sending);

        // Persist
        let persisted = match self
            .backend
            .create_message(&self.thread_id, &content)
            .await
        {
            Ok(message) => message,
            Err(e) => {
                tracing::error!("Failed to persist message in {}: {}", self.thread_id, e);
                let err = ChatError::Persist(e);
                let mut state = self.lock();
                state.messages.retain(|m| m.id != temp_id);
                state.input = original_input;
                state.send_error = Some(err.to_string());
                return Err(err);
            }
        };

        {
            let mut state = self.lock();
            state.messages.retain(|m| m.id != temp_id);
            state.messages.push(persisted);
            sort_by_creation(&mut state.messages);
        }

        if self.teardown.is_fired() {
            return Err(ChatError::Closed);
        }

        // Start the run
        let run = match self
            .backend
            .create_run(&self.thread_id, &assistant_id)
            .await
        {
            Ok(run) => run,
            Err(e) => {
                tracing::error!(
                    "Failed to start run for assistant {} in {}: {}",
                    assistant_id,
                    self.thread_id,
                    e
                );
                let err = ChatError::RunCreate(e);
                let mut state = self.lock();
                state.input = original_input;
                state.send_error = Some(err.to_string());
                return Err(err);
            }
        };

        // Poll until terminal
        let run = if run.status.is_terminal() {
            run
        } else {
            match self.poll_run(&run.id).await {
                Ok(run) => run,
                Err(PollError::Cancelled) => {
                    tracing::info!("Stopped polling run {}: view closed", run.id);
                    return Err(ChatError::Closed);
                }
                Err(PollError::Gone(e)) => {
                    let err = ChatError::ThreadGone(e);
                    self.lock().send_error = Some(err.to_string());
                    return Err(err);
                }
                Err(PollError::Rejected(e)) => {
                    let err = ChatError::SessionExpired(e);
                    self.lock().send_error = Some(err.to_string());
                    return Err(err);
                }
            }
        };

        if run.status == RunStatus::Failed {
            tracing::warn!("Run {} failed in thread {}", run.id, self.thread_id);
            let err = ChatError::RunFailed {
                run_id: run.id.clone(),
            };
            self.lock().send_error = Some(err.to_string());
            return Err(err);
        }

        if self.teardown.is_fired() {
            tracing::info!("Run {} finished after the view closed", run.id);
            return Err(ChatError::Closed);
        }

        // Resolve
        match self.backend.list_messages(&self.thread_id).await {
            Ok(messages) => {
                let message_count = self.replace_messages(messages);
                tracing::info!(
                    "Run {} completed, thread {} now has {} messages",
                    run.id,
                    self.thread_id,
                    message_count
                );
                Ok(SendOutcome { run, message_count })
            }
            Err(e) => {
                let err = ChatError::Refresh(e);
                self.lock().send_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    /// Tear the view down; a running poll stops at once, even mid status check
    pub fn close(&self) {
        if !self.teardown.is_fired() {
            tracing::debug!("Closing chat view for thread {}", self.thread_id);
        }
        self.teardown.fire();
    }

    async fn poll_run(&self, run_id: &str) -> Result<Run, PollError> {
        self.poller
            .run(self.teardown.signal(), move || async move {
                let run = self.backend.get_run(&self.thread_id, run_id).await?;
                tracing::debug!("Run {} is {}", run.id, run.status);
                Ok::<_, AppError>(if run.status.is_terminal() {
                    PollStep::Done(run)
                } else {
                    PollStep::Pending
                })
            })
            .await
    }

    fn replace_messages(&self, mut messages: Vec<Message>) -> usize {
        sort_by_creation(&mut messages);
        let mut state = self.lock();
        state.messages = messages;
        state.messages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::threads::models::MessageRole;
    use crate::shared::test_helpers::ScriptedBackend;
    use std::time::Duration;

    const INTERVAL: Duration = Duration::from_secs(2);

    fn chat(backend: &Arc<ScriptedBackend>) -> ThreadChat<ScriptedBackend> {
        let chat = ThreadChat::new(Arc::clone(backend), "t1", Poller::new(INTERVAL));
        chat.select_assistant(Some("a1".to_string()));
        chat
    }

    fn assert_sorted(messages: &[Message]) {
        assert!(messages
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_hello_end_to_end() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![
            RunStatus::Queued,
            RunStatus::InProgress,
            RunStatus::InProgress,
            RunStatus::Completed,
        ]));
        backend.reply_with("Hi! How can I help?");
        let chat = chat(&backend);
        chat.set_input("Hello");

        let outcome = chat.send().await.unwrap();

        assert_eq!(outcome.run.status, RunStatus::Completed);
        assert_eq!(
            backend.message_calls(),
            vec![("t1".to_string(), "Hello".to_string())]
        );
        assert_eq!(
            backend.run_calls(),
            vec![("t1".to_string(), "a1".to_string())]
        );
        assert_eq!(backend.status_checks(), 4);
        assert_eq!(backend.list_calls(), 1);

        let snapshot = chat.snapshot();
        assert_eq!(snapshot.messages.len(), 2);
        assert_eq!(snapshot.messages[0].role, MessageRole::User);
        assert_eq!(snapshot.messages[0].content, "Hello");
        assert_eq!(snapshot.messages[1].role, MessageRole::Assistant);
        assert!(snapshot.messages.iter().all(|m| !m.is_optimistic()));
        assert!(snapshot.input.is_empty());
        assert!(snapshot.send_error.is_none());
        assert!(!snapshot.is_sending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_stops_polling_without_refresh() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![
            RunStatus::Queued,
            RunStatus::InProgress,
            RunStatus::Failed,
        ]));
        let chat = chat(&backend);
        chat.set_input("Summarize the contract");

        let err = chat.send().await.unwrap_err();

        assert!(matches!(err, ChatError::RunFailed { .. }));
        assert_eq!(backend.status_checks(), 3);
        assert_eq!(backend.list_calls(), 0);

        // The persisted message is retained, the optimistic one is gone
        let snapshot = chat.snapshot();
        assert_eq!(snapshot.messages.len(), 1);
        assert!(!snapshot.messages[0].is_optimistic());
        assert!(snapshot.send_error.unwrap().contains("failed"));
        assert!(!snapshot.is_sending);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(backend.status_checks(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_optimistic_append_then_single_replacement() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.delay_persist(Duration::from_secs(1));
        let chat = Arc::new(chat(&backend));
        chat.set_input("  Hello  ");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });

        tokio::time::sleep(Duration::from_millis(500)).await;
        let mid_flight = chat.snapshot();
        assert!(mid_flight.is_sending);
        assert!(mid_flight.input.is_empty());
        assert_eq!(mid_flight.messages.len(), 1);
        assert!(mid_flight.messages[0].is_optimistic());
        assert_eq!(mid_flight.messages[0].content, "Hello");

        handle.await.unwrap().unwrap();
        let done = chat.snapshot();
        assert_eq!(
            done.messages.iter().filter(|m| m.role == MessageRole::User).count(),
            1
        );
        assert!(done.messages.iter().all(|m| !m.is_optimistic()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_persist_failure_restores_input() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.fail_persist(AppError::ExternalServiceError("HTTP 500".to_string()));
        let chat = chat(&backend);
        chat.set_input("Hello ");

        let err = chat.send().await.unwrap_err();

        assert!(matches!(err, ChatError::Persist(_)));
        assert!(backend.run_calls().is_empty());
        assert_eq!(backend.status_checks(), 0);

        let snapshot = chat.snapshot();
        assert!(snapshot.messages.is_empty());
        assert_eq!(snapshot.input, "Hello ");
        assert!(snapshot
            .send_error
            .unwrap()
            .starts_with("Failed to send message."));
        assert!(!snapshot.is_sending);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_create_failure_restores_input() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.fail_run_create(AppError::BadRequest("Assistant has no API key".to_string()));
        let chat = chat(&backend);
        chat.set_input("Hello");

        let err = chat.send().await.unwrap_err();

        assert!(matches!(err, ChatError::RunCreate(_)));
        assert_eq!(backend.status_checks(), 0);
        let snapshot = chat.snapshot();
        assert_eq!(snapshot.input, "Hello");
        assert!(snapshot.send_error.unwrap().contains("Assistant has no API key"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_send_is_rejected() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.delay_persist(Duration::from_secs(1));
        let chat = Arc::new(chat(&backend));
        chat.set_input("first");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });
        tokio::time::sleep(Duration::from_millis(100)).await;

        chat.set_input("second");
        let err = chat.send().await.unwrap_err();
        assert!(matches!(err, ChatError::SendInFlight));
        assert_eq!(chat.snapshot().input, "second");

        handle.await.unwrap().unwrap();
        assert_eq!(backend.message_calls().len(), 1);
        assert_eq!(backend.message_calls()[0].1, "first");
    }

    #[tokio::test]
    async fn test_send_guards() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        let chat = ThreadChat::new(Arc::clone(&backend), "t1", Poller::new(INTERVAL));

        chat.set_input("Hello");
        assert!(matches!(
            chat.send().await,
            Err(ChatError::NoAssistantSelected)
        ));
        assert_eq!(
            chat.snapshot().send_error.as_deref(),
            Some("Please select an assistant.")
        );

        chat.select_assistant(Some("a1".to_string()));
        assert!(chat.snapshot().send_error.is_none());

        chat.set_input("   ");
        assert!(matches!(chat.send().await, Err(ChatError::EmptyMessage)));
        assert!(chat.snapshot().messages.is_empty());
        assert!(backend.message_calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_during_polling_stops_status_checks() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::InProgress]));
        let chat = Arc::new(chat(&backend));
        chat.set_input("Hello");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });

        tokio::time::sleep(Duration::from_millis(7000)).await;
        let before = backend.status_checks();
        assert_eq!(before, 3);

        chat.close();
        let result = handle.await.unwrap();
        assert!(matches!(result, Err(ChatError::Closed)));

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(backend.status_checks(), before);
        assert_eq!(backend.list_calls(), 0);
        assert!(!chat.is_sending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_abandons_slow_status_check() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.delay_status(Duration::from_secs(20));
        let chat = Arc::new(chat(&backend));
        chat.set_input("Hello");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });

        // First status check starts at 2s and would answer at 22s
        tokio::time::sleep(Duration::from_secs(3)).await;
        let closed_at = tokio::time::Instant::now();
        chat.close();

        let result = handle.await.unwrap();
        assert!(matches!(result, Err(ChatError::Closed)));
        assert!(closed_at.elapsed() < Duration::from_secs(1));

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(backend.list_calls(), 0);
        assert!(!chat.is_sending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_before_run_start_skips_run() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.delay_persist(Duration::from_secs(1));
        let chat = Arc::new(chat(&backend));
        chat.set_input("Hello");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });
        tokio::time::sleep(Duration::from_millis(500)).await;
        chat.close();

        assert!(matches!(handle.await.unwrap(), Err(ChatError::Closed)));
        assert_eq!(backend.message_calls().len(), 1);
        assert!(backend.run_calls().is_empty());
        assert_eq!(backend.list_calls(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_submit_leaves_no_stale_error() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.delay_persist(Duration::from_secs(1));
        let chat = Arc::new(chat(&backend));
        chat.set_input("first");

        let sender = Arc::clone(&chat);
        let handle = tokio::spawn(async move { sender.send().await });
        tokio::time::sleep(Duration::from_millis(100)).await;

        chat.set_input("   ");
        assert!(matches!(chat.send().await, Err(ChatError::SendInFlight)));
        assert!(chat.snapshot().send_error.is_none());

        handle.await.unwrap().unwrap();
        assert!(chat.snapshot().send_error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_rejected_during_poll_stops_send() {
        let backend = Arc::new(ScriptedBackend::with_script(vec![
            Ok(RunStatus::InProgress),
            Err(AppError::Unauthorized("Not logged in".to_string())),
            Ok(RunStatus::Completed),
        ]));
        let chat = chat(&backend);
        chat.set_input("Hello");

        let err = chat.send().await.unwrap_err();
        assert!(matches!(err, ChatError::SessionExpired(_)));
        assert!(AppError::from(err).is_unauthorized());
        assert_eq!(backend.status_checks(), 2);
        assert_eq!(backend.list_calls(), 0);
        assert!(chat.snapshot().send_error.unwrap().contains("Log in again"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_poll_errors_keep_polling() {
        let backend = Arc::new(ScriptedBackend::with_script(vec![
            Ok(RunStatus::InProgress),
            Err(AppError::Network("timeout".to_string())),
            Err(AppError::ExternalServiceError("HTTP 503".to_string())),
            Ok(RunStatus::Completed),
        ]));
        let chat = chat(&backend);
        chat.set_input("Hello");

        chat.send().await.unwrap();
        assert_eq!(backend.status_checks(), 4);
        assert_eq!(backend.list_calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_found_during_poll_surfaces_error() {
        let backend = Arc::new(ScriptedBackend::with_script(vec![
            Ok(RunStatus::InProgress),
            Err(AppError::NotFound("Not found.".to_string())),
            Ok(RunStatus::Completed),
        ]));
        let chat = chat(&backend);
        chat.set_input("Hello");

        let err = chat.send().await.unwrap_err();
        assert!(matches!(err, ChatError::ThreadGone(_)));
        assert_eq!(backend.status_checks(), 2);
        assert_eq!(backend.list_calls(), 0);
        assert!(chat.snapshot().send_error.unwrap().contains("deleted"));
    }

    #[tokio::test]
    async fn test_load_sorts_messages_from_backend() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.seed_messages_out_of_order(5);
        let chat = chat(&backend);

        chat.load().await.unwrap();

        let snapshot = chat.snapshot();
        assert_eq!(snapshot.thread.unwrap().id, "t1");
        assert_eq!(snapshot.messages.len(), 5);
        assert_sorted(&snapshot.messages);
    }

    #[tokio::test]
    async fn test_load_failure_sets_error() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.fail_thread_lookup(AppError::NotFound(
            "No Thread matches the given query.".to_string(),
        ));
        let chat = chat(&backend);

        assert!(matches!(chat.load().await, Err(ChatError::Load(_))));
        let error = chat.snapshot().error.unwrap();
        assert!(error.starts_with("Failed to load thread information."));
        assert!(error.contains("No Thread matches"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_messages_sorted_after_send_with_shuffled_backend() {
        let backend = Arc::new(ScriptedBackend::with_statuses(vec![RunStatus::Completed]));
        backend.seed_messages_out_of_order(4);
        backend.reply_with("Done");
        let chat = chat(&backend);
        chat.load().await.unwrap();
        chat.set_input("One more");

        chat.send().await.unwrap();

        let snapshot = chat.snapshot();
        assert_eq!(snapshot.messages.len(), 6);
        assert_sorted(&snapshot.messages);
    }

    #[test]
    fn test_chat_errors_map_onto_app_errors() {
        assert!(matches!(
            AppError::from(ChatError::NoAssistantSelected),
            AppError::Validation(_)
        ));
        assert!(AppError::from(ChatError::ThreadGone(AppError::NotFound("x".into()))).is_not_found());
        assert!(
            AppError::from(ChatError::Persist(AppError::Unauthorized("expired".into())))
                .is_unauthorized()
        );

        let err = AppError::from(ChatError::RunFailed {
            run_id: "r1".to_string(),
        });
        assert_eq!(err.detail(), "The assistant run r1 failed.");
    }
}
