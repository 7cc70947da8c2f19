use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, TimeZone, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::core::http::ApiClient;
use crate::features::auth::session::Session;
use crate::features::threads::chat::ChatBackend;
use crate::features::threads::models::{Message, MessageRole, Run, RunStatus, Thread};

/// API client pointed at a wiremock server under `/api`, logged in with `token`
pub fn api_client_for(server: &wiremock::MockServer, token: &str) -> Arc<ApiClient> {
    let config = ApiConfig::new(format!("{}/api", server.uri()), Duration::from_secs(5));
    Arc::new(ApiClient::new(&config, Session::with_token(token)).unwrap())
}

#[derive(Default)]
struct Script {
    statuses: VecDeque<Result<RunStatus>>,
    server_messages: Vec<Message>,
    reply: Option<String>,
    persist_error: Option<AppError>,
    run_error: Option<AppError>,
    thread_error: Option<AppError>,
    persist_delay: Option<Duration>,
    status_delay: Option<Duration>,
    message_calls: Vec<(String, String)>,
    run_calls: Vec<(String, String)>,
    status_checks: usize,
    list_calls: usize,
}

/// In-memory chat backend that replays a run status script and records calls
pub struct ScriptedBackend {
    script: Mutex<Script>,
}

impl ScriptedBackend {
    /// Run statuses returned by successive polls; the last one repeats
    pub fn with_statuses(statuses: Vec<RunStatus>) -> Self {
        Self::with_script(statuses.into_iter().map(Ok).collect())
    }

    pub fn with_script(statuses: Vec<Result<RunStatus>>) -> Self {
        Self {
            script: Mutex::new(Script {
                statuses: statuses.into(),
                ..Script::default()
            }),
        }
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap()
    }

    /// Assistant message appended to the thread when the run completes
    pub fn reply_with(&self, content: &str) {
        self.script().reply = Some(content.to_string());
    }

    pub fn fail_persist(&self, error: AppError) {
        self.script().persist_error = Some(error);
    }

    pub fn fail_run_create(&self, error: AppError) {
        self.script().run_error = Some(error);
    }

    pub fn fail_thread_lookup(&self, error: AppError) {
        self.script().thread_error = Some(error);
    }

    pub fn delay_persist(&self, delay: Duration) {
        self.script().persist_delay = Some(delay);
    }

    /// Each status check takes `delay` before answering
    pub fn delay_status(&self, delay: Duration) {
        self.script().status_delay = Some(delay);
    }

    /// Store `count` older messages, returned newest first
    pub fn seed_messages_out_of_order(&self, count: usize) {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        let mut script = self.script();
        for i in (0..count).rev() {
            script.server_messages.push(Message {
                id: format!("seed-{}", i),
                thread_id: "t1".to_string(),
                role: if i % 2 == 0 {
                    MessageRole::User
                } else {
                    MessageRole::Assistant
                },
                content: fake_sentence(),
                created_at: base + ChronoDuration::minutes(i as i64),
            });
        }
    }

    pub fn message_calls(&self) -> Vec<(String, String)> {
        self.script().message_calls.clone()
    }

    pub fn run_calls(&self) -> Vec<(String, String)> {
        self.script().run_calls.clone()
    }

    pub fn status_checks(&self) -> usize {
        self.script().status_checks
    }

    pub fn list_calls(&self) -> usize {
        self.script().list_calls
    }

    fn next_status(script: &mut Script) -> Result<RunStatus> {
        if script.statuses.len() > 1 {
            return script
                .statuses
                .pop_front()
                .unwrap_or(Ok(RunStatus::InProgress));
        }
        match script.statuses.front() {
            Some(Ok(status)) => Ok(*status),
            Some(Err(e)) => Err(AppError::Internal(e.to_string())),
            None => Ok(RunStatus::InProgress),
        }
    }
}

fn fake_sentence() -> String {
    use fake::faker::lorem::en::Sentence;
    use fake::Fake;
    Sentence(3..8).fake()
}

fn run(thread_id: &str, assistant_id: &str, status: RunStatus) -> Run {
    Run {
        id: "r1".to_string(),
        thread_id: thread_id.to_string(),
        assistant_id: assistant_id.to_string(),
        status,
        created_at: Utc::now(),
        completed_at: None,
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn get_thread(&self, thread_id: &str) -> Result<Thread> {
        if let Some(e) = self.script().thread_error.take() {
            return Err(e);
        }
        Ok(Thread {
            id: thread_id.to_string(),
            vector_store_id: Some("vs1".to_string()),
            vector_store_name: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap(),
            updated_at: None,
        })
    }

    async fn create_message(&self, thread_id: &str, content: &str) -> Result<Message> {
        let delay = {
            let mut script = self.script();
            script
                .message_calls
                .push((thread_id.to_string(), content.to_string()));
            script.persist_delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut script = self.script();
        if let Some(e) = script.persist_error.take() {
            return Err(e);
        }
        let message = Message {
            id: format!("m-{}", script.server_messages.len() + 1),
            thread_id: thread_id.to_string(),
            role: MessageRole::User,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        script.server_messages.push(message.clone());
        Ok(message)
    }

    async fn create_run(&self, thread_id: &str, assistant_id: &str) -> Result<Run> {
        let mut script = self.script();
        script
            .run_calls
            .push((thread_id.to_string(), assistant_id.to_string()));
        if let Some(e) = script.run_error.take() {
            return Err(e);
        }
        Ok(run(thread_id, assistant_id, RunStatus::Queued))
    }

    async fn get_run(&self, thread_id: &str, _run_id: &str) -> Result<Run> {
        let delay = self.script().status_delay;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let mut script = self.script();
        script.status_checks += 1;
        let status = Self::next_status(&mut script)?;

        if status == RunStatus::Completed {
            if let Some(reply) = script.reply.take() {
                let message = Message {
                    id: format!("m-{}", script.server_messages.len() + 1),
                    thread_id: thread_id.to_string(),
                    role: MessageRole::Assistant,
                    content: reply,
                    created_at: Utc::now() + ChronoDuration::milliseconds(1),
                };
                script.server_messages.push(message);
            }
        }
        Ok(run(thread_id, "a1", status))
    }

    async fn list_messages(&self, _thread_id: &str) -> Result<Vec<Message>> {
        let mut script = self.script();
        script.list_calls += 1;
        // Newest first, so callers have to sort
        let mut messages = script.server_messages.clone();
        messages.reverse();
        Ok(messages)
    }
}
