use std::sync::Arc;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::alerts::AlertService;
use crate::features::api_keys::ApiKeyService;
use crate::features::assistants::AssistantService;
use crate::features::auth::services::AuthService;
use crate::features::auth::session::Session;
use crate::features::dashboard::DashboardService;
use crate::features::documents::DocumentService;
use crate::features::threads::chat::RemoteChatBackend;
use crate::features::threads::services::{MessageService, RunService, ThreadService};
use crate::features::users::services::UserService;
use crate::features::vector_stores::VectorStoreService;
use crate::shared::output::Output;

/// Everything a command handler may need, built once per invocation
pub struct AppContext {
    pub config: Config,
    pub client: Arc<ApiClient>,
    pub output: Output,
    pub auth: Arc<AuthService>,
    pub documents: Arc<DocumentService>,
    pub vector_stores: Arc<VectorStoreService>,
    pub assistants: Arc<AssistantService>,
    pub threads: Arc<ThreadService>,
    pub messages: Arc<MessageService>,
    pub runs: Arc<RunService>,
    pub api_keys: Arc<ApiKeyService>,
    pub users: Arc<UserService>,
    pub alerts: Arc<AlertService>,
    pub dashboard: Arc<DashboardService>,
}

impl AppContext {
    pub fn new(config: Config, session: Session, output: Output) -> Result<Self> {
        let client = Arc::new(ApiClient::new(&config.api, session)?);

        let documents = Arc::new(DocumentService::new(Arc::clone(&client)));
        let vector_stores = Arc::new(VectorStoreService::new(Arc::clone(&client)));
        let assistants = Arc::new(AssistantService::new(Arc::clone(&client)));
        let threads = Arc::new(ThreadService::new(Arc::clone(&client)));
        let alerts = Arc::new(AlertService::new(Arc::clone(&client)));
        let dashboard = Arc::new(DashboardService::new(
            Arc::clone(&documents),
            Arc::clone(&vector_stores),
            Arc::clone(&assistants),
            Arc::clone(&threads),
            Arc::clone(&alerts),
        ));

        Ok(Self {
            auth: Arc::new(AuthService::new(Arc::clone(&client))),
            messages: Arc::new(MessageService::new(Arc::clone(&client))),
            runs: Arc::new(RunService::new(Arc::clone(&client))),
            api_keys: Arc::new(ApiKeyService::new(Arc::clone(&client))),
            users: Arc::new(UserService::new(Arc::clone(&client))),
            documents,
            vector_stores,
            assistants,
            threads,
            alerts,
            dashboard,
            client,
            output,
            config,
        })
    }

    pub fn session(&self) -> &Session {
        self.client.session()
    }

    /// Chat backend over the thread, message and run services
    pub fn chat_backend(&self) -> Arc<RemoteChatBackend> {
        Arc::new(RemoteChatBackend::new(
            Arc::clone(&self.threads),
            Arc::clone(&self.messages),
            Arc::clone(&self.runs),
        ))
    }
}
