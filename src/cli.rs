use clap::{Parser, Subcommand};

use crate::features::alerts::handlers::AlertCommand;
use crate::features::api_keys::handlers::ApiKeyCommand;
use crate::features::assistants::handlers::AssistantCommand;
use crate::features::auth::handlers::{LoginArgs, RegisterArgs};
use crate::features::documents::handlers::DocumentCommand;
use crate::features::threads::handlers::{ChatArgs, ThreadCommand};
use crate::features::users::handlers::{ProfileCommand, UserCommand};
use crate::features::vector_stores::handlers::VectorStoreCommand;

#[derive(Parser, Debug)]
#[command(
    name = "ragdesk",
    version,
    about = "Admin console for a document RAG platform",
    propagate_version = true
)]
pub struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and print a session token
    Login(LoginArgs),
    /// Register a user and tenant
    Register(RegisterArgs),
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Resource counts and recent alerts
    Dashboard,
    /// Documents and ingestion
    #[command(subcommand)]
    Documents(DocumentCommand),
    /// Vector stores and document access
    #[command(subcommand)]
    VectorStores(VectorStoreCommand),
    /// AI assistants
    #[command(subcommand)]
    Assistants(AssistantCommand),
    /// Conversation threads
    #[command(subcommand)]
    Threads(ThreadCommand),
    /// Chat with an assistant in a thread
    Chat(ChatArgs),
    /// OpenAI API keys
    #[command(subcommand)]
    ApiKeys(ApiKeyCommand),
    /// Tenant users
    #[command(subcommand)]
    Users(UserCommand),
    /// Your own profile
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Document keyword alerts
    #[command(subcommand)]
    Alerts(AlertCommand),
}

impl Commands {
    /// Commands that must not log in from configured credentials first
    pub fn is_session_command(&self) -> bool {
        matches!(self, Commands::Login(_) | Commands::Register(_))
    }
}
