use clap::Subcommand;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::api_keys::models::ApiKey;

#[derive(Subcommand, Debug)]
pub enum ApiKeyCommand {
    /// List API keys
    List,
    /// Show one API key
    Get { id: String },
    /// Register an OpenAI API key
    Create {
        /// The secret key; read from the environment when omitted
        #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
        key: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Rename an API key
    Rename {
        id: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Delete an API key
    Delete { id: String },
}

fn key_line(key: &ApiKey) -> String {
    format!(
        "{}  {}  {}  {}",
        key.id,
        key.masked_key,
        key.name.as_deref().unwrap_or("-"),
        if key.is_valid { "valid" } else { "invalid" }
    )
}

pub async fn handle(ctx: &AppContext, command: ApiKeyCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        ApiKeyCommand::List => {
            let keys = ctx.api_keys.list().await?;
            out.list(&keys, "No API keys found.", key_line)
        }
        ApiKeyCommand::Get { id } => {
            let key = ctx.api_keys.get(&id).await?;
            out.item(&key, key_line)
        }
        ApiKeyCommand::Create { key, name } => {
            let key = ctx.api_keys.create(&key, name).await?;
            out.item(&key, |k| format!("Registered API key {} ({}).", k.masked_key, k.id))
        }
        ApiKeyCommand::Rename { id, name } => {
            let key = ctx.api_keys.update(&id, name).await?;
            out.item(&key, key_line)
        }
        ApiKeyCommand::Delete { id } => {
            ctx.api_keys.delete(&id).await?;
            out.message(format!("API key {} deleted.", id))
        }
    }
}
