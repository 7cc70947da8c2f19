use clap::{Args, Subcommand};

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::assistants::dtos::AssistantDto;
use crate::features::assistants::models::Assistant;

#[derive(Subcommand, Debug)]
pub enum AssistantCommand {
    /// List assistants
    List,
    /// Show one assistant
    Get { id: String },
    /// Create an assistant
    Create(AssistantArgs),
    /// Replace an assistant's settings
    Update {
        id: String,
        #[command(flatten)]
        args: AssistantArgs,
    },
    /// Delete an assistant
    Delete { id: String },
}

#[derive(Args, Debug)]
pub struct AssistantArgs {
    #[arg(long)]
    pub name: String,

    /// Vector store the assistant searches
    #[arg(long)]
    pub vector_store: Option<String>,

    /// System instructions
    #[arg(long)]
    pub instructions: Option<String>,

    #[arg(long)]
    pub model: Option<String>,
}

impl From<AssistantArgs> for AssistantDto {
    fn from(args: AssistantArgs) -> Self {
        AssistantDto {
            name: args.name,
            vector_store_id: args.vector_store,
            instructions: args.instructions,
            model: args.model,
        }
    }
}

fn assistant_line(assistant: &Assistant) -> String {
    format!(
        "{}  {}  [{}]  {}",
        assistant.id,
        assistant.name,
        assistant.vector_store_id.as_deref().unwrap_or("-"),
        assistant.model.as_deref().unwrap_or("")
    )
}

pub async fn handle(ctx: &AppContext, command: AssistantCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        AssistantCommand::List => {
            let assistants = ctx.assistants.list().await?;
            out.list(&assistants, "No assistants found.", assistant_line)
        }
        AssistantCommand::Get { id } => {
            let assistant = ctx.assistants.get(&id).await?;
            out.item(&assistant, |a| {
                let mut text = assistant_line(a);
                if let Some(instructions) = &a.instructions {
                    text.push_str("\n\n");
                    text.push_str(instructions);
                }
                text
            })
        }
        AssistantCommand::Create(args) => {
            let assistant = ctx.assistants.create(args.into()).await?;
            out.item(&assistant, |a| format!("Created assistant {} ({}).", a.name, a.id))
        }
        AssistantCommand::Update { id, args } => {
            let assistant = ctx.assistants.update(&id, args.into()).await?;
            out.item(&assistant, |a| format!("Updated assistant {}.", a.id))
        }
        AssistantCommand::Delete { id } => {
            ctx.assistants.delete(&id).await?;
            out.message(format!("Assistant {} deleted.", id))
        }
    }
}
