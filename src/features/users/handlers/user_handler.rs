use clap::{Args, Subcommand};

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::users::dtos::UserOperationDto;
use crate::features::users::models::User;

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List users of the tenant
    List,
    /// Show one user
    Get { id: String },
    /// Create a user
    Create(UserFields),
    /// Update a user; only the given fields change
    Update {
        id: String,
        #[command(flatten)]
        fields: UserFields,
    },
    /// Delete a user
    Delete { id: String },
}

#[derive(Args, Debug, Default)]
pub struct UserFields {
    #[arg(long)]
    pub username: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
}

impl From<UserFields> for UserOperationDto {
    fn from(fields: UserFields) -> Self {
        UserOperationDto {
            username: fields.username,
            email: fields.email,
            role: fields.role,
            password: fields.password,
            first_name: fields.first_name,
            last_name: fields.last_name,
            ..Default::default()
        }
    }
}

pub fn user_line(user: &User) -> String {
    format!(
        "{}  {}  {}  {}  ({})",
        user.id,
        user.username,
        user.email,
        user.role,
        user.display_name()
    )
}

pub async fn handle(ctx: &AppContext, command: UserCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        UserCommand::List => {
            let users = ctx.users.list().await?;
            out.list(&users, "No users found.", user_line)
        }
        UserCommand::Get { id } => {
            let user = ctx.users.get(&id).await?;
            out.item(&user, user_line)
        }
        UserCommand::Create(fields) => {
            let user = ctx.users.create(fields.into()).await?;
            out.item(&user, |u| format!("Created user {} ({}).", u.username, u.id))
        }
        UserCommand::Update { id, fields } => {
            let user = ctx.users.update(&id, fields.into()).await?;
            out.item(&user, user_line)
        }
        UserCommand::Delete { id } => {
            ctx.users.delete(&id).await?;
            out.message(format!("User {} deleted.", id))
        }
    }
}
