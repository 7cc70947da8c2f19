use clap::Subcommand;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::users::dtos::UserOperationDto;
use crate::features::users::handlers::user_line;

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    /// Show the logged-in user's profile
    Show,
    /// Update the logged-in user's profile
    Update {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        /// Required by the backend when changing the password
        #[arg(long, requires = "new_password")]
        current_password: Option<String>,
        #[arg(long)]
        new_password: Option<String>,
    },
}

pub async fn handle(ctx: &AppContext, command: ProfileCommand) -> Result<()> {
    let me = ctx.auth.load_profile().await?;

    match command {
        ProfileCommand::Show => ctx.output.item(&me, |u| {
            format!(
                "{}\nTenant: {}",
                user_line(u),
                u.tenant_name.as_deref().unwrap_or(&u.tenant_id)
            )
        }),
        ProfileCommand::Update {
            email,
            first_name,
            last_name,
            current_password,
            new_password,
        } => {
            let dto = UserOperationDto {
                email,
                first_name,
                last_name,
                current_password,
                new_password,
                ..Default::default()
            };
            let user = ctx.users.update_profile(dto).await?;
            ctx.output.item(&user, |u| format!("Profile of {} updated.", u.username))
        }
    }
}
