use clap::Args;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::auth::dtos::{LoginRequestDto, RegisterRequestDto};
use crate::features::users::handlers::user_line;

#[derive(Args, Debug)]
pub struct LoginArgs {
    #[arg(long, env = "RAGDESK_USERNAME")]
    pub username: String,

    #[arg(long, env = "RAGDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    /// Organisation created together with the user
    #[arg(long)]
    pub tenant: String,
}

/// Log in and print the session token for reuse through `RAGDESK_TOKEN`
pub async fn login(ctx: &AppContext, args: LoginArgs) -> Result<()> {
    let user = ctx
        .auth
        .login(LoginRequestDto {
            username: args.username.clone(),
            password: args.password,
        })
        .await?;

    let token = ctx.session().require_token().await?;
    if ctx.output.is_json() {
        let body = serde_json::json!({ "token": token, "user": user });
        return ctx.output.item(&body, |_| String::new());
    }

    let name = user
        .as_ref()
        .map(|u| u.display_name())
        .unwrap_or(args.username);
    ctx.output.message(format!(
        "Logged in as {}.\nexport RAGDESK_TOKEN={}",
        name, token
    ))
}

pub async fn register(ctx: &AppContext, args: RegisterArgs) -> Result<()> {
    let dto = RegisterRequestDto {
        username: args.username,
        email: args.email,
        password: args.password,
        tenant_name: args.tenant,
    };
    let username = dto.username.clone();
    ctx.auth.register(dto).await?;

    ctx.output
        .message(format!("Registered {}. You can now log in.", username))
}

pub async fn logout(ctx: &AppContext) -> Result<()> {
    ctx.auth.logout().await?;
    ctx.output.message("Logged out.")
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let user = match ctx.session().current_user().await {
        Some(user) => user,
        None => ctx.auth.load_profile().await?,
    };
    ctx.output.item(&user, user_line)
}
