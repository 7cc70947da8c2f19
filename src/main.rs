mod cli;
mod core;
mod features;
mod shared;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::core::config::{ApiConfig, Config};
use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::auth::dtos::LoginRequestDto;
use crate::features::auth::session::Session;
use crate::features::{
    alerts, api_keys, assistants, auth, dashboard, documents, threads, users, vector_stores,
};
use crate::shared::output::Output;

/// Log filter used when RUST_LOG is unset
const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> anyhow::Result<ExitCode> {
    // Parse arguments first so --help and --version never touch the runtime
    let cli = Cli::parse();

    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(2);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> anyhow::Result<ExitCode> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    if let Some(api_url) = &cli.api_url {
        config.api = ApiConfig::new(api_url.clone(), config.api.timeout);
    }
    tracing::debug!("Configuration loaded: {:?}", config);

    let output = Output::new(cli.json);
    let session = match &config.auth.token {
        Some(token) => Session::with_token(token.clone()),
        None => Session::new(),
    };
    let ctx = AppContext::new(config, session, output)?;

    let result = async {
        if !cli.command.is_session_command() {
            open_session(&ctx).await?;
        }
        dispatch(&ctx, cli.command).await
    }
    .await;

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            output.failure(&e.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Log in from configured credentials when no token was given
async fn open_session(ctx: &AppContext) -> Result<()> {
    if ctx.session().is_authenticated().await {
        return Ok(());
    }
    let Some((username, password)) = ctx.config.auth.credentials() else {
        return Ok(());
    };

    tracing::info!("No token configured, logging in as {}", username);
    ctx.auth
        .login(LoginRequestDto {
            username: username.to_string(),
            password: password.to_string(),
        })
        .await?;
    Ok(())
}

async fn dispatch(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => auth::handlers::login(ctx, args).await,
        Commands::Register(args) => auth::handlers::register(ctx, args).await,
        Commands::Logout => auth::handlers::logout(ctx).await,
        Commands::Whoami => auth::handlers::whoami(ctx).await,
        Commands::Dashboard => dashboard::handlers::handle(ctx).await,
        Commands::Documents(cmd) => documents::handlers::handle(ctx, cmd).await,
        Commands::VectorStores(cmd) => vector_stores::handlers::handle(ctx, cmd).await,
        Commands::Assistants(cmd) => assistants::handlers::handle(ctx, cmd).await,
        Commands::Threads(cmd) => threads::handlers::handle(ctx, cmd).await,
        Commands::Chat(args) => threads::handlers::chat(ctx, args).await,
        Commands::ApiKeys(cmd) => api_keys::handlers::handle(ctx, cmd).await,
        Commands::Users(cmd) => users::handlers::handle(ctx, cmd).await,
        Commands::Profile(cmd) => users::handlers::handle_profile(ctx, cmd).await,
        Commands::Alerts(cmd) => alerts::handlers::handle(ctx, cmd).await,
    }
}
