use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::core::context::AppContext;
use crate::core::error::{AppError, Result};
use crate::features::documents::dtos::IngestSource;
use crate::features::documents::models::Document;
use crate::shared::polling::{Poller, Teardown};

#[derive(Subcommand, Debug)]
pub enum DocumentCommand {
    /// List documents
    List {
        /// Only documents of this vector store
        #[arg(long)]
        vector_store: Option<String>,
    },
    /// Show one document
    Get { id: String },
    /// Delete a document
    Delete { id: String },
    /// Show the ingestion status of a document
    Status { id: String },
    /// Upload a file or reference an S3 object for ingestion
    Ingest(IngestArgs),
    /// Poll ingestion status until it completes or fails
    Watch { id: String },
}

#[derive(Args, Debug)]
pub struct IngestArgs {
    /// Target vector store
    #[arg(long)]
    pub vector_store: String,

    /// Local file to upload
    #[arg(long, conflicts_with = "s3_url", required_unless_present = "s3_url")]
    pub file: Option<PathBuf>,

    /// S3 URL of an already uploaded object
    #[arg(long)]
    pub s3_url: Option<String>,

    /// Keep polling the status after ingestion starts
    #[arg(long)]
    pub watch: bool,
}

fn document_line(doc: &Document) -> String {
    format!(
        "{}  {}  [{}]  {}",
        doc.id,
        doc.title,
        doc.vector_store_name
            .as_deref()
            .or(doc.vector_store_id.as_deref())
            .unwrap_or("-"),
        doc.status.as_deref().unwrap_or("-")
    )
}

pub async fn handle(ctx: &AppContext, command: DocumentCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        DocumentCommand::List { vector_store } => {
            let docs = ctx.documents.list(vector_store.as_deref()).await?;
            out.list(&docs, "No documents found.", document_line)
        }
        DocumentCommand::Get { id } => {
            let doc = ctx.documents.get(&id).await?;
            out.item(&doc, |d| {
                format!(
                    "{}\nTitle:        {}\nVector store: {}\nUploaded:     {}\nStatus:       {}",
                    d.id,
                    d.title,
                    d.vector_store_id.as_deref().unwrap_or("-"),
                    d.uploaded_at.format("%Y-%m-%d %H:%M"),
                    d.status.as_deref().unwrap_or("-")
                )
            })
        }
        DocumentCommand::Delete { id } => {
            ctx.documents.delete(&id).await?;
            out.message(format!("Document {} deleted.", id))
        }
        DocumentCommand::Status { id } => {
            let status = ctx.documents.status(&id).await?;
            out.item(&status, |s| match &s.message {
                Some(message) => format!("{} ({})", s.status, message),
                None => s.status.to_string(),
            })
        }
        DocumentCommand::Ingest(args) => ingest(ctx, args).await,
        DocumentCommand::Watch { id } => watch(ctx, &id).await,
    }
}

async fn ingest(ctx: &AppContext, args: IngestArgs) -> Result<()> {
    let source = match (args.file, args.s3_url) {
        (Some(path), _) => IngestSource::File(path),
        (None, Some(url)) => IngestSource::S3Url(url),
        (None, None) => {
            return Err(AppError::Validation(
                "Either --file or --s3-url is required".to_string(),
            ))
        }
    };

    let ack = ctx.documents.ingest(&args.vector_store, source).await?;
    match (&ack.id, args.watch) {
        (Some(id), true) => {
            ctx.output.message(format!("Ingestion of {} started.", id))?;
            watch(ctx, id).await
        }
        _ => ctx.output.item(&ack, |a| match &a.id {
            Some(id) => format!("Ingestion of {} started.", id),
            None => "Ingestion started.".to_string(),
        }),
    }
}

async fn watch(ctx: &AppContext, id: &str) -> Result<()> {
    let teardown = Teardown::new();
    let poller = Poller::immediate(ctx.config.polling.document_interval);

    let watched = tokio::select! {
        result = ctx.documents.watch_status(id, poller, teardown.signal()) => result?,
        _ = tokio::signal::ctrl_c() => {
            teardown.fire();
            None
        }
    };

    match watched {
        Some(status) => ctx
            .output
            .item(&status, |s| format!("Document {} is {}.", id, s.status)),
        None => ctx.output.message("Stopped watching."),
    }
}
