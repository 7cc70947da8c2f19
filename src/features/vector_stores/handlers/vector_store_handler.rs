use clap::Subcommand;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::vector_stores::models::VectorStore;

#[derive(Subcommand, Debug)]
pub enum VectorStoreCommand {
    /// List vector stores
    List,
    /// Show one vector store
    Get { id: String },
    /// Create a vector store
    Create { name: String },
    /// Rename a vector store
    Rename { id: String, name: String },
    /// Delete a vector store
    Delete { id: String },
    /// Grant documents to a vector store
    AddDocuments {
        id: String,
        #[arg(required = true, num_args = 1..)]
        documents: Vec<String>,
    },
    /// Revoke documents from a vector store
    RemoveDocuments {
        id: String,
        #[arg(required = true, num_args = 1..)]
        documents: Vec<String>,
    },
    /// List documents granted to a vector store
    Documents { id: String },
}

fn store_line(store: &VectorStore) -> String {
    match store.document_count {
        Some(count) => format!("{}  {}  ({} documents)", store.id, store.name, count),
        None => format!("{}  {}", store.id, store.name),
    }
}

pub async fn handle(ctx: &AppContext, command: VectorStoreCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        VectorStoreCommand::List => {
            let stores = ctx.vector_stores.list().await?;
            out.list(&stores, "No vector stores found.", store_line)
        }
        VectorStoreCommand::Get { id } => {
            let store = ctx.vector_stores.get(&id).await?;
            out.item(&store, store_line)
        }
        VectorStoreCommand::Create { name } => {
            let store = ctx.vector_stores.create(&name).await?;
            out.item(&store, |s| format!("Created vector store {} ({}).", s.name, s.id))
        }
        VectorStoreCommand::Rename { id, name } => {
            let store = ctx.vector_stores.update(&id, &name).await?;
            out.item(&store, |s| format!("Renamed vector store {} to {}.", s.id, s.name))
        }
        VectorStoreCommand::Delete { id } => {
            ctx.vector_stores.delete(&id).await?;
            out.message(format!("Vector store {} deleted.", id))
        }
        VectorStoreCommand::AddDocuments { id, documents } => {
            ctx.vector_stores.add_documents(&id, &documents).await?;
            out.message(format!("Added {} document(s) to {}.", documents.len(), id))
        }
        VectorStoreCommand::RemoveDocuments { id, documents } => {
            ctx.vector_stores.remove_documents(&id, &documents).await?;
            out.message(format!("Removed {} document(s) from {}.", documents.len(), id))
        }
        VectorStoreCommand::Documents { id } => {
            let access = ctx.vector_stores.list_document_access(&id).await?;
            out.list(&access, "No documents in this vector store.", |a| {
                format!(
                    "{}  {}",
                    a.document_id,
                    a.document_title.as_deref().unwrap_or("-")
                )
            })
        }
    }
}
