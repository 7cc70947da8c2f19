use clap::Subcommand;

use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::alerts::models::DocumentAlert;
use crate::shared::output::truncate;

#[derive(Subcommand, Debug)]
pub enum AlertCommand {
    /// List alerts
    List {
        /// Only alerts raised on this document
        #[arg(long)]
        document: Option<String>,
    },
    /// Show one alert
    Get { id: String },
    /// Dismiss an alert
    Delete { id: String },
}

pub fn alert_line(alert: &DocumentAlert) -> String {
    format!(
        "{}  {}  \"{}\" in {}: {}",
        alert.id,
        alert.created_at.format("%Y-%m-%d %H:%M"),
        alert.keyword,
        alert.document_title.as_deref().unwrap_or(&alert.document),
        truncate(&alert.snippet, 80)
    )
}

pub async fn handle(ctx: &AppContext, command: AlertCommand) -> Result<()> {
    let out = ctx.output;
    match command {
        AlertCommand::List { document } => {
            let alerts = ctx.alerts.list(document.as_deref()).await?;
            out.list(&alerts, "No alerts.", alert_line)
        }
        AlertCommand::Get { id } => {
            let alert = ctx.alerts.get(&id).await?;
            out.item(&alert, |a| format!("{}\n\n{}", alert_line(a), a.snippet))
        }
        AlertCommand::Delete { id } => {
            ctx.alerts.delete(&id).await?;
            out.message(format!("Alert {} dismissed.", id))
        }
    }
}
