use crate::core::context::AppContext;
use crate::core::error::Result;
use crate::features::alerts::handlers::alert_line;

pub async fn handle(ctx: &AppContext) -> Result<()> {
    let summary = ctx.dashboard.summary().await;

    ctx.output.item(&summary, |s| {
        let mut lines = vec![
            format!("Documents:     {}", s.documents),
            format!("Vector stores: {}", s.vector_stores),
            format!("Assistants:    {}", s.assistants),
            format!("Threads:       {}", s.threads),
            format!("Alerts:        {}", s.alerts),
        ];
        if !s.recent_alerts.is_empty() {
            lines.push(String::new());
            lines.push("Recent alerts:".to_string());
            lines.extend(s.recent_alerts.iter().map(alert_line));
        }
        if !s.unavailable.is_empty() {
            lines.push(String::new());
            lines.push(format!("Could not load: {}", s.unavailable.join(", ")));
        }
        lines.join("\n")
    })
}
