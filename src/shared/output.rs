//! Command output on stdout, either human-readable or as a JSON envelope.
//! Logs go to stderr, so stdout only ever carries results.

use serde::Serialize;

use crate::core::error::{AppError, Result};
use crate::shared::types::{CommandResponse, Meta};

#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Print one item, rendered by `human` outside JSON mode
    pub fn item<T: Serialize>(&self, data: &T, human: impl FnOnce(&T) -> String) -> Result<()> {
        if self.json {
            self.emit(&CommandResponse::success(Some(data), None, None))
        } else {
            println!("{}", human(data));
            Ok(())
        }
    }

    /// Print a list, one `human` line per element outside JSON mode
    pub fn list<T: Serialize>(
        &self,
        items: &[T],
        empty: &str,
        human: impl Fn(&T) -> String,
    ) -> Result<()> {
        if self.json {
            let meta = Meta { total: items.len() };
            return self.emit(&CommandResponse::success(Some(&items), None, Some(meta)));
        }

        if items.is_empty() {
            println!("{}", empty);
        }
        for item in items {
            println!("{}", human(item));
        }
        Ok(())
    }

    /// Print a confirmation for commands without a result body
    pub fn message(&self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if self.json {
            self.emit(&CommandResponse::<()>::success(None, Some(message), None))
        } else {
            println!("{}", message);
            Ok(())
        }
    }

    /// Report a failed command; JSON mode keeps the envelope on stdout
    pub fn failure(&self, message: &str) {
        if self.json {
            let response = CommandResponse::error(message.to_string(), None);
            if let Ok(body) = serde_json::to_string_pretty(&response) {
                println!("{}", body);
            }
        } else {
            eprintln!("Error: {}", message);
        }
    }

    fn emit<T: Serialize>(&self, response: &CommandResponse<'_, T>) -> Result<()> {
        let body = serde_json::to_string_pretty(response)
            .map_err(|e| AppError::Internal(format!("Failed to render output: {}", e)))?;
        println!("{}", body);
        Ok(())
    }
}

/// Shorten long text for one-line listings
pub fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let cut: String = single_line.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}
