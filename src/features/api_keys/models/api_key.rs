use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub id: String,
    /// Raw secret; accepted when the backend echoes it, never written back out
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    pub masked_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub is_valid: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_secret_is_never_serialized() {
        let key: ApiKey = serde_json::from_value(serde_json::json!({
            "id": "k1",
            "api_key": "sk-realNewKey",
            "masked_key": "sk-...Key",
            "is_valid": true,
            "created_at": "2024-02-01T00:00:00Z"
        }))
        .unwrap();
        assert_eq!(key.api_key.as_deref(), Some("sk-realNewKey"));

        let out = serde_json::to_string(&key).unwrap();
        assert!(!out.contains("sk-realNewKey"));
        assert!(out.contains("sk-...Key"));
    }
}
