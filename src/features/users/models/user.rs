use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Console user as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "firstName", alias = "first_name", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", alias = "last_name", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub tenant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_name: Option<String>,
}

impl User {
    /// Full name when known, otherwise the username
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_accepts_both_name_spellings() {
        let camel: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "username": "ana",
            "email": "ana@example.com",
            "firstName": "Ana",
            "role": "admin",
            "created_at": "2024-05-01T10:00:00Z",
            "tenant_id": "t1"
        }))
        .unwrap();
        let snake: User = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "username": "ana",
            "email": "ana@example.com",
            "first_name": "Ana",
            "role": "admin",
            "created_at": "2024-05-01T10:00:00Z",
            "tenant_id": "t1"
        }))
        .unwrap();

        assert_eq!(camel, snake);
        assert_eq!(camel.display_name(), "Ana");
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u2",
            "username": "bob",
            "email": "bob@example.com",
            "role": "member",
            "created_at": "2024-05-01T10:00:00Z",
            "tenant_id": "t1"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "bob");
    }
}
