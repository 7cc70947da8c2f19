use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating or updating a user; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserOperationDto {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        regex(
            path = "*crate::shared::validation::USERNAME_REGEX",
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[validate(length(min = 1, message = "Role must not be empty"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(rename = "currentPassword", skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,

    #[validate(length(min = 6, message = "New password must be at least 6 characters"))]
    #[serde(rename = "newPassword", skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

impl UserOperationDto {
    /// Fields a new user cannot do without
    pub fn missing_for_create(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_none() {
            missing.push("username");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.role.is_none() {
            missing.push("role");
        }
        if self.password.is_none() {
            missing.push("password");
        }
        missing
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.role.is_none()
            && self.password.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.new_password.is_none()
    }
}
