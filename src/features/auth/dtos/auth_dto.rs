use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::users::models::User;

/// Request DTO for tenant registration
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequestDto {
    #[validate(
        length(min = 1, max = 150, message = "Username must be 1-150 characters"),
        regex(
            path = "*crate::shared::validation::USERNAME_REGEX",
            message = "Username must start with letter or underscore and contain only alphanumeric characters and underscores"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(length(min = 1, message = "Tenant name is required"))]
    pub tenant_name: String,
}

/// Request DTO for login
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response DTO for login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponseDto {
    /// Session token used as a path segment on every authenticated call
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}
