use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct CreateApiKeyDto {
    #[validate(regex(
        path = "*crate::shared::validation::API_KEY_REGEX",
        message = "API key must look like an OpenAI secret key (sk-...)"
    ))]
    pub api_key: String,

    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl std::fmt::Debug for CreateApiKeyDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateApiKeyDto")
            .field("api_key", &"***")
            .field("name", &self.name)
            .finish()
    }
}

/// Only the label of a key can change
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateApiKeyDto {
    #[validate(length(max = 100, message = "Name must not exceed 100 characters"))]
    pub name: Option<String>,
}
