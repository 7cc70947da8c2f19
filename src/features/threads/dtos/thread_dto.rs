use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for creating or re-pointing a thread
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ThreadDto {
    #[validate(length(min = 1, message = "Vector store is required"))]
    pub vector_store_id: String,
}

/// Request body for posting a message to a thread
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageDto {
    #[validate(length(min = 1, message = "Thread is required"))]
    pub thread_id: String,

    #[validate(length(min = 1, max = 32000, message = "Message must be 1-32000 characters"))]
    pub content: String,
}

/// Request body for starting an assistant run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRunDto {
    #[validate(length(min = 1, message = "Thread is required"))]
    pub thread_id: String,

    #[validate(length(min = 1, message = "Assistant is required"))]
    pub assistant_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_message_rejects_empty_content() {
        let dto = CreateMessageDto {
            thread_id: "t1".to_string(),
            content: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_run_serializes_snake_case() {
        let dto = CreateRunDto {
            thread_id: "t1".to_string(),
            assistant_id: "a1".to_string(),
        };
        assert!(dto.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"thread_id": "t1", "assistant_id": "a1"})
        );
    }
}
