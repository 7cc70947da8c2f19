use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create and update payload; optional fields are left out when absent
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AssistantDto {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_store_id: Option<String>,

    #[validate(length(max = 32000, message = "Instructions must not exceed 32000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl AssistantDto {
    /// Blank optional values count as absent
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            vector_store_id: non_blank(self.vector_store_id),
            instructions: non_blank(self.instructions),
            model: non_blank(self.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_are_omitted() {
        let dto = AssistantDto {
            name: " Support ".to_string(),
            vector_store_id: Some(String::new()),
            instructions: Some("Answer briefly.".to_string()),
            model: None,
        }
        .normalized();

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({"name": "Support", "instructions": "Answer briefly."})
        );
    }

    #[test]
    fn test_name_required() {
        assert!(AssistantDto::default().validate().is_err());
    }
}
