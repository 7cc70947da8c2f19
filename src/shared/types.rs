use serde::Serialize;

/// Envelope printed for every command in `--json` mode
#[derive(Debug, Serialize)]
pub struct CommandResponse<'a, T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct Meta {
    pub total: usize,
}

impl<'a, T: Serialize> CommandResponse<'a, T> {
    pub fn success(data: Option<&'a T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }
}

impl CommandResponse<'static, ()> {
    pub fn error(message: String, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
            meta: None,
            errors,
        }
    }
}
