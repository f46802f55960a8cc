use serde::{Deserialize, Serialize};

use crate::models::ErrorCode;

// 统一的错误响应结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i32,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ApiResponse {
    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}
