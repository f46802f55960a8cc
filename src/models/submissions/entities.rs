use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Document;

/// 提交状态，列表筛选用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Completed,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Completed => "completed",
        }
    }
}

/// 提交文档（不含 ID），所有字段按原样保存
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionFields {
    #[serde(flatten)]
    pub document: Document,
}

impl SubmissionFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.document.insert(key.to_string(), value);
    }

    pub fn status(&self) -> Option<&str> {
        self.get("status").and_then(Value::as_str)
    }

    // 提交者邮箱，归属判断的唯一依据
    pub fn user(&self) -> Option<&str> {
        self.get("user").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: SubmissionFields,
}
