use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Document;

/// 作业文档（不含 ID），所有字段按提交时的原样保存
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentFields {
    #[serde(flatten)]
    pub document: Document,
}

impl AssignmentFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    pub fn set(&mut self, key: &str, value: Value) {
        self.document.insert(key.to_string(), value);
    }

    // 难度标签，只有字符串才参与筛选
    pub fn difficulty(&self) -> Option<&str> {
        self.get("difficulty").and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: AssignmentFields,
}
