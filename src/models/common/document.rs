//! 文档集合通用类型
//!
//! 写操作的回执结构与文档数据库驱动返回的形状保持一致，前端直接读取这些字段。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 未声明字段原样保留
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOneResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertOneResult {
    pub fn new(inserted_id: impl Into<String>) -> Self {
        Self {
            acknowledged: true,
            inserted_id: inserted_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateResult {
    /// 未匹配到任何文档
    pub fn unmatched() -> Self {
        Self {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 0,
            upserted_id: None,
        }
    }

    /// 匹配到一个文档，`modified` 表示内容是否实际发生变化
    pub fn matched(modified: bool) -> Self {
        Self {
            matched_count: 1,
            modified_count: u64::from(modified),
            ..Self::unmatched()
        }
    }

    /// 未匹配，按 upsert 新建了文档
    pub fn upserted(id: impl Into<String>) -> Self {
        Self {
            upserted_count: 1,
            upserted_id: Some(id.into()),
            ..Self::unmatched()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// 生成新文档 ID
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
