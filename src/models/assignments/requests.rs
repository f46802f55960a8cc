use serde::Deserialize;
use serde_json::Value;

use crate::models::assignments::entities::AssignmentFields;

/// 创建作业请求，`_id` 可由调用方指定
#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: AssignmentFields,
}

/// 更新作业请求：六个字段整体替换，值按原样写入
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssignmentRequest {
    pub updated_title: Value,
    pub updated_difficulty: Value,
    pub updated_date: Value,
    pub updated_marks: Value,
    pub updated_image: Value,
    pub updated_description: Value,
}

impl UpdateAssignmentRequest {
    /// 覆盖可变字段，其余字段保持不变
    pub fn apply_to(self, fields: &mut AssignmentFields) {
        fields.set("title", self.updated_title);
        fields.set("difficulty", self.updated_difficulty);
        fields.set("date", self.updated_date);
        fields.set("marks", self.updated_marks);
        fields.set("thumbnail", self.updated_image);
        fields.set("description", self.updated_description);
    }
}

/// `/api/v1/assignments/{label}` 路径参数
#[derive(Debug, Deserialize)]
pub struct DifficultyPath {
    pub label: String,
}
