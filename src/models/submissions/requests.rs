use serde::Deserialize;
use serde_json::Value;

use crate::models::submissions::entities::{SubmissionFields, SubmissionStatus};

/// 提交作业请求，未给出 status 时按 pending 保存
#[derive(Debug, Deserialize)]
pub struct CreateSubmissionRequest {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(flatten)]
    pub fields: SubmissionFields,
}

impl CreateSubmissionRequest {
    pub fn into_fields(self) -> (Option<String>, SubmissionFields) {
        let mut fields = self.fields;
        fields
            .document
            .entry("status")
            .or_insert_with(|| Value::from(SubmissionStatus::Pending.as_str()));
        (self.id, fields)
    }
}

/// 批改请求，三个字段都必须出现，值按原样写入
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeSubmissionRequest {
    pub status: Value,
    pub given_mark: Value,
    pub feedback: Value,
}

impl GradeSubmissionRequest {
    /// 写入批改字段，其余字段不动
    pub fn apply_to(self, fields: &mut SubmissionFields) {
        fields.set("status", self.status);
        fields.set("givenMark", self.given_mark);
        fields.set("examineerFeedback", self.feedback);
    }
}

/// `/api/v1/my-assignment?email=`
#[derive(Debug, Clone, Deserialize)]
pub struct MySubmissionsQuery {
    pub email: Option<String>,
}
