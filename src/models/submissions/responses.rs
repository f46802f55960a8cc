use serde::Serialize;
use serde_json::Value;

use crate::models::submissions::entities::Submission;

/// “我的提交”列表项，只暴露七个字段
///
/// 字段值按存储原样输出，文档中不存在的字段不出现。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MySubmission {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_mark: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examineer_feedback: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<Value>,
}

impl From<Submission> for MySubmission {
    fn from(submission: Submission) -> Self {
        let mut document = submission.fields.document;
        Self {
            id: submission.id,
            user: document.remove("user"),
            title: document.remove("title"),
            given_mark: document.remove("givenMark"),
            examineer_feedback: document.remove("examineerFeedback"),
            status: document.remove("status"),
            marks: document.remove("marks"),
        }
    }
}
