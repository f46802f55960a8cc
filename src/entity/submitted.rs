//! 提交集合实体

use sea_orm::entity::prelude::*;

use crate::models::submissions::entities::{Submission, SubmissionFields};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submitted")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,
    #[sea_orm(unique)]
    pub doc_id: String,
    pub status: Option<String>,
    pub user_email: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub document: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn fields(&self) -> crate::errors::Result<SubmissionFields> {
        Ok(serde_json::from_str(&self.document)?)
    }

    // 从数据库模型转换为业务模型
    pub fn into_submission(self) -> crate::errors::Result<Submission> {
        let fields = self.fields()?;
        Ok(Submission {
            id: self.doc_id,
            fields,
        })
    }
}
