//! 提交集合存储操作

use super::SeaOrmStorage;
use crate::entity::submitted::{ActiveModel, Column, Entity as Submitted, Model};
use crate::errors::{CoStudyError, Result};
use crate::models::common::document::new_document_id;
use crate::models::{
    InsertOneResult, UpdateResult,
    submissions::{
        entities::{Submission, SubmissionFields, SubmissionStatus},
        requests::GradeSubmissionRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建提交
    pub async fn create_submission_impl(
        &self,
        id: Option<String>,
        fields: SubmissionFields,
    ) -> Result<InsertOneResult> {
        let id = id.unwrap_or_else(new_document_id);
        insert_submission(&self.db, &id, &fields).await?;
        Ok(InsertOneResult::new(id))
    }

    /// 按状态列出提交
    pub async fn list_submissions_by_status_impl(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<Submission>> {
        Submitted::find()
            .filter(Column::Status.eq(status.as_str()))
            .order_by_asc(Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询提交列表失败: {e}")))?
            .into_iter()
            .map(Model::into_submission)
            .collect()
    }

    /// 列出某用户的提交
    pub async fn list_submissions_by_user_impl(&self, user: &str) -> Result<Vec<Submission>> {
        Submitted::find()
            .filter(Column::UserEmail.eq(user))
            .order_by_asc(Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询用户提交失败: {e}")))?
            .into_iter()
            .map(Model::into_submission)
            .collect()
    }

    /// 批改提交
    ///
    /// ID 不存在时新建一条只含批改字段的文档（upsert），缺少 user/title/marks。
    pub async fn grade_submission_impl(
        &self,
        id: &str,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoStudyError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Submitted::find()
            .filter(Column::DocId.eq(id))
            .one(&txn)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询提交失败: {e}")))?;

        let result = match existing {
            Some(existing) => {
                let mut fields = existing.fields()?;
                let before = fields.clone();
                grade.apply_to(&mut fields);
                let modified = fields != before;

                if modified {
                    let mut model: ActiveModel = existing.into();
                    model.status = Set(fields.status().map(str::to_string));
                    model.document = Set(serde_json::to_string(&fields)?);
                    model.update(&txn).await.map_err(|e| {
                        CoStudyError::database_operation(format!("更新提交失败: {e}"))
                    })?;
                }
                UpdateResult::matched(modified)
            }
            None => {
                let mut fields = SubmissionFields::default();
                grade.apply_to(&mut fields);
                insert_submission(&txn, id, &fields).await?;
                warn!("Grading upserted a partial submission {}", id);
                UpdateResult::upserted(id)
            }
        };

        txn.commit()
            .await
            .map_err(|e| CoStudyError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }
}

async fn insert_submission<C: ConnectionTrait>(
    db: &C,
    id: &str,
    fields: &SubmissionFields,
) -> Result<()> {
    let model = ActiveModel {
        doc_id: Set(id.to_string()),
        status: Set(fields.status().map(str::to_string)),
        user_email: Set(fields.user().map(str::to_string)),
        document: Set(serde_json::to_string(fields)?),
        created_at: Set(chrono::Utc::now().timestamp_millis()),
        ..Default::default()
    };
    model
        .insert(db)
        .await
        .map_err(|e| CoStudyError::database_operation(format!("写入提交失败: {e}")))?;
    Ok(())
}
