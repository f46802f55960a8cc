//! 作业集合存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Model};
use crate::errors::{CoStudyError, Result};
use crate::models::common::document::new_document_id;
use crate::models::{
    DeleteResult, InsertOneResult, PageWindow, UpdateResult,
    assignments::{
        entities::{Assignment, AssignmentFields},
        requests::UpdateAssignmentRequest,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 按插入顺序列出作业
    pub async fn list_assignments_impl(&self, window: PageWindow) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find().order_by_asc(Column::Seq);

        if window.skip > 0 {
            select = select.offset(window.skip);
        }
        if let Some(limit) = window.limit {
            select = select.limit(limit);
        }

        select
            .all(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询作业列表失败: {e}")))?
            .into_iter()
            .map(Model::into_assignment)
            .collect()
    }

    /// 按难度筛选作业
    pub async fn list_assignments_by_difficulty_impl(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<Assignment>> {
        let mut select = Assignments::find();

        if let Some(label) = difficulty {
            select = select.filter(Column::Difficulty.eq(label));
        }

        select
            .order_by_asc(Column::Seq)
            .all(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("按难度查询作业失败: {e}")))?
            .into_iter()
            .map(Model::into_assignment)
            .collect()
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find()
            .filter(Column::DocId.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询作业失败: {e}")))?;

        result.map(Model::into_assignment).transpose()
    }

    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        id: Option<String>,
        fields: AssignmentFields,
    ) -> Result<InsertOneResult> {
        let id = id.unwrap_or_else(new_document_id);

        let model = ActiveModel {
            doc_id: Set(id.clone()),
            difficulty: Set(fields.difficulty().map(str::to_string)),
            document: Set(serde_json::to_string(&fields)?),
            created_at: Set(chrono::Utc::now().timestamp_millis()),
            ..Default::default()
        };

        model
            .insert(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(InsertOneResult::new(id))
    }

    /// 更新作业，读改写在同一事务内
    pub async fn update_assignment_impl(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CoStudyError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Assignments::find()
            .filter(Column::DocId.eq(id))
            .one(&txn)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询作业失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(UpdateResult::unmatched());
        };

        let mut fields = existing.fields()?;
        let before = fields.clone();
        update.apply_to(&mut fields);
        let modified = fields != before;

        if modified {
            let mut model: ActiveModel = existing.into();
            model.difficulty = Set(fields.difficulty().map(str::to_string));
            model.document = Set(serde_json::to_string(&fields)?);
            model
                .update(&txn)
                .await
                .map_err(|e| CoStudyError::database_operation(format!("更新作业失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| CoStudyError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(UpdateResult::matched(modified))
    }

    /// 删除作业
    pub async fn delete_assignment_impl(&self, id: &str) -> Result<DeleteResult> {
        let result = Assignments::delete_many()
            .filter(Column::DocId.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(DeleteResult::new(result.rows_affected))
    }

    /// 作业总数
    pub async fn count_assignments_impl(&self) -> Result<u64> {
        Assignments::find()
            .count(&self.db)
            .await
            .map_err(|e| CoStudyError::database_operation(format!("查询作业总数失败: {e}")))
    }
}
