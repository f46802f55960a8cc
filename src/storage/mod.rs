use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    DeleteResult, InsertOneResult, PageWindow, UpdateResult,
    assignments::{
        entities::{Assignment, AssignmentFields},
        requests::UpdateAssignmentRequest,
    },
    submissions::{
        entities::{Submission, SubmissionFields, SubmissionStatus},
        requests::GradeSubmissionRequest,
    },
};

pub mod sea_orm_storage;

/// 文档集合存储
///
/// 每个方法对应一次单文档（或单次查询）操作，读改写在同一事务内完成。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业集合
    // 按插入顺序列出作业，可选跳过/限制
    async fn list_assignments(&self, window: PageWindow) -> Result<Vec<Assignment>>;
    // 按难度精确筛选，None 表示不过滤
    async fn list_assignments_by_difficulty(
        &self,
        difficulty: Option<&str>,
    ) -> Result<Vec<Assignment>>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, id: &str) -> Result<Option<Assignment>>;
    // 新建作业，id 为空时自动生成
    async fn create_assignment(
        &self,
        id: Option<String>,
        fields: AssignmentFields,
    ) -> Result<InsertOneResult>;
    // 替换六个可变字段
    async fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Result<UpdateResult>;
    // 删除作业
    async fn delete_assignment(&self, id: &str) -> Result<DeleteResult>;
    // 作业总数
    async fn count_assignments(&self) -> Result<u64>;

    /// 提交集合
    // 新建提交
    async fn create_submission(
        &self,
        id: Option<String>,
        fields: SubmissionFields,
    ) -> Result<InsertOneResult>;
    // 按状态列出提交
    async fn list_submissions_by_status(
        &self,
        status: SubmissionStatus,
    ) -> Result<Vec<Submission>>;
    // 列出某用户的提交
    async fn list_submissions_by_user(&self, user: &str) -> Result<Vec<Submission>>;
    // 批改提交，不存在时 upsert
    async fn grade_submission(
        &self,
        id: &str,
        grade: GradeSubmissionRequest,
    ) -> Result<UpdateResult>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(config).await?;
    Ok(Arc::new(storage))
}
