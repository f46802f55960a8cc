pub mod create;
pub mod grade;
pub mod mine;
pub mod pending;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, MySubmissionsQuery,
};
use crate::storage::Storage;

pub struct SubmissionService;

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 存储在启动时注入应用数据
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::storage_from_request(request)
    }

    // 提交作业
    pub async fn create_submission(
        &self,
        request: &HttpRequest,
        req: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_submission(self, request, req).await
    }

    // 待批改列表
    pub async fn list_pending_submissions(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        pending::list_pending_submissions(self, request).await
    }

    // 当前用户自己的提交
    pub async fn list_my_submissions(
        &self,
        request: &HttpRequest,
        token_email: &str,
        query: MySubmissionsQuery,
    ) -> ActixResult<HttpResponse> {
        mine::list_my_submissions(self, request, token_email, query).await
    }

    // 批改
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        id: &str,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, id, req).await
    }
}
