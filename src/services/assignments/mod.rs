pub mod count;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationParams;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::storage::Storage;

pub struct AssignmentService;

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 存储在启动时注入应用数据
    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::storage_from_request(request)
    }

    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        params: PaginationParams,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments(self, request, params).await
    }

    pub async fn list_assignments_by_difficulty(
        &self,
        request: &HttpRequest,
        label: Option<String>,
    ) -> ActixResult<HttpResponse> {
        list::list_assignments_by_difficulty(self, request, label).await
    }

    pub async fn get_assignment(
        &self,
        request: &HttpRequest,
        id: &str,
    ) -> ActixResult<HttpResponse> {
        detail::get_assignment(self, request, id).await
    }

    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_assignment(self, request, req).await
    }

    pub async fn update_assignment(
        &self,
        request: &HttpRequest,
        id: &str,
        req: UpdateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_assignment(self, request, id, req).await
    }

    pub async fn delete_assignment(
        &self,
        request: &HttpRequest,
        id: &str,
    ) -> ActixResult<HttpResponse> {
        delete::delete_assignment(self, request, id).await
    }

    pub async fn count_assignments(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        count::count_assignments(self, request).await
    }
}
