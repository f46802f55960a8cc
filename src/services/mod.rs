pub mod assignments;
pub mod auth;
pub mod submissions;
pub mod system;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use submissions::SubmissionService;
pub use system::SystemService;

use actix_web::error::ErrorInternalServerError;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::errors::CoStudyError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从应用数据中取出启动时注入的存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| ErrorInternalServerError("Storage not found in app data"))
}

/// 存储失败统一返回 500，细节只写日志
pub(crate) fn store_failure(action: &str, err: &CoStudyError) -> HttpResponse {
    error!("{} failed [{}]: {}", action, err.code(), err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::StoreFailure,
        "Error fetching data",
    ))
}
