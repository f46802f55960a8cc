use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::services::store_failure;

// 未找到时返回 null
pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_assignment_by_id(id).await {
        Ok(assignment) => Ok(HttpResponse::Ok().json(assignment)),
        Err(e) => Ok(store_failure("Get assignment", &e)),
    }
}
