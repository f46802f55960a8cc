use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::services::store_failure;

pub async fn update_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: &str,
    req: UpdateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.update_assignment(id, req).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(store_failure("Update assignment", &e)),
    }
}
