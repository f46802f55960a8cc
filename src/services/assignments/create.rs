use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::services::store_failure;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.create_assignment(req.id, req.fields).await {
        Ok(result) => {
            info!("Assignment {} created", result.inserted_id);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => Ok(store_failure("Create assignment", &e)),
    }
}
