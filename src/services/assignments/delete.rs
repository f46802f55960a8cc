use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::services::store_failure;

pub async fn delete_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.delete_assignment(id).await {
        Ok(result) => {
            if result.deleted_count > 0 {
                info!("Assignment {} deleted", id);
            }
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => Ok(store_failure("Delete assignment", &e)),
    }
}
