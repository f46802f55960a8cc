use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::responses::AssignmentCountResponse;
use crate::services::store_failure;

pub async fn count_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.count_assignments().await {
        Ok(count) => Ok(HttpResponse::Ok().json(AssignmentCountResponse { count })),
        Err(e) => Ok(store_failure("Count assignments", &e)),
    }
}
