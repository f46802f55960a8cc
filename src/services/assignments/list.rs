use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::AssignmentService;
use crate::models::{PageWindow, PaginationParams};
use crate::services::store_failure;

pub async fn list_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
    params: PaginationParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let window = PageWindow::from_params(&params);
    debug!("Listing assignments with window {:?}", window);

    match storage.list_assignments(window).await {
        Ok(assignments) => Ok(HttpResponse::Ok().json(assignments)),
        Err(e) => Ok(store_failure("List assignments", &e)),
    }
}

pub async fn list_assignments_by_difficulty(
    service: &AssignmentService,
    request: &HttpRequest,
    label: Option<String>,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .list_assignments_by_difficulty(label.as_deref())
        .await
    {
        Ok(assignments) => Ok(HttpResponse::Ok().json(assignments)),
        Err(e) => Ok(store_failure("List assignments by difficulty", &e)),
    }
}
