use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::entities::SubmissionStatus;
use crate::services::store_failure;

pub async fn list_pending_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage
        .list_submissions_by_status(SubmissionStatus::Pending)
        .await
    {
        Ok(submissions) => Ok(HttpResponse::Ok().json(submissions)),
        Err(e) => Ok(store_failure("List pending submissions", &e)),
    }
}
