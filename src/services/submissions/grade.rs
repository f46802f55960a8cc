use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::services::store_failure;

pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    id: &str,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.grade_submission(id, req).await {
        Ok(result) => {
            info!("Submission {} graded", id);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => Ok(store_failure("Grade submission", &e)),
    }
}
