use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::services::store_failure;

pub async fn create_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let (id, fields) = req.into_fields();

    match storage.create_submission(id, fields).await {
        Ok(result) => {
            info!("Submission {} created", result.inserted_id);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => Ok(store_failure("Create submission", &e)),
    }
}
