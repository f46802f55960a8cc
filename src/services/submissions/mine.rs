use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::models::submissions::requests::MySubmissionsQuery;
use crate::models::submissions::responses::MySubmission;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::store_failure;

/// 只能查询令牌中邮箱对应的提交
pub async fn list_my_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    token_email: &str,
    query: MySubmissionsQuery,
) -> ActixResult<HttpResponse> {
    let email = match query.email {
        Some(email) if email == token_email => email,
        other => {
            info!(
                "Submission lookup for {:?} rejected, token belongs to {}",
                other, token_email
            );
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Forbidden access",
            )));
        }
    };

    let storage = service.get_storage(request)?;

    match storage.list_submissions_by_user(&email).await {
        Ok(submissions) => {
            let projected: Vec<MySubmission> =
                submissions.into_iter().map(MySubmission::from).collect();
            Ok(HttpResponse::Ok().json(projected))
        }
        Err(e) => Ok(store_failure("List my submissions", &e)),
    }
}
