use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT};
use crate::models::submissions::requests::{
    CreateSubmissionRequest, GradeSubmissionRequest, MySubmissionsQuery,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 查询自己的提交
pub async fn list_my_submissions(
    req: HttpRequest,
    query: web::Query<MySubmissionsQuery>,
) -> ActixResult<HttpResponse> {
    let email = match RequireJWT::extract_email(&req) {
        Some(email) => email,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access",
            )));
        }
    };

    SUBMISSION_SERVICE
        .list_my_submissions(&req, &email, query.into_inner())
        .await
}

pub async fn list_pending_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.list_pending_submissions(&req).await
}

pub async fn create_submission(
    req: HttpRequest,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .create_submission(&req, body.into_inner())
        .await
}

// 批改提交
pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .grade_submission(&req, &path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/v1/my-assignment")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(list_my_submissions)),
    )
    .service(
        web::resource("/api/v1/submitted-assignment")
            .route(web::get().to(list_pending_submissions))
            .route(web::post().to(create_submission)),
    )
    .route(
        "/api/v1/mark-assignment/{id}",
        web::put().to(grade_submission),
    );
}
