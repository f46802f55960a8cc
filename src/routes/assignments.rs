use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::PaginationParams;
use crate::models::assignments::requests::{
    CreateAssignmentRequest, DifficultyPath, UpdateAssignmentRequest,
};
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 列出作业，支持 page/size
pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn list_all_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments_by_difficulty(&req, None)
        .await
}

// 按难度筛选
pub async fn list_assignments_by_difficulty(
    req: HttpRequest,
    path: web::Path<DifficultyPath>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments_by_difficulty(&req, Some(path.into_inner().label))
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment(&req, &path.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

pub async fn update_assignment(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .update_assignment(&req, &path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_assignment(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .delete_assignment(&req, &path.into_inner())
        .await
}

pub async fn count_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.count_assignments(&req).await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/assignments")
            .route("", web::get().to(list_assignments))
            .route("", web::post().to(create_assignment))
            .route("/{id}", web::get().to(get_assignment))
            .route("/{id}", web::put().to(update_assignment))
            .route("/{id}", web::delete().to(delete_assignment)),
    )
    .route("/api/v1/assignments", web::get().to(list_all_assignments))
    .route(
        "/api/v1/assignments/{label}",
        web::get().to(list_assignments_by_difficulty),
    )
    .route(
        "/api/v1/total-assignments",
        web::get().to(count_assignments),
    );
}
