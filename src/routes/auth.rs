use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::IssueTokenRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn issue_token(body: web::Json<IssueTokenRequest>) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.issue_token(body.into_inner()).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/auth").route("/jwt", web::post().to(issue_token)));
}
