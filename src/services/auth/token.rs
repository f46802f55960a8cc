use actix_web::{HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::errors::CoStudyError;
use crate::models::auth::{IssueTokenRequest, IssueTokenResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

/// 为请求体中的邮箱签发令牌，不做身份核验
pub async fn handle_issue_token(
    service: &AuthService,
    req: IssueTokenRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    match JwtUtils::generate_access_token(&req.email) {
        Ok(token) => {
            info!(
                "Token issued for {} ({}h)",
                req.email, config.jwt.access_token_expiry
            );
            let cookie = JwtUtils::create_access_token_cookie(&token);
            Ok(HttpResponse::Ok()
                .cookie(cookie)
                .json(IssueTokenResponse { success: true }))
        }
        Err(e) => {
            let err = CoStudyError::token_issue(e.to_string());
            error!("Token issue failed [{}]: {}", err.code(), err);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::TokenIssueFailed,
                    "Failed to issue token",
                )),
            )
        }
    }
}
