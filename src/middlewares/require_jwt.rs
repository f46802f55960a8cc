/*!
 * JWT 认证中间件
 *
 * 从请求 Cookie 中读取令牌并验证签名与有效期，只有通过验证的请求才会进入受保护的处理程序。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RequireJWT;
 *
 * cfg.service(
 *     web::resource("/api/v1/my-assignment")
 *         .wrap(RequireJWT)
 *         .route(web::get().to(handler)),
 * );
 *
 * async fn handler(req: HttpRequest) -> ActixResult<HttpResponse> {
 *     let email = RequireJWT::extract_email(&req);
 *     // ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 客户端携带 `POST /api/v1/auth/jwt` 下发的 HttpOnly Cookie（默认名 `token`）
 * 2. 中间件提取并验证令牌
 * 3. 令牌有效时将 Claims 存入请求扩展，继续处理请求
 * 4. 令牌缺失、无效或过期时返回 401
 */

use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::{Claims, JwtUtils};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, info};

use crate::config::AppConfig;

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, message)),
    }
}

// 辅助函数：提取并验证 Cookie 中的 access token
fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<Claims, &'static str> {
    let token = req
        .cookie(&AppConfig::get().cookie.name)
        .map(|cookie| cookie.value().to_string())
        .filter(|token| !token.is_empty())
        .ok_or("Missing token")?;

    JwtUtils::verify_access_token(&token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid token"
    })
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_validate_jwt(&req) {
                Ok(claims) => {
                    debug!("JWT authentication successful for {}", claims.email);
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取令牌信息
impl RequireJWT {
    /// 从请求扩展中提取令牌中的邮箱
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_email(req: &actix_web::HttpRequest) -> Option<String> {
        req.extensions()
            .get::<Claims>()
            .map(|claims| claims.email.clone())
    }
}
