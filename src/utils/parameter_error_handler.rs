//! 请求参数解析失败时的统一 400 响应

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request<E>(err: E, req: &HttpRequest, kind: &str) -> Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    debug!("Invalid {} for {}: {}", kind, req.path(), err);
    let message = format!("Invalid {kind}: {err}");
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message));
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    bad_request(err, req, "request body")
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    bad_request(err, req, "query parameters")
}

pub fn path_error_handler(err: PathError, req: &HttpRequest) -> Error {
    bad_request(err, req, "path parameters")
}
