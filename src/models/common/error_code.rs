use serde::Serialize;

/// 对外稳定的错误类别代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    // 请求错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,

    // 服务端错误
    StoreFailure = 5001,
    TokenIssueFailed = 5002,
}
