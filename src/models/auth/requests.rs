use serde::Deserialize;

/// 签发令牌请求，不校验密码
#[derive(Debug, Clone, Deserialize)]
pub struct IssueTokenRequest {
    pub email: String,
}
