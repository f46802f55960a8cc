pub mod token;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::auth::IssueTokenRequest;

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 签发令牌并写入 Cookie
    pub async fn issue_token(&self, req: IssueTokenRequest) -> ActixResult<HttpResponse> {
        token::handle_issue_token(self, req).await
    }
}
