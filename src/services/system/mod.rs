use actix_web::{HttpResponse, Result as ActixResult};

use crate::config::AppConfig;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 存活检查，固定文本
    pub async fn liveness(&self) -> ActixResult<HttpResponse> {
        let name = &self.get_config().app.system_name;
        Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(format!("{name} Server running .................")))
    }
}
