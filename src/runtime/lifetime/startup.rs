use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 启动时提示不安全的配置组合
fn warn_insecure_settings(config: &AppConfig) {
    if config.uses_development_secret() {
        warn!("==========================================================");
        warn!("  JWT SECRET NOT SET - USING BUILT-IN DEVELOPMENT SECRET");
        warn!("  Set ACCESS_TOKEN_SECRET before exposing this server");
        warn!("==========================================================");
    }

    if !config.cookie.secure {
        warn!(
            "Cookie '{}' is issued without the Secure attribute",
            config.cookie.name
        );
    }

    if config.cookie.is_rejected_by_browsers() {
        warn!("Cookie SameSite=None without Secure will be rejected by browsers");
    }

    if config.cors.allowed_origins.is_empty() {
        warn!("No CORS origins configured, any origin will be accepted without credentials");
    }
}

/// 准备服务器启动的上下文
/// 包括 TLS 提供者与存储
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let config = AppConfig::get();
    warn_insecure_settings(config);

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(StartupContext { storage })
}
