use crate::config::{AppConfig, CookieConfig};
use actix_web::cookie::Cookie;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub email: String, // 调用方声明的邮箱
    pub exp: usize,    // Expiration time (时间戳)
    pub iat: usize,    // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    // 生成 Access Token，有效期由 jwt.access_token_expiry（小时）决定
    pub fn generate_access_token(email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            email,
            chrono::Duration::hours(config.jwt.access_token_expiry),
            Self::get_secret(),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        email: &str,
        expiry_duration: chrono::Duration,
        secret: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            email: email.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 Access Token
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_token(token, Self::get_secret())
    }

    // 验证签名与过期时间
    pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    /// 创建 Access Token Cookie
    pub fn create_access_token_cookie(access_token: &str) -> Cookie<'static> {
        Self::build_token_cookie(access_token, &AppConfig::get().cookie)
    }

    /// 按 Cookie 配置构建 HttpOnly 令牌 Cookie
    pub fn build_token_cookie(access_token: &str, config: &CookieConfig) -> Cookie<'static> {
        let mut builder = Cookie::build(config.name.clone(), access_token.to_string())
            .path(config.path.clone())
            .http_only(true)
            .secure(config.secure);

        // 配置已在加载时校验，这里只处理合法取值
        if let Ok(Some(same_site)) = config.same_site_attribute() {
            builder = builder.same_site(same_site);
        }

        builder.finish()
    }
}
