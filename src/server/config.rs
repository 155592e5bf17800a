use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MEDIA_ROOT: &str = "media";
const DEFAULT_TOKEN_TTL_SECONDS: i64 = 86_400;

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,

    pub jwt_secret: String,
    pub token_ttl_seconds: i64,

    pub media_root: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            token_ttl_seconds: std::env::var("TOKEN_TTL_SECONDS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_TTL_SECONDS),
            media_root: std::env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| DEFAULT_MEDIA_ROOT.to_string()),
        })
    }
}
