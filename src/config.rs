use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

/// Development-only fallback. Anything real must set JWT_SECRET.
const DEV_JWT_SECRET: &str = "change-me-secret";

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                warn!("JWT_SECRET is not set; using the insecure development default");
                DEV_JWT_SECRET.to_string()
            }
        };

        let jwt = JwtConfig {
            secret,
            ttl_minutes: std::env::var("JWT_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(20160), // 14 days
        };

        Ok(Self { database_url, jwt })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-global, so every case lives in this one test.
    #[test]
    fn from_env_requires_url_and_fills_defaults() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("JWT_TTL_MINUTES");

        // No connection string: refuse to start.
        let err = AppConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));

        // Connection string alone: insecure dev secret, 14-day ttl.
        std::env::set_var("DATABASE_URL", "postgres://localhost/todosync");
        let config = AppConfig::from_env().expect("config");
        assert_eq!(config.database_url, "postgres://localhost/todosync");
        assert_eq!(config.jwt.secret, DEV_JWT_SECRET);
        assert_eq!(config.jwt.ttl_minutes, 20160);

        // Explicit values win over both fallbacks.
        std::env::set_var("JWT_SECRET", "a-real-secret");
        std::env::set_var("JWT_TTL_MINUTES", "60");
        let config = AppConfig::from_env().expect("config");
        assert_eq!(config.jwt.secret, "a-real-secret");
        assert_eq!(config.jwt.ttl_minutes, 60);

        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("JWT_SECRET");
        std::env::remove_var("JWT_TTL_MINUTES");
    }
}
