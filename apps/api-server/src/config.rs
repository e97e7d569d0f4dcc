//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

#[cfg(feature = "rate-limit")]
use blog_infra::RateLimitConfig;

/// Default maximum request body size in bytes.
const DEFAULT_MAX_BODY_SIZE: usize = 10 * 1024;

/// Deployment environment, from `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Anything other than an explicit development value is production.
    fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "development" | "dev" | "local" => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// Origins allowed to make cross-origin requests.
    pub cors_allowed_origins: Vec<String>,
    /// Max HTTP body size the API accepts.
    pub max_body_size: usize,
    /// JSON file replacing the embedded seed posts.
    pub posts_file: Option<PathBuf>,
    /// Key rate limits on `Forwarded`/`X-Forwarded-For` instead of the peer
    /// address. Only safe behind a trusted reverse proxy.
    #[cfg(feature = "rate-limit")]
    pub trust_proxy: bool,
    #[cfg(feature = "rate-limit")]
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: env::var("APP_ENV")
                .map(|v| Environment::parse(&v))
                .unwrap_or(Environment::Production),
            cors_allowed_origins: parse_origins(
                &env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            ),
            max_body_size: env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),
            posts_file: env::var("POSTS_FILE")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            #[cfg(feature = "rate-limit")]
            trust_proxy: env::var("TRUST_PROXY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            #[cfg(feature = "rate-limit")]
            rate_limit: RateLimitConfig::from_env(),
        }
    }
}

/// Parse a comma-separated origin list.
/// Format: CORS_ALLOWED_ORIGINS=<origin>,<origin>,...
/// Example: CORS_ALLOWED_ORIGINS=https://blog.example.com,http://localhost:3000
///
/// Wildcards and entries without an http(s) scheme are dropped; trailing
/// slashes are removed so entries compare equal to browser `Origin` headers.
fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .filter(|origin| {
            let valid = origin.starts_with("http://") || origin.starts_with("https://");
            if !valid {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
            }
            valid
        })
        .map(String::from)
        .collect()
}
