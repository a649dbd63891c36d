use crate::server::error::{config::ConfigError, AppError};

/// Global Confluence credentials from the environment, used as a fallback
/// when an organization row carries no credentials of its own.
#[derive(Debug, Clone, Default)]
pub struct ConfluenceDefaults {
    pub base_url: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    pub space_key: Option<String>,
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub confluence: ConfluenceDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = env_or("PORT", "9000");
        let port = port
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string(), port.clone()))?;

        Ok(Self {
            database_url: database_url(),
            port,
            confluence: ConfluenceDefaults {
                base_url: env_opt("CONF_BASE"),
                email: env_opt("CONF_EMAIL"),
                token: env_opt("CONF_TOKEN"),
                space_key: env_opt("CONF_SPACE"),
            },
        })
    }
}

/// `DATABASE_URL` wins; otherwise the URL is assembled from the discrete
/// `POSTGRES_*` variables with development defaults.
fn database_url() -> String {
    if let Ok(url) = std::env::var("DATABASE_URL") {
        if !url.is_empty() {
            return url;
        }
    }

    let host = env_or("POSTGRES_HOST", "localhost");
    let user = env_or("POSTGRES_USER", "updoc");
    let password = env_or("POSTGRES_PASSWORD", "updoc");
    let dbname = env_or("POSTGRES_DB", "updoc");
    let port = env_or("POSTGRES_PORT", "5432");
    let sslmode = env_or("POSTGRES_SSLMODE", "disable");

    format!("postgres://{user}:{password}@{host}:{port}/{dbname}?sslmode={sslmode}")
}

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
