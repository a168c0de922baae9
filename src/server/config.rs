use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const PRODUCTION: &str = "production";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    /// Password assigned to users registered without one.
    pub default_user_pass: String,

    /// Deployment environment, `production` hides stack traces from failure responses.
    pub env: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            port,
            default_user_pass: required_var("DEFAULT_USER_PASS")?,
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.env == PRODUCTION
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
