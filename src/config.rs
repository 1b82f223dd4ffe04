use actix_web::http::Uri;
use actix_web::http::header::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_JSON_BODY_LIMIT: usize = 256 * 1024;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "*";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Largest JSON body accepted by post creation, in bytes
    pub json_body_limit: usize,
    /// Allowed origins; `*` allows any
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            json_body_limit: DEFAULT_JSON_BODY_LIMIT,
            cors_allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGINS.to_string()],
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source. Unset variables
    /// fall back to defaults; set but unparsable ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        Ok(AppConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: match lookup("PORT") {
                Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    expected: "a port number",
                    value,
                })?,
                None => defaults.port,
            },
            json_body_limit: match lookup("JSON_BODY_LIMIT") {
                Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    name: "JSON_BODY_LIMIT",
                    expected: "a size in bytes",
                    value,
                })?,
                None => defaults.json_body_limit,
            },
            cors_allowed_origins: match lookup("CORS_ALLOWED_ORIGINS") {
                Some(value) => parse_origins(value)?,
                None => defaults.cors_allowed_origins,
            },
        })
    }
}

/// Split a comma-separated origin list, rejecting entries the CORS layer
/// could not turn into an `Origin` header value.
fn parse_origins(value: String) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    let valid = !origins.is_empty()
        && origins.iter().all(|origin| {
            origin == "*"
                || (origin.parse::<Uri>().is_ok() && HeaderValue::from_str(origin).is_ok())
        });
    if !valid {
        return Err(ConfigError::InvalidValue {
            name: "CORS_ALLOWED_ORIGINS",
            expected: "a comma-separated list of origins or *",
            value,
        });
    }

    Ok(origins)
}
