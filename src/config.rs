use crate::utils::AppError;
use actix_web::http::Uri;
use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3002;
const DEFAULT_USERS_COLLECTION: &str = "users";
const DEFAULT_USER_ROUTE_PREFIX: &str = "/user";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Runtime settings, read once at startup from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory user store.
    pub database_url: Option<String>,
    pub users_collection: String,
    pub user_route_prefix: String,
    pub ui_enabled: bool,
    pub cors_allowed_origins: Vec<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Configuration(format!("PORT '{}': {}", raw, e)))?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("DATABASE_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty());

        let users_collection = env::var("USERS_COLLECTION")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USERS_COLLECTION.to_string());

        let user_route_prefix = env::var("USER_ROUTE_PREFIX")
            .unwrap_or_else(|_| DEFAULT_USER_ROUTE_PREFIX.to_string());
        if !user_route_prefix.starts_with('/') {
            return Err(AppError::Configuration(format!(
                "USER_ROUTE_PREFIX must start with '/', got '{}'",
                user_route_prefix
            )));
        }
        let user_route_prefix = user_route_prefix.trim_end_matches('/').to_string();
        if user_route_prefix.is_empty() {
            return Err(AppError::Configuration(
                "USER_ROUTE_PREFIX cannot be '/', the UI owns the root path".to_string(),
            ));
        }

        let ui_enabled = match env::var("UI_ENABLED") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| AppError::Configuration(format!("UI_ENABLED '{}' is not a boolean", raw)))?,
            Err(_) => true,
        };

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(parse_origin)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            host,
            port,
            database_url,
            users_collection,
            user_route_prefix,
            ui_enabled,
            cors_allowed_origins,
        })
    }
}

/// An origin is `scheme://host[:port]`; wildcards and paths are refused
/// because the CORS layer would only reject them once workers start.
fn parse_origin(raw: &str) -> Result<String, AppError> {
    let invalid = |reason: &str| {
        AppError::Configuration(format!("CORS_ALLOWED_ORIGINS entry '{}' {}", raw, reason))
    };

    if raw == "*" {
        return Err(invalid("is a wildcard, list explicit origins"));
    }

    let uri = raw
        .parse::<Uri>()
        .map_err(|e| invalid(&format!("is not a URI: {}", e)))?;

    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(invalid("must be scheme://host[:port]"));
    }
    if uri.query().is_some() || !matches!(uri.path(), "" | "/") {
        return Err(invalid("must not carry a path or query"));
    }

    Ok(raw.trim_end_matches('/').to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
