use axum_extra::extract::cookie::SameSite;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cookie: CookieConfig,
}

/// Settings for the session identifier cookie.
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub same_site: String,
}

impl CookieConfig {
    pub fn parse_same_site(&self) -> SameSite {
        match self.same_site.to_ascii_lowercase().as_str() {
            "strict" => SameSite::Strict,
            "none" => SameSite::None,
            _ => SameSite::Lax,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load environment variables from a local .env file if present
        dotenvy::dotenv().ok();

        // Determine environment (defaults to dev)
        let env = env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string());

        // Build configuration from config/*.toml + ENV overrides
        let config_builder = config::Config::builder()
            // Load base config from TOML file
            .add_source(
                config::File::with_name(&format!("config/{}", env)).required(false), // Allow missing config file, fallback to ENV
            )
            // Override with environment variables (prefix: APP_)
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let settings = config_builder.build()?;

        // Extract values with fallbacks to ENV or defaults
        let host = settings
            .get_string("server.host")
            .or_else(|_| env::var("HOST"))
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = settings
            .get_string("server.port")
            .or_else(|_| env::var("PORT"))
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8081);

        let cookie_name = settings
            .get_string("session.cookie_name")
            .or_else(|_| env::var("SESSION_COOKIE_NAME"))
            .unwrap_or_else(|_| "user_id".to_string());

        let cookie_secure = settings
            .get_bool("session.cookie_secure")
            .ok()
            .or_else(|| {
                env::var("SESSION_COOKIE_SECURE")
                    .ok()
                    .and_then(|v| v.parse::<bool>().ok())
            })
            .unwrap_or(env == "prod");

        let same_site = settings
            .get_string("session.same_site")
            .or_else(|_| env::var("SESSION_SAME_SITE"))
            .unwrap_or_else(|_| "lax".to_string());

        Ok(Config {
            host,
            port,
            cookie: CookieConfig {
                name: cookie_name,
                secure: cookie_secure,
                same_site,
            },
        })
    }
}
