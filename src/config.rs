use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum upload size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// CORS posture: `"*"` allows any origin without credentials, a
    /// comma-separated list allows exactly those origins with credentials,
    /// and an empty string disables the CORS layer
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,

    /// Directory holding the frontend bundle served at `/` and `/static`
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            allowed_origins: default_allowed_origins(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Parsed form of [`ServerConfig::allowed_origins`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Mirror any origin, without credentials
    Any,
    /// Allow exactly these origins, with credentials
    List(Vec<HeaderValue>),
    /// No CORS headers at all
    Disabled,
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("polymark").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix("POLYMARK").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;

        // Flag the development CORS posture on startup
        if config.allowed_origins.trim() == "*" {
            tracing::warn!(
                "CORS allows every origin; set POLYMARK__ALLOWED_ORIGINS before exposing this \
                 service beyond local development"
            );
        }

        Ok(config)
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max upload size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
    }

    /// Parse the configured CORS posture
    ///
    /// Origins that are not valid header values are skipped with a warning
    /// rather than failing startup.
    pub fn cors_origins(&self) -> CorsOrigins {
        let raw = self.allowed_origins.trim();
        if raw.is_empty() {
            return CorsOrigins::Disabled;
        }
        if raw == "*" {
            return CorsOrigins::Any;
        }

        let origins: Vec<HeaderValue> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin, "skipping unparsable CORS origin");
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            CorsOrigins::Disabled
        } else {
            CorsOrigins::List(origins)
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_mb() -> usize {
    10
}

fn default_allowed_origins() -> String {
    "*".to_string()
}

fn default_static_dir() -> String {
    "frontend".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
