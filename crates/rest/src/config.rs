//! Server configuration for the advocate directory API.
//!
//! Configuration comes from command line arguments, with environment
//! variables as fallbacks, or is built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ADVOCATES_SERVER_PORT` | 8080 | Server port |
//! | `ADVOCATES_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ADVOCATES_LOG_LEVEL` | info | Log level |
//! | `ADVOCATES_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ADVOCATES_ENABLE_CORS` | true | Enable CORS |
//! | `ADVOCATES_CORS_ORIGINS` | * | Allowed origins |
//! | `ADVOCATES_DATABASE_URL` | advocates.db | SQLite file path or `:memory:` |
//! | `ADVOCATES_MAX_CONNECTIONS` | 10 | Connection pool size |
//! | `ADVOCATES_DEFAULT_PAGE_SIZE` | 10 | Page size when `pageSize` is absent |
//!
//! # Example
//!
//! ```rust
//! use advocate_rest::ServerConfig;
//!
//! let config = ServerConfig {
//!     port: 3000,
//!     database_url: Some(":memory:".to_string()),
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.database_path(), ":memory:");
//! ```

use clap::Parser;

/// Database used when no URL is configured.
pub const DEFAULT_DATABASE_PATH: &str = "advocates.db";

/// Server configuration for the advocate directory API.
#[derive(Debug, Clone, Parser)]
#[command(name = "advocates")]
#[command(about = "Advocate directory search server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ADVOCATES_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ADVOCATES_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ADVOCATES_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ADVOCATES_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ADVOCATES_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ADVOCATES_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// SQLite database path, or `:memory:`.
    #[arg(long, env = "ADVOCATES_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "ADVOCATES_MAX_CONNECTIONS", default_value = "10")]
    pub max_connections: u32,

    /// Page size used when a request does not name one.
    #[arg(long, env = "ADVOCATES_DEFAULT_PAGE_SIZE", default_value = "10")]
    pub default_page_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            database_url: None,
            max_connections: 10,
            default_page_size: 10,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// Falls back to the defaults when the arguments cannot be parsed.
    pub fn from_env() -> Self {
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the configured database path, or [`DEFAULT_DATABASE_PATH`].
    pub fn database_path(&self) -> &str {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_DATABASE_PATH)
    }

    /// Returns true when the database lives in memory only.
    pub fn is_memory_database(&self) -> bool {
        self.database_path() == ":memory:"
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.max_connections == 0 {
            errors.push("Max connections cannot be 0".to_string());
        }

        if self.default_page_size == 0 {
            errors.push("Default page size cannot be 0".to_string());
        }

        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            errors.push(format!("Unknown log level '{}'", self.log_level));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// Uses an ephemeral port, an in-memory database and no CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0,
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5,
            enable_cors: false,
            cors_origins: "*".to_string(),
            database_url: Some(":memory:".to_string()),
            max_connections: 4,
            default_page_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.default_page_size, 10);
        assert_eq!(config.max_connections, 10);
        assert!(config.enable_cors);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            port: 3000,
            host: "0.0.0.0".to_string(),
            ..Default::default()
        };
        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_database_path_defaults_to_file() {
        let config = ServerConfig::default();
        assert_eq!(config.database_path(), DEFAULT_DATABASE_PATH);
        assert!(!config.is_memory_database());

        let config = ServerConfig {
            database_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.database_path(), DEFAULT_DATABASE_PATH);
    }

    #[test]
    fn test_validate_valid() {
        assert!(ServerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_every_error() {
        let config = ServerConfig {
            port: 0,
            max_connections: 0,
            default_page_size: 0,
            log_level: "loud".to_string(),
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.iter().any(|e| e.contains("Port")));
        assert!(errors.iter().any(|e| e.contains("loud")));
    }

    #[test]
    fn test_for_testing() {
        let config = ServerConfig::for_testing();
        assert_eq!(config.port, 0);
        assert!(!config.enable_cors);
        assert!(config.is_memory_database());
    }
}
