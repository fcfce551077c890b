//! Server configuration for the PatientTrack HTTP API.
//!
//! Configuration comes from command line flags, with environment variable
//! fallbacks, or is built programmatically.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PTRACK_SERVER_PORT` | 8000 | Server port |
//! | `PTRACK_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `PTRACK_LOG_LEVEL` | info | Log level |
//! | `PTRACK_DATA_FILE` | patients.json | Patient data file |
//! | `PTRACK_CREATE_DATA_FILE` | false | Create an empty data file if missing |
//! | `PTRACK_PRETTY_JSON` | true | Pretty-print the data file |
//! | `PTRACK_MAX_BODY_SIZE` | 1048576 | Max request body (bytes) |
//! | `PTRACK_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `PTRACK_ENABLE_CORS` | true | Enable CORS |
//! | `PTRACK_CORS_ORIGINS` | * | Allowed origins |
//! | `PTRACK_CORS_METHODS` | GET,POST,PUT,DELETE,OPTIONS | Allowed methods |
//! | `PTRACK_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//!
//! # Example
//!
//! ```rust
//! use patienttrack_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     data_file: "/var/lib/ptrack/patients.json".into(),
//!     ..Default::default()
//! };
//! ```

use std::path::PathBuf;

use clap::{ArgAction, Parser};

const DEFAULT_CORS_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";
const DEFAULT_CORS_HEADERS: &str = "Content-Type,Accept";

/// Server configuration for the PatientTrack HTTP API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "ptrack")]
#[command(about = "PatientTrack patient record API server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "PTRACK_SERVER_PORT", default_value = "8000")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "PTRACK_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "PTRACK_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Path of the patient data file.
    #[arg(long, env = "PTRACK_DATA_FILE", default_value = "patients.json")]
    pub data_file: PathBuf,

    /// Create an empty data file if none exists.
    #[arg(long, env = "PTRACK_CREATE_DATA_FILE", default_value = "false")]
    pub create_data_file: bool,

    /// Pretty-print the data file on save.
    #[arg(long, env = "PTRACK_PRETTY_JSON", default_value = "true", action = ArgAction::Set)]
    pub pretty_json: bool,

    /// Maximum request body size in bytes.
    #[arg(long, env = "PTRACK_MAX_BODY_SIZE", default_value = "1048576")]
    pub max_body_size: usize,

    /// Request timeout in seconds.
    #[arg(long, env = "PTRACK_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "PTRACK_ENABLE_CORS", default_value = "true", action = ArgAction::Set)]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "PTRACK_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "PTRACK_CORS_METHODS", default_value = DEFAULT_CORS_METHODS)]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "PTRACK_CORS_HEADERS", default_value = DEFAULT_CORS_HEADERS)]
    pub cors_headers: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            data_file: PathBuf::from("patients.json"),
            create_data_file: false,
            pretty_json: true,
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: DEFAULT_CORS_METHODS.to_string(),
            cors_headers: DEFAULT_CORS_HEADERS.to_string(),
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse().unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.max_body_size == 0 {
            errors.push("Max body size cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if self.data_file.as_os_str().is_empty() {
            errors.push("Data file path cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0 and disables CORS.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            ..Default::default()
        }
    }
}
