use refmaster_core::reference_import::{DEFAULT_CANCEL_CHECK_ROWS, DEFAULT_CHUNK_SIZE};
use refmaster_pipeline::ImportConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `300`). Large reference
    /// files take minutes to load.
    pub request_timeout_secs: u64,
    /// Records per insert/commit round (default: `2000`).
    pub import_chunk_size: usize,
    /// Rows parsed between cancellation checks (default: `500`).
    pub import_cancel_check_rows: usize,
    /// Maximum accepted upload body in bytes (default: 64 MiB).
    pub import_max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `300`                      |
    /// | `IMPORT_CHUNK_SIZE`        | `2000`                     |
    /// | `IMPORT_CANCEL_CHECK_ROWS` | `500`                      |
    /// | `IMPORT_MAX_UPLOAD_BYTES`  | `67108864`                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let import_chunk_size: usize = std::env::var("IMPORT_CHUNK_SIZE")
            .unwrap_or_else(|_| DEFAULT_CHUNK_SIZE.to_string())
            .parse()
            .expect("IMPORT_CHUNK_SIZE must be a valid usize");

        let import_cancel_check_rows: usize = std::env::var("IMPORT_CANCEL_CHECK_ROWS")
            .unwrap_or_else(|_| DEFAULT_CANCEL_CHECK_ROWS.to_string())
            .parse()
            .expect("IMPORT_CANCEL_CHECK_ROWS must be a valid usize");

        let import_max_upload_bytes: usize = std::env::var("IMPORT_MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (64 * 1024 * 1024).to_string())
            .parse()
            .expect("IMPORT_MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            import_chunk_size,
            import_cancel_check_rows,
            import_max_upload_bytes,
        }
    }

    /// Pipeline tuning derived from this configuration.
    pub fn import_config(&self) -> ImportConfig {
        ImportConfig::new(self.import_chunk_size, self.import_cancel_check_rows)
    }
}
