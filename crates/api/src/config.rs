use std::time::Duration;

use rollcall_core::matching::MatchParams;
use rollcall_pipeline::PipelineConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted multipart body in bytes (default: 20 MiB).
    pub max_upload_bytes: usize,
    /// Matching parameters, remote timeout and output quality.
    pub pipeline: PipelineConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `20971520`                 |
    /// | `MATCH_THRESHOLD`      | `85`                       |
    /// | `MAX_FACES`            | `100`                      |
    /// | `MATCH_TIMEOUT_SECS`   | `10`                       |
    /// | `JPEG_QUALITY`         | `90`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (20 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let threshold: f32 = std::env::var("MATCH_THRESHOLD")
            .unwrap_or_else(|_| "85".into())
            .parse()
            .expect("MATCH_THRESHOLD must be a number");
        assert!(
            (0.0..=100.0).contains(&threshold),
            "MATCH_THRESHOLD must be between 0 and 100"
        );

        let max_faces: i32 = std::env::var("MAX_FACES")
            .unwrap_or_else(|_| "100".into())
            .parse()
            .expect("MAX_FACES must be a valid i32");

        let match_timeout_secs: u64 = std::env::var("MATCH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("MATCH_TIMEOUT_SECS must be a valid u64");

        let jpeg_quality: u8 = std::env::var("JPEG_QUALITY")
            .unwrap_or_else(|_| "90".into())
            .parse()
            .expect("JPEG_QUALITY must be a valid u8");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            pipeline: PipelineConfig {
                match_params: MatchParams {
                    threshold,
                    max_faces,
                },
                match_timeout: Duration::from_secs(match_timeout_secs),
                jpeg_quality,
            },
        }
    }
}
