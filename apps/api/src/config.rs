use anyhow::{Context, Result};

const DEFAULT_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "https://web-resume-editor.onrender.com",
];

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values are errors.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding the saved `resume.json`.
    pub data_dir: String,
    /// Origins allowed by CORS (credentials are allowed, so no wildcard).
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .map(|v| parse_origins(&v))
                .unwrap_or_else(|_| DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()),
        })
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
