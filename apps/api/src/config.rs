use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::courses::MAX_RESULTS_PER_SKILL;

const DEFAULT_YOUTUBE_API_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Application configuration loaded from environment variables.
/// Nothing is required; a missing YOUTUBE_API_KEY disables course lookups.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub youtube_api_key: Option<String>,
    pub youtube_api_url: String,
    pub course_results_limit: u32,
    pub course_timeout_secs: u64,
    pub skill_vocabulary_path: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            youtube_api_key: None,
            youtube_api_url: DEFAULT_YOUTUBE_API_URL.to_string(),
            course_results_limit: 6,
            course_timeout_secs: 10,
            skill_vocabulary_path: None,
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            youtube_api_key: optional_env("YOUTUBE_API_KEY"),
            youtube_api_url: optional_env("YOUTUBE_API_URL").unwrap_or(defaults.youtube_api_url),
            course_results_limit: parse_env("COURSE_RESULTS_LIMIT", defaults.course_results_limit)?,
            course_timeout_secs: parse_env("COURSE_TIMEOUT_SECS", defaults.course_timeout_secs)?,
            skill_vocabulary_path: optional_env("SKILL_VOCABULARY_PATH").map(PathBuf::from),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=MAX_RESULTS_PER_SKILL).contains(&self.course_results_limit) {
            bail!(
                "COURSE_RESULTS_LIMIT must be between 1 and {MAX_RESULTS_PER_SKILL}, got {}",
                self.course_results_limit
            );
        }
        if self.max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }
        Ok(())
    }
}

/// Reads a variable, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: FromStr>(key: &str, default: T) -> Result<T> {
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .ok()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
