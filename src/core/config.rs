use std::{
    env,
    time::Duration,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// MIME types the prediction service accepts.
pub const ALLOWED_FILE_TYPES: &[&str] = &["text/plain"];

/// Immutable request configuration, resolved once at startup and handed to
/// the client and the validator. Nothing reads the environment after this.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the prediction service, always slash-terminated.
    pub base_url: String,
    pub timeout: Duration,
    /// Upload ceiling in bytes. A file exactly at the limit is accepted.
    pub max_file_size: u64,
    pub allowed_file_types: &'static [&'static str],
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            allowed_file_types: ALLOWED_FILE_TYPES,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = match env::var("CHRONOTEXT_API_URL") {
            Ok(url) if !url.trim().is_empty() => normalize_base_url(url),
            _ => {
                eprintln!("CHRONOTEXT_API_URL not set. Using {}", DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let timeout_ms = env_u64("CHRONOTEXT_API_TIMEOUT_MS", DEFAULT_TIMEOUT_MS);
        let max_file_size = env_u64("CHRONOTEXT_MAX_FILE_SIZE", DEFAULT_MAX_FILE_SIZE);

        Self {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
            max_file_size,
            allowed_file_types: ALLOWED_FILE_TYPES,
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn max_file_size_mb(&self) -> u64 {
        self.max_file_size / (1024 * 1024)
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            eprintln!("Ignoring unparsable {}={:?}", key, value);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_always_ends_with_slash() {
        assert_eq!(normalize_base_url("http://api.test".to_string()), "http://api.test/");
        assert_eq!(normalize_base_url("http://api.test/".to_string()), "http://api.test/");
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let config = ApiConfig::default();
        assert_eq!(config.endpoint("base/"), "http://localhost:8000/base/");
        assert_eq!(config.endpoint("binary/"), "http://localhost:8000/binary/");
    }

    #[test]
    fn defaults_match_service_contract() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_file_size, 5 * 1024 * 1024);
        assert_eq!(config.max_file_size_mb(), 5);
        assert_eq!(config.allowed_file_types, &["text/plain"]);
    }
}
