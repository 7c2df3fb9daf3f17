use anyhow::{Context, Result};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Application configuration loaded from environment variables.
/// The OpenAI key is optional: without it the form still renders but
/// submissions are refused before any upstream call.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: optional_env("OPENAI_API_KEY"),
            openai_base_url: optional_env("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads an env var, treating unset and blank values the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_env_blank_is_none() {
        std::env::set_var("EQUIAID_TEST_BLANK_VAR", "   ");
        assert_eq!(optional_env("EQUIAID_TEST_BLANK_VAR"), None);
    }

    #[test]
    fn test_optional_env_trims_value() {
        std::env::set_var("EQUIAID_TEST_SET_VAR", " sk-test ");
        assert_eq!(
            optional_env("EQUIAID_TEST_SET_VAR"),
            Some("sk-test".to_string())
        );
    }

    #[test]
    fn test_optional_env_unset_is_none() {
        assert_eq!(optional_env("EQUIAID_TEST_DEFINITELY_UNSET"), None);
    }
}
