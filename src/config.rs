//! Client configuration baked in at build time.
//!
//! WASM builds have no process environment, so values are captured with
//! `option_env!` when the crate is compiled and parsed through
//! [`ClientConfig::from_lookup`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown STOCKSIM_LOG_LEVEL: {0}")]
    LogLevel(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the raw session token.
    pub token_key: String,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl ClientConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// Optional:
    /// - `STOCKSIM_API_URL`: default `http://localhost:8080`
    /// - `STOCKSIM_TOKEN_KEY`: default `token`
    /// - `STOCKSIM_LOG_LEVEL`: `error`, `warn`, `info` (default), `debug` or `trace`
    ///
    /// Invalid values fall back to [`ClientConfig::default`].
    #[must_use]
    pub fn from_env() -> Self {
        let lookup = |var: &str| -> Option<String> {
            let raw = match var {
                "STOCKSIM_API_URL" => option_env!("STOCKSIM_API_URL"),
                "STOCKSIM_TOKEN_KEY" => option_env!("STOCKSIM_TOKEN_KEY"),
                "STOCKSIM_LOG_LEVEL" => option_env!("STOCKSIM_LOG_LEVEL"),
                _ => None,
            };
            raw.map(str::to_owned)
        };
        Self::from_lookup(lookup).unwrap_or_else(|e| {
            log::warn!("invalid client config, using defaults: {e}");
            Self::default()
        })
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown log level or a blank value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = non_empty(&lookup, "STOCKSIM_API_URL")?
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let token_key = non_empty(&lookup, "STOCKSIM_TOKEN_KEY")?.unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned());
        let log_level = parse_log_level(lookup("STOCKSIM_LOG_LEVEL").as_deref())?;

        Ok(Self { api_base_url, token_key, log_level })
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn non_empty<F>(lookup: &F, var: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
        Some(value) => Ok(Some(value.trim().to_owned())),
        None => Ok(None),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<log::Level, ConfigError> {
    match raw.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some("error") => Ok(log::Level::Error),
        Some("warn") => Ok(log::Level::Warn),
        Some("info") => Ok(log::Level::Info),
        Some("debug") => Ok(log::Level::Debug),
        Some("trace") => Ok(log::Level::Trace),
        Some(other) => Err(ConfigError::LogLevel(other.to_owned())),
    }
}
