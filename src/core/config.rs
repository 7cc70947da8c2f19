use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub polling: PollingConfig,
}

/// Where the backend lives and how requests are sent
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash (e.g. "http://localhost:8000/api")
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

/// Credentials used to open a session at startup
#[derive(Clone)]
pub struct AuthConfig {
    pub token: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Fixed polling intervals for run and document status checks
#[derive(Debug, Clone)]
pub struct PollingConfig {
    pub run_interval: Duration,
    pub document_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            api: ApiConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            polling: PollingConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8000/api";
    const DEFAULT_TIMEOUT_SECS: u64 = 30;

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("RAGDESK_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let timeout_secs = parse_var("RAGDESK_HTTP_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS)?;

        Ok(Self::new(base_url, Duration::from_secs(timeout_secs)))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            timeout,
            user_agent: format!("ragdesk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use values if they are non-empty
        let token = env::var("RAGDESK_TOKEN").ok().filter(|s| !s.is_empty());
        let username = env::var("RAGDESK_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("RAGDESK_PASSWORD").ok().filter(|s| !s.is_empty());

        Ok(Self {
            token,
            username,
            password,
        })
    }

    /// Returns (username, password) when both are configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl PollingConfig {
    const DEFAULT_RUN_INTERVAL_MS: u64 = 2000;
    const DEFAULT_DOCUMENT_INTERVAL_MS: u64 = 5000;

    pub fn from_env() -> Result<Self, String> {
        let run_interval_ms = parse_var("RUN_POLL_INTERVAL_MS", Self::DEFAULT_RUN_INTERVAL_MS)?;
        let document_interval_ms = parse_var(
            "DOCUMENT_POLL_INTERVAL_MS",
            Self::DEFAULT_DOCUMENT_INTERVAL_MS,
        )?;

        if run_interval_ms == 0 || document_interval_ms == 0 {
            return Err("Poll intervals must be greater than zero".to_string());
        }

        Ok(Self {
            run_interval: Duration::from_millis(run_interval_ms),
            document_interval: Duration::from_millis(document_interval_ms),
        })
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            run_interval: Duration::from_millis(Self::DEFAULT_RUN_INTERVAL_MS),
            document_interval: Duration::from_millis(Self::DEFAULT_DOCUMENT_INTERVAL_MS),
        }
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64, String> {
    parse_value(name, env::var(name).ok().as_deref(), default)
}

fn parse_value(name: &str, raw: Option<&str>, default: u64) -> Result<u64, String> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse::<u64>()
            .map_err(|_| format!("{} must be a valid number", name)),
        None => Ok(default),
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
