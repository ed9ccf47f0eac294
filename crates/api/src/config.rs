/// Project inbox that receives every suggestion.
pub const DEFAULT_SUGGESTIONS_TO: &str = "ehiomhentreasureruth@gmail.com";

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Recipient of suggestion emails.
    pub suggestions_to: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `8000`                   |
    /// | `CORS_ORIGINS`         | `*`                      |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `SUGGESTIONS_TO`       | the project inbox        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let suggestions_to = std::env::var("SUGGESTIONS_TO")
            .unwrap_or_else(|_| DEFAULT_SUGGESTIONS_TO.into());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            suggestions_to,
        }
    }

    /// Whether CORS is open to every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
