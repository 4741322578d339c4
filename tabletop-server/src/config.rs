//! Server configuration

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 8087;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend service base URL (env: SUPABASE_URL)
    pub supabase_url: String,
    /// Backend service anonymous key, sent as `apikey` and bearer token
    /// (env: SUPABASE_ANON_KEY)
    pub supabase_anon_key: String,
    /// HTTP port (env: PORT)
    pub port: u16,
    /// Environment label: development | staging | production
    pub environment: String,
    /// Emit JSON log lines (env: LOG_JSON)
    pub log_json: bool,
    /// Directory for daily rolling log files (env: LOG_DIR)
    pub log_dir: Option<String>,
}

impl Config {
    /// Configuration pointing at the given backend, everything else default
    pub fn new(supabase_url: impl Into<String>, supabase_anon_key: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
            port: DEFAULT_PORT,
            environment: "development".into(),
            log_json: false,
            log_dir: None,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxError> {
        let required = |name: &str| -> Result<String, BoxError> {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| format!("{name} must be set").into())
        };

        Ok(Self {
            supabase_url: required("SUPABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            log_json: lookup("LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
        })
    }
}
