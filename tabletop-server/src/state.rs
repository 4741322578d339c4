//! Application state

use crate::config::Config;
use crate::supabase::SupabaseClient;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Immutable after startup; the client's connection pool does its own
/// synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Backend service client (REST + auth)
    pub supabase: SupabaseClient,
    /// Environment label, reported by `/health`
    pub environment: String,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, BoxError> {
        let supabase = SupabaseClient::new(&config.supabase_url, config.supabase_anon_key.clone())?;

        Ok(Self {
            supabase,
            environment: config.environment.clone(),
        })
    }
}
