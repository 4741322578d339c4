//! tabletop-server binary

use tabletop_server::utils::logger::init_logger;
use tabletop_server::{AppState, Config, build_app};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    init_logger(&config);

    tracing::info!("Starting tabletop-server (env: {})", config.environment);

    let state = AppState::new(&config)?;
    let app = build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("tabletop-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
