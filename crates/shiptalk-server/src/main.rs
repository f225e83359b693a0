mod configuration;
mod error;
mod routes;
mod state;

use configuration::Settings;
use shiptalk::handler::RequestHandler;
use shiptalk::providers::openai::OpenAiProvider;
use shiptalk::registry::Registry;
use state::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::new()?;

    // Any registry fault stops the process before it binds
    let library = settings.reference.load()?;
    let registry = Arc::new(Registry::register_all(&library)?);

    let timeout = settings.provider.timeout();
    let provider = OpenAiProvider::new(settings.provider.into_config())?;
    info!(model = provider.model(), "Using OpenAI completions");

    let handler = RequestHandler::new(registry, Arc::new(provider)).with_timeout(timeout);
    let app = routes::configure(AppState::new(handler));

    let listener = tokio::net::TcpListener::bind(settings.server.socket_addr()?).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
