use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use articles_platform::{app_state::AppState, config::Config, routes::create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "articles_platform=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let app_state = AppState::new(config.clone()).await?;

    let app = create_router(app_state).layer(CorsLayer::permissive());

    let addr = config.server_address();
    tracing::info!("articles platform listening on http://{}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
