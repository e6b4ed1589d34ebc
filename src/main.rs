use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use boolflix_backend::api::{self, AppState};
use boolflix_backend::config::AppConfig;
use boolflix_backend::external::{MediaCatalog, TmdbClient};
use boolflix_backend::services::{GenreDirectory, MediaService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    // Initialize external API client
    let catalog: Arc<dyn MediaCatalog> = Arc::new(TmdbClient::new(&config.tmdb)?);

    // 先加载类型目录再开始接受请求，失败时以空目录继续运行
    let genres = Arc::new(GenreDirectory::new());
    genres.load(catalog.as_ref()).await;

    let app = api::router(AppState {
        media_service: MediaService::new(catalog, genres),
    });

    let addr = config.listen_addr()?;
    tracing::info!("🚀 Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
