use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use dotahub::config::Config;
use dotahub::server::{self, AppState};
use dotahub::site::video::{refresh_thumbnails, FfmpegFrameExtractor};
use dotahub::site::Site;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dotahub=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!(
        "Starting dotahub (default language: {})",
        config.default_language.name()
    );

    let mut site = Site::load(Path::new(&config.site_file))?;

    let extractor = FfmpegFrameExtractor::default();
    let updated = refresh_thumbnails(&mut site, Path::new(&config.media_root), &extractor);
    info!("✓ {} short video thumbnails ready", updated);

    let state = Arc::new(AppState {
        site,
        default_language: config.default_language,
    });
    let app = server::router(state);

    let addr = config.bind_address();
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
