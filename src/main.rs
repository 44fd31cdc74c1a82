use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use cinematch_api::{
    catalog::Catalog,
    config::Config,
    routes::create_router,
    services::{providers::tmdb::TmdbProvider, recommender::RecommendationModel},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the catalog and build the similarity model once; both are
    // immutable for the life of the process.
    let catalog = Catalog::load(&config.catalog_path)?;
    let model = RecommendationModel::build(catalog, config.max_features);

    let posters = Arc::new(TmdbProvider::new(
        config.tmdb_api_key.clone(),
        config.tmdb_api_url.clone(),
        config.image_base_url.clone(),
    ));

    let state = AppState::new(model, posters);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
