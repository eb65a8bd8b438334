use flavor_graph::{
    api::{create_router, AppState},
    catalog::{load_catalog, JsonFileSource},
    config::Config,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flavor_graph=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let source = JsonFileSource::new(&config.catalog_path);
    let recipes = load_catalog(&source).await?;

    let state = AppState::new(recipes, config.engine_settings());
    let app = create_router(state);

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
