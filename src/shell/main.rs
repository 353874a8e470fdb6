use tracing_subscriber::{EnvFilter, fmt};

use activities::shell::bootstrap::{build_store, seed_store};
use activities::shell::config::Config;
use activities::shell::http::router;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let store = build_store(&config).await?;
    seed_store(store.clone(), config.strict_seed).await?;

    let app = router(AppState::new(store), &config.static_dir);

    tracing::info!("listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
