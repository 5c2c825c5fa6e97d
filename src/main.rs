use anyhow::Context;
use api::{AppConfig, AppState, telemetry};
use parts_catalog::PartsCatalog;
use tracing::{Level, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env; real environment variables win.
    dotenvy::dotenv().ok();

    telemetry::init("info", Level::INFO).context("installing tracing subscriber")?;

    let config = AppConfig::from_env().context("reading configuration")?;

    let catalog = match &config.catalog_dir {
        Some(dir) => PartsCatalog::from_dir(dir)
            .with_context(|| format!("loading catalog from {}", dir.display()))?,
        None => PartsCatalog::builtin().context("loading builtin catalog")?,
    };

    info!(
        port = config.port,
        context_lifespan = config.context_lifespan,
        "starting pc-parts-webhook"
    );

    api::start(AppState::new(catalog, config)).await?;
    Ok(())
}
