//! Reset the configured database to the sample bakeries and baked goods.

use bakery_api::{connect, ensure_tables, seed_sample_data, AppConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bakery_api=info")),
        )
        .init();

    let pool = connect(&config.database_url, config.max_connections).await?;
    ensure_tables(&pool).await?;
    seed_sample_data(&pool).await?;
    pool.close().await;
    Ok(())
}
