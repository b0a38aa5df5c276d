//! One-shot seeding binary: creates the schema if needed and loads the
//! sample professions and questions. Safe to re-run.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quiz_api::config::Config;
use quiz_api::db::{create_pool, init_schema};
use quiz_api::seed;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.rust_log)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = create_pool(&config.database_url).await?;
    init_schema(&pool).await?;

    let summary = seed::run(&pool).await?;
    info!(
        "Seeding complete: {} professions, {} new questions",
        summary.professions, summary.questions_inserted
    );

    info!("Questions per profession:");
    for (name, count) in seed::questions_per_profession(&pool).await? {
        info!("  {name}: {count}");
    }

    Ok(())
}
