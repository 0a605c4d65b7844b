use anyhow::Context as _;
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use qrvault_migration::Migrator;
use qrvault_server::config::VaultConfig;
use qrvault_server::router::build_router;
use qrvault_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    qrvault_core::tracing::init_tracing();

    let config = VaultConfig::from_env()?;

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("failed to apply migrations")?;
        info!("migrations applied");
    }

    let router = build_router(AppState::new(db));
    let addr = format!("0.0.0.0:{}", config.vault_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("vault service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
