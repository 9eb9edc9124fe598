//src/main.rs

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use techno_logic_backend::{
    app::build_app,
    config::{AppState, Config},
    db::PgReportsRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let config = Config::from_env()?;
    let pool = config.connect_pool().await?;

    if config.run_migrations {
        sqlx::migrate!().run(&pool).await?;
        tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
    }

    let app_state = AppState::new(Arc::new(PgReportsRepository::new(pool)));
    let app = build_app(app_state);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("🚀 Servidor escutando em {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
