use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use student_registry::modules::students::adapters::outbound::roster_in_memory::InMemoryStudentRoster;
use student_registry::shell::config::Config;
use student_registry::shell::http::router;
use student_registry::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env().context("reading configuration")?;
    let state = AppState::new(Arc::new(InMemoryStudentRoster::new()));
    let app = router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("student registry listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
