mod config;
mod db;
mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = config::Config::from_env().expect("invalid configuration");

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    if config.seed_demo_data {
        match services::seed::seed_if_empty(&pool).await {
            Ok(true) => tracing::info!("demo accounts use password {:?}", services::seed::DEMO_PASSWORD),
            Ok(false) => {}
            Err(e) => tracing::warn!(error = %e, "demo data not seeded"),
        }
    }

    let state = state::AppState::new(pool, config.cookie_secure);
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "learnhub listening");
    axum::serve(listener, app).await.expect("server failed");
}
