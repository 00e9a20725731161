use sea_orm::Database;
use tracing::info;

use kino_catalog::config::CatalogConfig;
use kino_catalog::router::build_router;
use kino_catalog::state::AppState;
use kino_core::config::Config;
use kino_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing("info,sqlx=warn");

    let config = CatalogConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let router = build_router(AppState { db });
    let http_addr = format!("0.0.0.0:{}", config.catalog_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("catalog service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
