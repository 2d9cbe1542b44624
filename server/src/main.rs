#![recursion_limit = "256"]

mod backend;
mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port = config::port_from_env().expect("invalid PORT");
    let backend_config = match config::BackendConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "backend not configured");
            std::process::exit(1);
        }
    };
    let backend = backend::supabase::SupabaseClient::new(&backend_config).expect("backend client init failed");
    tracing::info!(url = %backend_config.url, "backend client initialized");

    let state = state::AppState::new(Arc::new(backend));
    let app = routes::app(state).expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "envesti listening");
    axum::serve(listener, app).await.expect("server failed");
}
