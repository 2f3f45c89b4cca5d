//! TagWarden policy service.
//!
//! - Policy CRUD: GET/POST/DELETE /policies
//! - Evaluation pass: POST /apply
//! - Ops: /healthz, /metrics

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use tagwarden_service::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("tagwarden.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .service
        .listen
        .parse()
        .expect("service.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("state init failed");
    let app = router::build_router(state);

    tracing::info!(%listen, "tagwarden-service starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
