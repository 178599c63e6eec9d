//! Minefield Engine - Main entry point.

use std::net::SocketAddr;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use minefield_engine::api;
use minefield_engine::infrastructure::config::EngineConfig;
use minefield_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minefield_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Minefield Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        board_size = config.board_defaults.size,
        bomb_count = config.board_defaults.bomb_count,
        "Default board configured"
    );

    // Games live in memory only; they are gone when the process exits.
    let app = std::sync::Arc::new(App::in_memory(config.board_defaults));

    let mut router = api::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = api::build_cors_layer(config.cors_allowed_origins.as_deref()) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config.bind_address().parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
