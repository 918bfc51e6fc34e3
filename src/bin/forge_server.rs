//! Macro builder REST API server
//!
//! Serves the visual builder frontend: the command catalog, script
//! generation, and the run/pick collaborators.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server
//! cargo run --bin forge_server --features server
//!
//! # Generate a script
//! curl -X POST http://localhost:5000/api/generate \
//!   -H "Content-Type: application/json" \
//!   -d '{"macros": [{"hotkey": "F1", "actions": [{"command_id": "Sleep", "params": {"Delay": 1000}}]}]}'
//!
//! curl http://localhost:5000/api/commands
//! curl http://localhost:5000/api/health
//! ```

use ahk_forge::api::{create_router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ahk_forge=info,tower_http=debug".to_string()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // No pointer-capture collaborator is wired in by default; the
    // pick-position endpoint reports unavailability until one is configured.
    let app = create_router(AppState::default());

    let port = std::env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .unwrap_or(5000);

    let addr = format!("0.0.0.0:{}", port);
    info!("Starting macro builder API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
