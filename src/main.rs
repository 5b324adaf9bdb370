//! GreatRace gateway entry point.
//!
//! Resolves configuration, wires the upstream client, session store, and
//! CORS policy into the router, and serves HTTP. Startup failures are fatal;
//! the process exits without attempting recovery.

use greatrace::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let racing_client = startup::build_racing_client(&config).expect("Failed to build iRacing client");
    let session = startup::session_layer(&config);
    let cors = startup::cors_layer(&config);

    let mut router = router::routes()
        .with_state(AppState::from(racing_client))
        .layer(session)
        .layer(cors);

    if config.environment.is_production() {
        router = router.fallback_service(startup::spa_fallback(&config));
    }

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind listen port");

    tracing::info!("Server running on port {}", config.port);

    axum::serve(listener, router).await.expect("Server error");
}
