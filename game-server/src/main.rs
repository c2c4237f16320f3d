use std::sync::Arc;
use std::time::Duration;
use tokio::signal;
use tracing::info;

use game_core::Dictionary;
use game_persistence::{connection::connect_and_migrate, repositories::StatsRepository};
use game_server::{
    config::Config, create_routes, session_manager::SessionManager, stats_service::StatsService,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Hardword server...");

    let config = Config::new();

    // Load the word list
    let dictionary = match Dictionary::from_file(&config.words_file, config.word_length) {
        Ok(dictionary) => Arc::new(dictionary),
        Err(e) => {
            tracing::error!("Failed to load word list '{}': {}", config.words_file, e);
            tracing::error!("The server requires a word list to function.");
            tracing::error!(
                "Set WORDS_FILE to a newline-separated list of {}-letter words with no repeated letters.",
                config.word_length
            );
            std::process::exit(1);
        }
    };

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };
    let stats_service = Arc::new(StatsService::new(StatsRepository::new(db)));

    let session_manager = Arc::new(SessionManager::new(dictionary, config.max_guesses));

    let routes = create_routes(session_manager.clone(), stats_service.clone());

    // Start cleanup task
    let cleanup_session_manager = session_manager.clone();
    let session_ttl = Duration::from_secs(config.session_timeout_minutes * 60);
    let cleanup_interval = Duration::from_secs(config.cleanup_interval_seconds);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            cleanup_session_manager.cleanup_expired_sessions(session_ttl);
        }
    });

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
