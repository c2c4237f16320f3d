use std::sync::Arc;

use uuid::Uuid;
use warp::Filter;
use warp::http::StatusCode;
use warp::hyper::body::Bytes;

use game_types::{GuessRequest, NewGameRequest, SessionError};

use crate::session_manager::SessionManager;
use crate::stats_service::StatsService;

pub mod config;
pub mod session_manager;
pub mod stats_service;

pub fn create_routes(
    session_manager: Arc<SessionManager>,
    stats_service: Arc<StatsService>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    // Clone for filters
    let session_manager_filter = warp::any().map({
        let session_manager = session_manager.clone();
        move || session_manager.clone()
    });

    let stats_service_filter = warp::any().map({
        let stats_service = stats_service.clone();
        move || stats_service.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK".to_string(), StatusCode::OK));

    // New session; the body is optional and may carry a player id for
    // statistics tracking
    let new_game = warp::path!("api" / "new-game")
        .and(warp::post())
        .and(warp::body::bytes())
        .and(session_manager_filter.clone())
        .and_then(handle_new_game);

    // Guess submission
    let check_guess = warp::path!("api" / "check-guess")
        .and(warp::post())
        .and(warp::body::json())
        .and(session_manager_filter.clone())
        .and(stats_service_filter.clone())
        .and_then(handle_check_guess);

    // Persisted per-player statistics
    let get_stats = warp::path!("api" / "stats" / Uuid)
        .and(warp::get())
        .and(stats_service_filter.clone())
        .and_then(handle_get_stats);

    let reset_stats = warp::path!("api" / "stats" / Uuid / "reset")
        .and(warp::post())
        .and(stats_service_filter.clone())
        .and_then(handle_reset_stats);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(new_game)
        .or(check_guess)
        .or(get_stats)
        .or(reset_stats)
        .with(cors)
        .with(warp::log("hardword"))
}

async fn handle_new_game(
    body: Bytes,
    session_manager: Arc<SessionManager>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // An empty body means an anonymous session
    let request: NewGameRequest = if body.is_empty() {
        NewGameRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(_) => {
                return Ok(warp::reply::with_status(
                    warp::reply::json(&serde_json::json!({
                        "error": "Invalid request body"
                    })),
                    StatusCode::BAD_REQUEST,
                ));
            }
        }
    };

    match session_manager.create_session(request.player_id) {
        Ok(response) => Ok(warp::reply::with_status(
            warp::reply::json(&response),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to create session: {}", err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to create session"
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_check_guess(
    request: GuessRequest,
    session_manager: Arc<SessionManager>,
    stats_service: Arc<StatsService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match session_manager.submit_guess(request.session_id, &request.guess) {
        Ok(reply) => {
            // A session finishes at most once, so this records at most
            // one outcome per session
            if let (Some(outcome), Some(player_id)) = (reply.terminal_outcome, reply.owner) {
                if let Err(err) = stats_service.record_outcome(player_id, outcome).await {
                    tracing::error!(
                        "Failed to record outcome for player {}: {}",
                        player_id,
                        err
                    );
                }
            }

            Ok(warp::reply::with_status(
                warp::reply::json(&reply.response),
                StatusCode::OK,
            ))
        }
        Err(err @ SessionError::NotFound { .. }) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": err.to_string()
            })),
            StatusCode::NOT_FOUND,
        )),
        // Guessing against a finished session is client desync, not a
        // bad guess
        Err(err @ SessionError::Completed { .. }) => Ok(warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "error": err.to_string()
            })),
            StatusCode::CONFLICT,
        )),
    }
}

async fn handle_get_stats(
    player_id: Uuid,
    stats_service: Arc<StatsService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match stats_service.get_stats(player_id).await {
        Ok(stats) => Ok(warp::reply::with_status(
            warp::reply::json(&stats),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to fetch stats for player {}: {}", player_id, err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to fetch statistics"
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}

async fn handle_reset_stats(
    player_id: Uuid,
    stats_service: Arc<StatsService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match stats_service.reset_stats(player_id).await {
        Ok(stats) => Ok(warp::reply::with_status(
            warp::reply::json(&stats),
            StatusCode::OK,
        )),
        Err(err) => {
            tracing::error!("Failed to reset stats for player {}: {}", player_id, err);
            Ok(warp::reply::with_status(
                warp::reply::json(&serde_json::json!({
                    "error": "Failed to reset statistics"
                })),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
