use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::errors::handle_panic;
use crate::responses::{not_found, preflight};
use crate::state::ServerState;

pub mod blog;

/// Request bodies larger than this are rejected with 413. Posts carry their whole comment
/// thread, so the framework's 2 MB default is too small.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

/// Build the full application router.
///
/// Each mutating path answers `OPTIONS` itself; any other method on a known
/// path, and any unknown path, gets the plain 404.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/posts",
            get(blog::list_posts).post(blog::upsert_post).options(preflight).fallback(not_found),
        )
        .route("/register", post(blog::register).options(preflight).fallback(not_found))
        .route("/login", post(blog::login).options(preflight).fallback(not_found))
        .route("/post/comments", post(blog::add_comment).options(preflight).fallback(not_found))
        .route("/updateUser", post(blog::update_user).options(preflight).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status and latency on response
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
