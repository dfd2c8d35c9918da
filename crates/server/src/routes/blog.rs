//! HTTP edge of the blog endpoints: parse the body, run the operation, render.

use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};
use models::{Comment, LoginInput, Post, User};
use serde::de::DeserializeOwned;

use crate::errors::ApiError;
use crate::responses;
use crate::state::ServerState;

/// Bodies are parsed regardless of `Content-Type`; a parse failure is a 500
/// carrying the parser message.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn list_posts(State(state): State<ServerState>) -> Result<Response, ApiError> {
    let posts = state.blog.list_posts().await?;
    Ok(responses::json(StatusCode::OK, &posts))
}

pub async fn upsert_post(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let post: Post = parse_body(&body)?;
    let post = state.blog.upsert_post(post).await?;
    Ok(responses::json(StatusCode::OK, &post))
}

pub async fn register(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let user: User = parse_body(&body)?;
    let user = state.blog.register(user).await?;
    Ok(responses::json(StatusCode::OK, &user))
}

pub async fn login(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let input: LoginInput = parse_body(&body)?;
    let user = state.blog.login(input).await?;
    Ok(responses::json(StatusCode::OK, &user))
}

/// Renders `null` when the comment points at no post.
pub async fn add_comment(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let comment: Comment = parse_body(&body)?;
    let post = state.blog.add_comment(comment).await?;
    Ok(responses::json(StatusCode::OK, &post))
}

pub async fn update_user(State(state): State<ServerState>, body: Bytes) -> Result<Response, ApiError> {
    let user: User = parse_body(&body)?;
    let user = state.blog.update_user(user).await?;
    Ok(responses::json(StatusCode::OK, &user))
}
