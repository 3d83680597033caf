use super::AuthConfig;
use crate::api::ErrorResponse;
use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

/// Middleware gating recipe creation behind the configured bearer token.
/// Only mounted when the gate is enabled.
pub async fn require_auth(
    State(auth): State<AuthConfig>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !auth.is_authenticated(request.headers()) {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Forbidden".to_string(),
            }),
        )
            .into_response();
    }

    next.run(request).await
}
