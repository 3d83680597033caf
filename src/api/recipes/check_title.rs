use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/checkTitle/{title}",
    tag = "recipes",
    params(
        ("title" = String, Path, description = "Candidate recipe title")
    ),
    responses(
        (status = 200, description = "No recipe uses this title", body = String),
        (status = 400, description = "Title taken or store failure", body = ErrorResponse)
    )
)]
pub async fn check_title(
    State(pool): State<Arc<DbPool>>,
    Path(title): Path<String>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let count: i64 = match recipes::table
        .filter(recipes::title.eq(&title))
        .count()
        .get_result(&mut conn)
    {
        Ok(count) => count,
        Err(e) => {
            tracing::error!("title lookup failed: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Bad request".to_string(),
                }),
            )
                .into_response();
        }
    };

    if count > 0 {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Title exists".to_string(),
            }),
        )
            .into_response();
    }

    (StatusCode::OK, Json("Title is valid".to_string())).into_response()
}
