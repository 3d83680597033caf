use super::{load_recipe_products, RecipeResponse};
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::RecipeError;
use crate::get_conn;
use crate::models::Recipe;
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
    path = "/getById/{recipe_id}",
    tag = "recipes",
    params(
        ("recipe_id" = i32, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe with its products", body = RecipeResponse),
        (status = 400, description = "Store failure", body = ErrorResponse),
        (status = 404, description = "No recipe with this ID", body = ErrorResponse)
    )
)]
pub async fn get_recipe_by_id(
    State(pool): State<Arc<DbPool>>,
    Path(recipe_id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipe: Recipe = match recipes::table
        .find(recipe_id)
        .select(Recipe::as_select())
        .first(&mut conn)
    {
        Ok(recipe) => recipe,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => return RecipeError::from(e).into_response(),
    };

    let products = match load_recipe_products(&mut conn, recipe.id) {
        Ok(products) => products,
        Err(e) => return RecipeError::from(e).into_response(),
    };

    (StatusCode::OK, Json(RecipeResponse::from_row(recipe, products))).into_response()
}
