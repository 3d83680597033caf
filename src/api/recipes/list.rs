use super::{load_recipe_products, RecipeResponse};
use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::RecipeError;
use crate::get_conn;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/getAll",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes with their products", body = [RecipeResponse]),
        (status = 400, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_all_recipes(State(pool): State<Arc<DbPool>>) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    // No explicit ordering; rows come back in the store's natural order.
    let rows: Vec<Recipe> = match recipes::table.select(Recipe::as_select()).load(&mut conn) {
        Ok(rows) => rows,
        Err(e) => return RecipeError::from(e).into_response(),
    };

    let mut responses = Vec::with_capacity(rows.len());
    for recipe in rows {
        let products = match load_recipe_products(&mut conn, recipe.id) {
            Ok(products) => products,
            Err(e) => return RecipeError::from(e).into_response(),
        };
        responses.push(RecipeResponse::from_row(recipe, products));
    }

    (StatusCode::OK, Json(responses)).into_response()
}
