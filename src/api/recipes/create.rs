use crate::api::ErrorResponse;
use crate::db::DbPool;
use crate::error::RecipeError;
use crate::get_conn;
use crate::ingredients::link_products;
use crate::models::{NewRecipe, RecipeProduct};
use crate::nutrition;
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub category: i32,
    pub time: i32,
    pub image: String,
    pub instructions: String,
    pub products: Vec<RecipeProduct>,
}

/// Structural completeness check applied before anything touches the store.
fn validate(recipe: &CreateRecipeRequest) -> bool {
    if recipe.title.len() < 4 {
        return false;
    }
    if recipe.category == 0 {
        return false;
    }
    if recipe.time == 0 {
        return false;
    }
    if recipe.image.len() < 4 {
        return false;
    }
    if recipe.instructions.len() < 10 {
        return false;
    }
    if recipe.products.len() < 2 {
        return false;
    }
    true
}

#[utoipa::path(
    post,
    path = "/create",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 200, description = "Recipe created", body = String),
        (status = 400, description = "Validation or store failure", body = ErrorResponse),
        (status = 403, description = "Authentication required", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    if !validate(&request) {
        return RecipeError::Validation.into_response();
    }

    let mut pooled = get_conn!(pool);
    let conn = &mut *pooled;

    // The recipe row, its ingredient links and the nutrition totals become
    // visible together or not at all.
    let result: Result<i32, RecipeError> = conn.transaction(|conn| {
        let new_recipe = NewRecipe {
            title: &request.title,
            category: request.category,
            time: request.time,
            image: &request.image,
            instructions: &request.instructions,
        };

        let recipe_id: i32 = diesel::insert_into(recipes::table)
            .values(&new_recipe)
            .returning(recipes::id)
            .get_result(conn)?;

        link_products(conn, recipe_id, &request.products)?;

        nutrition::aggregate_and_store(conn, recipe_id)?;

        Ok(recipe_id)
    });

    match result {
        Ok(recipe_id) => {
            tracing::info!(recipe_id, "recipe created");
            (StatusCode::OK, Json("Recipe was created".to_string())).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i32, value: f64) -> RecipeProduct {
        RecipeProduct {
            id,
            title: String::new(),
            value,
            size: String::new(),
            calories: 0,
            carbs: 0,
            proteins: 0,
        }
    }

    fn candidate() -> CreateRecipeRequest {
        CreateRecipeRequest {
            title: "Soup".to_string(),
            category: 1,
            time: 20,
            image: "img1".to_string(),
            instructions: "Boil the water".to_string(),
            products: vec![product(1, 2.0), product(2, 1.0)],
        }
    }

    #[test]
    fn accepts_a_complete_candidate() {
        assert!(validate(&candidate()));
    }

    #[test]
    fn rejects_short_title() {
        let mut recipe = candidate();
        recipe.title = "So".to_string();
        assert!(!validate(&recipe));
    }

    #[test]
    fn rejects_zero_category() {
        let mut recipe = candidate();
        recipe.category = 0;
        assert!(!validate(&recipe));
    }

    #[test]
    fn rejects_zero_time() {
        let mut recipe = candidate();
        recipe.time = 0;
        assert!(!validate(&recipe));
    }

    #[test]
    fn rejects_short_image() {
        let mut recipe = candidate();
        recipe.image = "im".to_string();
        assert!(!validate(&recipe));
    }

    #[test]
    fn rejects_short_instructions() {
        let mut recipe = candidate();
        recipe.instructions = "Stir".to_string();
        assert!(!validate(&recipe));
    }

    #[test]
    fn rejects_fewer_than_two_products() {
        let mut recipe = candidate();
        recipe.products = vec![product(1, 2.0)];
        assert!(!validate(&recipe));
    }

    #[test]
    fn boundary_lengths_are_accepted() {
        let mut recipe = candidate();
        recipe.title = "Stew".to_string();
        recipe.image = "x.pg".to_string();
        recipe.instructions = "Mix and stir".to_string();
        assert!(validate(&recipe));
    }
}
