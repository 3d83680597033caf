pub mod check_title;
pub mod create;
pub mod get;
pub mod list;

use crate::auth::{require_auth, AuthConfig};
use crate::models::{Recipe, RecipeProduct};
use crate::schema::{ingredients, products};
use crate::AppState;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Returns the recipe router. Paths match what the legacy front-end consumes.
/// The create route picks up the auth gate only when a token is configured.
pub fn router(auth: &AuthConfig) -> Router<AppState> {
    let mut create_route = Router::new().route("/create", post(create::create_recipe));
    if auth.enabled() {
        create_route =
            create_route.layer(middleware::from_fn_with_state(auth.clone(), require_auth));
    }

    Router::new()
        .merge(create_route)
        .route("/getAll", get(list::get_all_recipes))
        .route("/getById/{recipe_id}", get(get::get_recipe_by_id))
        .route("/checkTitle/{title}", get(check_title::check_title))
}

/// Full recipe as served to the front-end, with its products nested.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub category: i32,
    pub time: i32,
    pub image: String,
    pub instructions: String,
    pub calories: i32,
    pub carbs: i32,
    pub proteins: i32,
    pub products: Vec<RecipeProduct>,
}

impl RecipeResponse {
    pub fn from_row(recipe: Recipe, products: Vec<RecipeProduct>) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            category: recipe.category,
            time: recipe.time,
            image: recipe.image,
            instructions: recipe.instructions,
            calories: recipe.calories,
            carbs: recipe.carbs,
            proteins: recipe.proteins,
            products,
        }
    }
}

/// One row of the ingredients-to-products join.
#[derive(Queryable)]
struct JoinedProduct {
    id: i32,
    title: String,
    value: f64,
    calories: i32,
    proteins: i32,
    carbs: i32,
    size: String,
}

/// Loads the products linked to a recipe, carrying each link's quantity in
/// place of the product's own unit value.
pub(crate) fn load_recipe_products(
    conn: &mut PgConnection,
    recipe_id: i32,
) -> QueryResult<Vec<RecipeProduct>> {
    let rows: Vec<JoinedProduct> = ingredients::table
        .inner_join(products::table)
        .filter(ingredients::recipe_id.eq(recipe_id))
        .select((
            products::id,
            products::title,
            ingredients::value,
            products::calories,
            products::proteins,
            products::carbs,
            products::size,
        ))
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| RecipeProduct {
            id: row.id,
            title: row.title,
            value: row.value,
            size: row.size,
            calories: row.calories,
            carbs: row.carbs,
            proteins: row.proteins,
        })
        .collect())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::get_all_recipes,
        get::get_recipe_by_id,
        check_title::check_title,
    ),
    components(schemas(create::CreateRecipeRequest, RecipeResponse))
)]
pub struct ApiDoc;
