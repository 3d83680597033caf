use crate::models::{NewIngredient, RecipeProduct};
use crate::schema::ingredients;
use diesel::prelude::*;

/// Inserts one association row per supplied product, carrying the per-recipe
/// quantity. The first failed insert aborts; the caller's transaction
/// discards anything already written.
pub fn link_products(
    conn: &mut PgConnection,
    recipe_id: i32,
    products: &[RecipeProduct],
) -> QueryResult<()> {
    for product in products {
        let link = NewIngredient {
            recipe_id,
            product_id: product.id,
            value: product.value,
        };
        diesel::insert_into(ingredients::table)
            .values(&link)
            .execute(conn)?;
    }
    Ok(())
}
