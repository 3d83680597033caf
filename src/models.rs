use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub category: i32,
    pub time: i32,
    pub image: String,
    pub instructions: String,
    pub calories: i32,
    pub carbs: i32,
    pub proteins: i32,
    pub created_at: DateTime<Utc>,
}

/// Nutrition totals are written by the aggregator after the ingredient rows
/// exist, so a new recipe row starts from the column defaults of zero.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub title: &'a str,
    pub category: i32,
    pub time: i32,
    pub image: &'a str,
    pub instructions: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient {
    pub recipe_id: i32,
    pub product_id: i32,
    pub value: f64,
}

/// Product as it travels on the wire: nested in recipe responses, and in
/// create request bodies, where only `id` and `value` are meaningful and the
/// remaining fields may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RecipeProduct {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    pub value: f64,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub calories: i32,
    #[serde(default)]
    pub carbs: i32,
    #[serde(default)]
    pub proteins: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_product_deserializes_from_minimal_body() {
        let product: RecipeProduct = serde_json::from_str(r#"{"id": 7, "value": 2.5}"#).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.value, 2.5);
        assert_eq!(product.title, "");
        assert_eq!(product.size, "");
        assert_eq!(product.calories, 0);
        assert_eq!(product.carbs, 0);
        assert_eq!(product.proteins, 0);
    }

    #[test]
    fn recipe_product_serializes_the_full_shape() {
        let product = RecipeProduct {
            id: 1,
            title: "Butter".to_string(),
            value: 50.0,
            size: "g".to_string(),
            calories: 359,
            carbs: 0,
            proteins: 0,
        };

        let json = serde_json::to_value(&product).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec!["id", "title", "value", "size", "calories", "carbs", "proteins"]
        );
    }
}
