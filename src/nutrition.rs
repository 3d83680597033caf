use crate::schema::{ingredients, products, recipes};
use diesel::prelude::*;

/// Aggregate nutrition values for one recipe.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NutritionTotals {
    pub calories: i32,
    pub carbs: i32,
    pub proteins: i32,
}

/// Sums per-product contributions, starting from zero.
fn sum_rows(rows: &[(i32, i32, i32)]) -> NutritionTotals {
    let mut totals = NutritionTotals::default();
    for &(calories, carbs, proteins) in rows {
        totals.calories += calories;
        totals.carbs += carbs;
        totals.proteins += proteins;
    }
    totals
}

/// Sums the nutrition of every product linked to the recipe and writes the
/// totals back to the recipe row. Two store round trips; the caller's
/// transaction keeps them atomic with the ingredient inserts.
pub fn aggregate_and_store(
    conn: &mut PgConnection,
    recipe_id: i32,
) -> QueryResult<NutritionTotals> {
    let rows: Vec<(i32, i32, i32)> = ingredients::table
        .inner_join(products::table)
        .filter(ingredients::recipe_id.eq(recipe_id))
        .select((products::calories, products::carbs, products::proteins))
        .load(conn)?;

    let totals = sum_rows(&rows);

    diesel::update(recipes::table.find(recipe_id))
        .set((
            recipes::calories.eq(totals.calories),
            recipes::carbs.eq(totals.carbs),
            recipes::proteins.eq(totals.proteins),
        ))
        .execute(conn)?;

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_linked_products_sums_to_zero() {
        assert_eq!(sum_rows(&[]), NutritionTotals::default());
    }

    #[test]
    fn totals_are_component_wise_sums() {
        let rows = [(359, 0, 1), (52, 14, 0), (89, 23, 1)];
        let totals = sum_rows(&rows);
        assert_eq!(totals.calories, 500);
        assert_eq!(totals.carbs, 37);
        assert_eq!(totals.proteins, 2);
    }

    #[test]
    fn single_product_passes_through() {
        let totals = sum_rows(&[(100, 20, 5)]);
        assert_eq!(
            totals,
            NutritionTotals {
                calories: 100,
                carbs: 20,
                proteins: 5,
            }
        );
    }
}
