use chrono::{DateTime, Utc};
use cuisine_core::types::nutrients_from_value;
use cuisine_core::{NewRecipe, Recipe};
use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub cuisine: String,
    pub rating: f64,
    pub total_time: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    pub description: String,
    pub serves: i32,
    pub ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub nutrients: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RecipeRow> for Recipe {
    fn from(row: RecipeRow) -> Self {
        Recipe {
            id: row.id.to_string(),
            title: row.title,
            cuisine: row.cuisine,
            rating: row.rating,
            total_time: non_negative(row.total_time),
            prep_time: non_negative(row.prep_time),
            cook_time: non_negative(row.cook_time),
            description: row.description,
            serves: non_negative(row.serves),
            ingredients: serde_json::from_value(row.ingredients).unwrap_or_default(),
            instructions: serde_json::from_value(row.instructions).unwrap_or_default(),
            nutrients: nutrients_from_value(&row.nutrients),
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipeRow {
    pub title: String,
    pub cuisine: String,
    pub rating: f64,
    pub total_time: i32,
    pub prep_time: i32,
    pub cook_time: i32,
    pub description: String,
    pub serves: i32,
    pub ingredients: serde_json::Value,
    pub instructions: serde_json::Value,
    pub nutrients: serde_json::Value,
}

impl From<&NewRecipe> for NewRecipeRow {
    fn from(recipe: &NewRecipe) -> Self {
        NewRecipeRow {
            title: recipe.title.clone(),
            cuisine: recipe.cuisine.clone(),
            rating: recipe.rating,
            total_time: column_int(recipe.total_time),
            prep_time: column_int(recipe.prep_time),
            cook_time: column_int(recipe.cook_time),
            description: recipe.description.clone(),
            serves: column_int(recipe.serves),
            ingredients: serde_json::to_value(&recipe.ingredients).unwrap_or_default(),
            instructions: serde_json::to_value(&recipe.instructions).unwrap_or_default(),
            nutrients: serde_json::to_value(&recipe.nutrients).unwrap_or_default(),
        }
    }
}

// Columns carry CHECK (>= 0); clamp anyway so a bad row can't wrap around
fn non_negative(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}

pub(crate) fn column_int(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuisine_core::seed::sample_recipes;
    use cuisine_core::{Ingredient, Instruction};
    use serde_json::json;

    #[test]
    fn test_new_row_stores_structured_json() {
        let seed = &sample_recipes()[0];
        let row = NewRecipeRow::from(seed);

        assert_eq!(row.title, "Spaghetti Carbonara");
        assert_eq!(row.total_time, 30);
        assert_eq!(row.ingredients[0], json!({"name": "Spaghetti", "amount": "400g"}));
        assert_eq!(
            row.instructions[0],
            json!({"step": 1, "instruction": "Cook spaghetti in boiling salted water"})
        );
        assert_eq!(row.nutrients["calories"], json!("450"));
    }

    #[test]
    fn test_row_converts_to_recipe() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let row = RecipeRow {
            id,
            title: "Miso Soup".to_string(),
            cuisine: "Japanese".to_string(),
            rating: 4.2,
            total_time: 15,
            prep_time: 5,
            cook_time: 10,
            description: "Light broth".to_string(),
            serves: 2,
            ingredients: json!(["Tofu", {"name": "Miso", "amount": "2 tbsp"}]),
            instructions: json!(["Heat dashi", {"step": 2, "instruction": "Stir in miso"}]),
            nutrients: json!({"calories": 80}),
            created_at: now,
            updated_at: now,
        };

        let recipe = Recipe::from(row);
        assert_eq!(recipe.id, id.to_string());
        assert_eq!(recipe.ingredients[0], Ingredient::Name("Tofu".to_string()));
        assert_eq!(recipe.ingredients[1].amount(), Some("2 tbsp"));
        assert_eq!(recipe.instructions[0], Instruction::Text("Heat dashi".to_string()));
        assert_eq!(recipe.nutrients.get("calories").map(String::as_str), Some("80"));
        assert_eq!(recipe.created_at, Some(now));
    }

    #[test]
    fn test_malformed_json_columns_become_empty() {
        let now = Utc::now();
        let row = RecipeRow {
            id: Uuid::new_v4(),
            title: "Odd".to_string(),
            cuisine: "Fusion".to_string(),
            rating: 3.0,
            total_time: -5,
            prep_time: 0,
            cook_time: 0,
            description: String::new(),
            serves: 1,
            ingredients: json!({"not": "a list"}),
            instructions: json!(42),
            nutrients: json!([]),
            created_at: now,
            updated_at: now,
        };

        let recipe = Recipe::from(row);
        assert_eq!(recipe.total_time, 0);
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.nutrients.is_empty());
    }
}
