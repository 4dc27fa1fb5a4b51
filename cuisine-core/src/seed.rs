//! Fixed sample recipes inserted when a store starts out empty.

use crate::types::{Ingredient, Instruction, NewRecipe};
use std::collections::BTreeMap;

struct SeedRecipe {
    title: &'static str,
    cuisine: &'static str,
    rating: f64,
    total_time: u32,
    prep_time: u32,
    cook_time: u32,
    description: &'static str,
    serves: u32,
    ingredients: &'static [(&'static str, &'static str)], // (name, amount)
    instructions: &'static [&'static str],
    nutrients: &'static [(&'static str, &'static str)],
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        title: "Spaghetti Carbonara",
        cuisine: "Italian",
        rating: 4.8,
        total_time: 30,
        prep_time: 10,
        cook_time: 20,
        description: "Classic Italian pasta with creamy egg sauce and crispy bacon",
        serves: 4,
        ingredients: &[
            ("Spaghetti", "400g"),
            ("Eggs", "4"),
            ("Bacon", "200g"),
            ("Parmesan", "100g"),
            ("Salt", "to taste"),
        ],
        instructions: &[
            "Cook spaghetti in boiling salted water",
            "Fry bacon until crispy",
            "Mix eggs with grated parmesan",
            "Toss hot pasta with bacon and egg mixture",
        ],
        nutrients: &[
            ("calories", "450"),
            ("protein", "18g"),
            ("carbs", "45g"),
            ("fat", "20g"),
        ],
    },
    SeedRecipe {
        title: "Chicken Tikka Masala",
        cuisine: "Indian",
        rating: 4.7,
        total_time: 45,
        prep_time: 20,
        cook_time: 25,
        description:
            "Tender chicken in a rich and creamy tomato-based sauce with aromatic spices",
        serves: 4,
        ingredients: &[
            ("Chicken Breast", "600g"),
            ("Yogurt", "200ml"),
            ("Tomato Sauce", "400ml"),
            ("Onions", "2"),
            ("Garlic", "4 cloves"),
            ("Ginger", "1 inch"),
        ],
        instructions: &[
            "Marinate chicken in yogurt and spices",
            "Cook chicken until golden",
            "Prepare sauce with tomatoes and cream",
            "Combine chicken with sauce and simmer",
        ],
        nutrients: &[
            ("calories", "380"),
            ("protein", "35g"),
            ("carbs", "15g"),
            ("fat", "18g"),
        ],
    },
    SeedRecipe {
        title: "Pad Thai",
        cuisine: "Thai",
        rating: 4.6,
        total_time: 25,
        prep_time: 10,
        cook_time: 15,
        description: "Stir-fried noodles with shrimp, tofu, and peanuts in a tangy sauce",
        serves: 2,
        ingredients: &[
            ("Rice Noodles", "300g"),
            ("Shrimp", "200g"),
            ("Eggs", "2"),
            ("Peanuts", "50g"),
            ("Lime", "1"),
            ("Tamarind Paste", "2 tbsp"),
        ],
        instructions: &[
            "Soak rice noodles",
            "Heat wok and cook shrimp",
            "Add noodles and vegetables",
            "Toss with tamarind sauce",
        ],
        nutrients: &[
            ("calories", "420"),
            ("protein", "22g"),
            ("carbs", "52g"),
            ("fat", "14g"),
        ],
    },
    SeedRecipe {
        title: "Beef Tacos",
        cuisine: "Mexican",
        rating: 4.5,
        total_time: 20,
        prep_time: 5,
        cook_time: 15,
        description: "Seasoned ground beef in warm tortillas with fresh toppings",
        serves: 4,
        ingredients: &[
            ("Ground Beef", "500g"),
            ("Tortillas", "8"),
            ("Lettuce", "1 head"),
            ("Tomato", "2"),
            ("Cheese", "200g"),
            ("Salsa", "1 cup"),
        ],
        instructions: &[
            "Brown ground beef with spices",
            "Warm tortillas",
            "Chop vegetables",
            "Assemble tacos with toppings",
        ],
        nutrients: &[
            ("calories", "380"),
            ("protein", "25g"),
            ("carbs", "35g"),
            ("fat", "16g"),
        ],
    },
    SeedRecipe {
        title: "Caesar Salad",
        cuisine: "Italian",
        rating: 4.4,
        total_time: 15,
        prep_time: 15,
        cook_time: 0,
        description: "Crisp romaine lettuce with creamy Caesar dressing and parmesan cheese",
        serves: 2,
        ingredients: &[
            ("Romaine Lettuce", "1 head"),
            ("Parmesan", "100g"),
            ("Croutons", "100g"),
            ("Caesar Dressing", "150ml"),
            ("Lemon", "1"),
        ],
        instructions: &[
            "Wash and chop romaine",
            "Prepare Caesar dressing",
            "Toss salad with dressing",
            "Top with croutons and parmesan",
        ],
        nutrients: &[
            ("calories", "320"),
            ("protein", "12g"),
            ("carbs", "18g"),
            ("fat", "22g"),
        ],
    },
];

/// The five sample recipes, in insertion order.
pub fn sample_recipes() -> Vec<NewRecipe> {
    SAMPLE_RECIPES.iter().map(SeedRecipe::to_new_recipe).collect()
}

impl SeedRecipe {
    fn to_new_recipe(&self) -> NewRecipe {
        let ingredients = self
            .ingredients
            .iter()
            .map(|(name, amount)| Ingredient::Measured {
                name: name.to_string(),
                amount: amount.to_string(),
            })
            .collect();

        let instructions = self
            .instructions
            .iter()
            .zip(1..)
            .map(|(text, step)| Instruction::Step {
                step,
                instruction: text.to_string(),
            })
            .collect();

        let nutrients: BTreeMap<String, String> = self
            .nutrients
            .iter()
            .map(|(label, value)| (label.to_string(), value.to_string()))
            .collect();

        NewRecipe {
            title: self.title.to_string(),
            cuisine: self.cuisine.to_string(),
            rating: self.rating,
            total_time: self.total_time,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            description: self.description.to_string(),
            serves: self.serves,
            ingredients,
            instructions,
            nutrients,
        }
    }
}
