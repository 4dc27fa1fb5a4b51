use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Cuisine value meaning "do not filter by cuisine".
pub const ALL_CUISINES: &str = "all";

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A single ingredient line. Datasets mix bare names and `{name, amount}` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Ingredient {
    Measured {
        name: String,
        #[serde(default)]
        amount: String,
    },
    Name(String),
}

impl Ingredient {
    pub fn name(&self) -> &str {
        match self {
            Ingredient::Measured { name, .. } => name,
            Ingredient::Name(name) => name,
        }
    }

    /// Amount for measured ingredients; `None` for bare names or a blank amount.
    pub fn amount(&self) -> Option<&str> {
        match self {
            Ingredient::Measured { amount, .. } if !amount.trim().is_empty() => {
                Some(amount.as_str())
            }
            _ => None,
        }
    }
}

/// A single cooking step, either numbered or plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Instruction {
    Step {
        #[serde(default)]
        step: u32,
        instruction: String,
    },
    Text(String),
}

impl Instruction {
    pub fn text(&self) -> &str {
        match self {
            Instruction::Step { instruction, .. } => instruction,
            Instruction::Text(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    /// Opaque identifier: dataset position for the in-memory store, UUID text for Postgres.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub cuisine: String,
    pub rating: f64,
    /// Minutes. This is the field time filters apply to.
    #[serde(default)]
    pub total_time: u32,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub serves: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
    #[serde(default, deserialize_with = "deserialize_nutrients")]
    pub nutrients: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Rating as shown in listings, e.g. `4.8`.
    pub fn display_rating(&self) -> String {
        format!("{:.1}", self.rating)
    }

    /// Nutrient rows with camelCase labels split into words (`totalFat` -> `total Fat`).
    pub fn nutrient_rows(&self) -> Vec<(String, &str)> {
        self.nutrients
            .iter()
            .map(|(label, value)| (pretty_label(label), value.as_str()))
            .collect()
    }
}

/// Recipe fields supplied when inserting; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewRecipe {
    pub title: String,
    pub cuisine: String,
    pub rating: f64,
    pub total_time: u32,
    pub prep_time: u32,
    pub cook_time: u32,
    pub description: String,
    pub serves: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<Instruction>,
    pub nutrients: BTreeMap<String, String>,
}

impl NewRecipe {
    pub fn into_recipe(self, id: String) -> Recipe {
        Recipe {
            id,
            title: self.title,
            cuisine: self.cuisine,
            rating: self.rating,
            total_time: self.total_time,
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            description: self.description,
            serves: self.serves,
            ingredients: self.ingredients,
            instructions: self.instructions,
            nutrients: self.nutrients,
            created_at: None,
            updated_at: None,
        }
    }
}

/// User-selected criteria plus the pagination cursor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterSpec {
    /// Case-insensitive substring matched against title or description.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact cuisine label, or `"all"`.
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Inclusive lower bound on rating. Zero is a real (always true) bound.
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Inclusive upper bound on total time in minutes.
    #[serde(default)]
    pub max_time: Option<u32>,
    /// 1-based page index.
    #[serde(default)]
    pub page: Option<u32>,
    /// Page size.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FilterSpec {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_max_time(mut self, max_time: u32) -> Self {
        self.max_time = Some(max_time);
        self
    }

    pub fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QueryResult {
    pub data: Vec<Recipe>,
    /// Total matches before pagination.
    pub count: u64,
    pub page: u32,
    pub total_pages: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResult {
    pub fn failed(page: u32, message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            count: 0,
            page,
            total_pages: 0,
            error: Some(message.into()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Flatten a JSON nutrients object into display strings.
///
/// Strings are kept as-is, numbers and booleans are rendered, nulls and nested
/// values are dropped. Anything other than an object yields an empty map.
pub fn nutrients_from_value(value: &serde_json::Value) -> BTreeMap<String, String> {
    let Some(object) = value.as_object() else {
        return BTreeMap::new();
    };

    object
        .iter()
        .filter_map(|(label, value)| {
            let display = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((label.clone(), display))
        })
        .collect()
}

fn deserialize_nutrients<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(nutrients_from_value(&value))
}

fn pretty_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    for c in label.chars() {
        if c.is_ascii_uppercase() && !out.is_empty() {
            out.push(' ');
        }
        out.push(c);
    }
    out.trim().to_string()
}
