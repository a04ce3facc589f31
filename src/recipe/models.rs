use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use toml::Value;

use crate::value::{parse_quantity, ParseError};

/// One serving option of a recipe: "serves 4 people", "makes 12 pieces".
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServingOption {
    pub count: f64,

    /// Serving kind id, resolved to a noun form through the metadata
    /// catalog ("person", "piece").
    pub unit: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ingredient {
    /// Ingredient id; doubles as the display name when the catalog has no
    /// entry for it.
    pub name: String,

    /// Amount, as written in the recipe file. Numbers are taken as-is;
    /// strings go through the quantity parser ("1/2", "1 1/2", "0.75").
    pub count: Value,

    #[serde(default)]
    pub unit: Option<String>,

    // Dynamic properties catch-all
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Ingredient {
    /// Numeric amount, whatever TOML form it was written in.
    pub fn quantity(&self) -> Result<f64, ParseError> {
        match &self.count {
            Value::Integer(n) => Ok(*n as f64),
            Value::Float(f) => Ok(*f),
            Value::String(s) => parse_quantity(s),
            other => Err(ParseError::NotANumber(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngredientGroup {
    pub name: String,

    // TOML uses [[group.ingredient]] array syntax
    #[serde(rename = "ingredient", default)]
    pub ingredients: Vec<Ingredient>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Recipe {
    pub name: String,

    #[serde(rename = "serves", default)]
    pub serves: Vec<ServingOption>,

    #[serde(rename = "group", default)]
    pub groups: Vec<IngredientGroup>,
}

impl Recipe {
    pub fn ingredient_count(&self) -> usize {
        self.groups.iter().map(|g| g.ingredients.len()).sum()
    }
}
