//! Calorie calculator — rough nutrition report for a recipe.
//!
//! Looks ingredients up in a small per-100g table. Names match
//! case-insensitively and partially ("boneless chicken thigh" finds
//! "chicken"). Ingredients with no match are listed with an estimate but
//! left out of the totals.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;

use super::base::{format_number, require_number, Tool};
use crate::error::ToolError;

/// Estimate shown for ingredients missing from the table.
const UNKNOWN_KCAL_PER_100G: f64 = 100.0;

/// kcal per 100 g.
const KCAL_PER_100G: &[(&str, f64)] = &[
    // Protein
    ("chicken", 165.0),
    ("chicken breast", 165.0),
    ("beef", 250.0),
    ("meat", 250.0),
    ("pork", 242.0),
    ("fish", 120.0),
    ("salmon", 208.0),
    ("tuna", 130.0),
    ("egg", 155.0),
    ("tofu", 76.0),
    ("ham", 145.0),
    // Carbohydrates
    ("rice", 130.0),
    ("pasta", 131.0),
    ("bread", 265.0),
    ("potato", 77.0),
    ("quinoa", 120.0),
    ("oats", 389.0),
    ("tortilla", 218.0),
    ("flour", 364.0),
    // Vegetables
    ("tomato", 18.0),
    ("onion", 40.0),
    ("garlic", 149.0),
    ("carrot", 41.0),
    ("broccoli", 34.0),
    ("spinach", 23.0),
    ("lettuce", 15.0),
    ("bell pepper", 31.0),
    ("mushroom", 22.0),
    ("zucchini", 17.0),
    ("eggplant", 25.0),
    // Dairy
    ("milk", 42.0),
    ("cheese", 402.0),
    ("cream", 340.0),
    ("yogurt", 59.0),
    ("butter", 717.0),
    // Fats
    ("oil", 884.0),
    ("olive oil", 884.0),
    ("mayonnaise", 680.0),
    // Legumes
    ("beans", 347.0),
    ("lentils", 116.0),
    ("chickpeas", 164.0),
    // Fruit
    ("apple", 52.0),
    ("banana", 89.0),
    ("orange", 47.0),
    ("lemon", 29.0),
    // Other
    ("sugar", 387.0),
    ("salt", 0.0),
    ("black pepper", 251.0),
    ("chocolate", 546.0),
];

#[derive(Debug, Deserialize)]
struct Ingredient {
    name: String,
    grams: f64,
}

/// Find the kcal/100g for an ingredient name.
///
/// Exact names win, then the longest table entry contained in the name,
/// then the first table entry that contains the name.
fn lookup(name: &str) -> Option<f64> {
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return None;
    }

    if let Some(&(_, kcal)) = KCAL_PER_100G.iter().find(|(key, _)| *key == name) {
        return Some(kcal);
    }

    KCAL_PER_100G
        .iter()
        .filter(|(key, _)| name.contains(key))
        .max_by_key(|(key, _)| key.len())
        .or_else(|| KCAL_PER_100G.iter().find(|(key, _)| key.contains(name.as_str())))
        .map(|&(_, kcal)| kcal)
}

/// Computes calories per ingredient, in total, and per serving.
pub struct CalorieCalculatorTool;

#[async_trait]
impl Tool for CalorieCalculatorTool {
    fn name(&self) -> &str {
        "calorie_calculator"
    }

    fn description(&self) -> &str {
        "Calculates the approximate calories of a recipe from its ingredients in grams. \
         ALWAYS use it after presenting a recipe."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "ingredients": {
                    "type": "array",
                    "description": "Ingredients with their quantities in grams",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Ingredient name" },
                            "grams": { "type": "number", "description": "Quantity in grams" }
                        },
                        "required": ["name", "grams"]
                    }
                },
                "servings": {
                    "type": "number",
                    "description": "Number of servings the recipe is split into"
                }
            },
            "required": ["ingredients", "servings"]
        })
    }

    async fn execute(&self, params: HashMap<String, Value>) -> Result<String, ToolError> {
        let ingredients: Vec<Ingredient> = params
            .get("ingredients")
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(|e| ToolError::InvalidArguments(format!("bad ingredient list: {e}")))?
            .unwrap_or_default();
        let servings = require_number(&params, "servings")?;

        let mut total = 0.0;
        let mut lines = Vec::with_capacity(ingredients.len());

        for ingredient in &ingredients {
            let name = ingredient.name.trim().to_lowercase();
            let grams = format_number(ingredient.grams);
            match lookup(&name) {
                Some(per_100g) => {
                    let kcal = ingredient.grams * per_100g / 100.0;
                    total += kcal;
                    lines.push(format!("  - {name}: {grams}g → {} kcal", kcal as i64));
                }
                None => {
                    let estimate = ingredient.grams * UNKNOWN_KCAL_PER_100G / 100.0;
                    lines.push(format!(
                        "  - {name}: {grams}g → ~{} kcal (estimated, not counted)",
                        estimate as i64
                    ));
                }
            }
        }

        let per_serving = if servings > 0.0 { total / servings } else { total };
        let rule = "=".repeat(40);

        Ok(format!(
            "NUTRITION REPORT\n{rule}\nPer ingredient:\n{}\n\n{rule}\n\
             Total calories: {} kcal\nServings: {}\nCalories per serving: {} kcal\n",
            lines.join("\n"),
            total as i64,
            format_number(servings),
            per_serving as i64
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(ingredients: Value, servings: Value) -> HashMap<String, Value> {
        HashMap::from([
            ("ingredients".to_string(), ingredients),
            ("servings".to_string(), servings),
        ])
    }

    #[test]
    fn test_lookup_matching() {
        assert_eq!(lookup("Chicken Breast"), Some(165.0));
        assert_eq!(lookup("extra virgin olive oil"), Some(884.0));
        assert_eq!(lookup("eggplant"), Some(25.0));
        assert_eq!(lookup("grated cheese"), Some(402.0));
        assert_eq!(lookup("lentil"), Some(116.0));
        assert_eq!(lookup("unobtainium"), None);
        assert_eq!(lookup("  "), None);
    }

    #[tokio::test]
    async fn test_report_totals() {
        let out = CalorieCalculatorTool
            .execute(params(
                json!([
                    {"name": "Chicken Breast", "grams": 500},
                    {"name": "pasta", "grams": 200}
                ]),
                json!(4),
            ))
            .await
            .unwrap();

        assert!(out.contains("  - chicken breast: 500g → 825 kcal"));
        assert!(out.contains("  - pasta: 200g → 262 kcal"));
        assert!(out.contains("Total calories: 1087 kcal"));
        assert!(out.contains("Servings: 4"));
        assert!(out.contains("Calories per serving: 271 kcal"));
    }

    #[tokio::test]
    async fn test_unknown_ingredient_not_counted() {
        let out = CalorieCalculatorTool
            .execute(params(
                json!([
                    {"name": "rice", "grams": 100},
                    {"name": "dragon fruit powder", "grams": 50}
                ]),
                json!(1),
            ))
            .await
            .unwrap();

        assert!(out.contains("dragon fruit powder: 50g → ~50 kcal (estimated, not counted)"));
        assert!(out.contains("Total calories: 130 kcal"));
    }

    #[tokio::test]
    async fn test_zero_servings_uses_total() {
        let out = CalorieCalculatorTool
            .execute(params(json!([{"name": "butter", "grams": 100}]), json!(0)))
            .await
            .unwrap();

        assert!(out.contains("Total calories: 717 kcal"));
        assert!(out.contains("Calories per serving: 717 kcal"));
    }

    #[tokio::test]
    async fn test_bad_ingredient_shape() {
        let err = CalorieCalculatorTool
            .execute(params(json!([{"name": "rice"}]), json!(2)))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }
}
