//! Cocktail Models
//!
//! Typed shapes for the records returned by the remote API.

use std::collections::HashMap;

use serde::Deserialize;

/// The API exposes ingredients as 15 numbered field pairs
pub const MAX_INGREDIENTS: usize = 15;

/// Full cocktail record (search, random, lookup)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawCocktail")]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub alcoholic: Option<String>,
    pub glass: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail: Option<String>,
    /// Positional slots 1..=15, `None` where the API sent null or blank
    ingredient_slots: Vec<Option<String>>,
    measure_slots: Vec<Option<String>>,
}

/// One rendered ingredient line
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    pub measure: Option<String>,
}

/// Category record from `list.php?c=list`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    #[serde(rename = "strCategory")]
    pub name: String,
}

/// Reduced cocktail record from `filter.php`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CocktailSummary {
    #[serde(rename = "idDrink")]
    pub id: String,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
}

impl Cocktail {
    /// Ingredients in position order, stopping at the first missing one
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.ingredient_slots
            .iter()
            .zip(self.measure_slots.iter())
            .map_while(|(name, measure)| {
                name.as_ref().map(|name| Ingredient {
                    name: name.clone(),
                    measure: measure.clone(),
                })
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct RawCocktail {
    #[serde(rename = "idDrink")]
    id: String,
    #[serde(rename = "strDrink")]
    name: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    alcoholic: Option<String>,
    #[serde(rename = "strGlass", default)]
    glass: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strDrinkThumb", default)]
    thumbnail: Option<String>,
    /// strIngredientN / strMeasureN and everything else we don't model
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

impl From<RawCocktail> for Cocktail {
    fn from(raw: RawCocktail) -> Self {
        let slot = |prefix: &str, i: usize| {
            raw.rest
                .get(&format!("{}{}", prefix, i))
                .and_then(serde_json::Value::as_str)
                .and_then(non_blank)
        };
        let ingredient_slots = (1..=MAX_INGREDIENTS).map(|i| slot("strIngredient", i)).collect();
        let measure_slots = (1..=MAX_INGREDIENTS).map(|i| slot("strMeasure", i)).collect();

        Self {
            id: raw.id,
            name: raw.name,
            category: raw.category.as_deref().and_then(non_blank),
            alcoholic: raw.alcoholic.as_deref().and_then(non_blank),
            glass: raw.glass.as_deref().and_then(non_blank),
            instructions: raw.instructions.as_deref().and_then(non_blank),
            thumbnail: raw.thumbnail.as_deref().and_then(non_blank),
            ingredient_slots,
            measure_slots,
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ingredients_stop_at_first_gap() {
        let cocktail: Cocktail = serde_json::from_value(json!({
            "idDrink": "1",
            "strDrink": "Gap Test",
            "strIngredient1": "Gin",
            "strMeasure1": " 2 oz ",
            "strIngredient2": "Tonic",
            "strMeasure2": null,
            "strIngredient3": null,
            "strIngredient4": "Lime",
            "strMeasure4": "1 wedge"
        }))
        .unwrap();

        let ingredients = cocktail.ingredients();
        assert_eq!(ingredients.len(), 2);
        assert_eq!(ingredients[0], Ingredient { name: "Gin".into(), measure: Some("2 oz".into()) });
        assert_eq!(ingredients[1], Ingredient { name: "Tonic".into(), measure: None });
    }

    #[test]
    fn test_blank_fields_are_absent() {
        let cocktail: Cocktail = serde_json::from_value(json!({
            "idDrink": "2",
            "strDrink": "Blank",
            "strCategory": "",
            "strGlass": "   ",
            "strIngredient1": ""
        }))
        .unwrap();

        assert_eq!(cocktail.category, None);
        assert_eq!(cocktail.glass, None);
        assert!(cocktail.ingredients().is_empty());
    }

    #[test]
    fn test_all_fifteen_ingredients() {
        let mut record = serde_json::Map::new();
        record.insert("idDrink".into(), json!("3"));
        record.insert("strDrink".into(), json!("Kitchen Sink"));
        for i in 1..=MAX_INGREDIENTS {
            record.insert(format!("strIngredient{}", i), json!(format!("Thing {}", i)));
        }
        let cocktail: Cocktail = serde_json::from_value(serde_json::Value::Object(record)).unwrap();
        assert_eq!(cocktail.ingredients().len(), MAX_INGREDIENTS);
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result = serde_json::from_value::<Cocktail>(json!({ "strDrink": "No Id" }));
        assert!(result.is_err());
    }
}
