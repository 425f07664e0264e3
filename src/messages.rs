//! User-facing strings

pub const EMPTY_SEARCH: &str = "Please enter a cocktail name.";
pub const COCKTAIL_NOT_FOUND: &str = "No cocktail found. Try another name!";
pub const NO_CATEGORIES: &str = "No categories found.";
pub const NO_COCKTAILS_IN_CATEGORY: &str = "No cocktails found in this category.";
pub const NO_INSTRUCTIONS: &str = "No instructions available.";

pub const LOADING_RANDOM: &str = "Shaking up a random cocktail...";
pub const LOADING_CATEGORIES: &str = "Loading categories...";
pub const LOADING_DETAILS: &str = "Loading cocktail details...";

pub fn loading_search(name: &str) -> String {
    format!("Searching for \"{}\"...", name)
}

pub fn loading_category(category: &str) -> String {
    format!("Loading {} cocktails...", category)
}
