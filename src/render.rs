//! Markup Rendering
//!
//! Pure functions from records and region state to HTML strings. Every
//! interpolated value is escaped, so remote data can't inject markup.

use crate::messages;
use crate::models::{Category, Cocktail, CocktailSummary};
use crate::state::{Region, RegionState};

/// Attribute carrying the category name on category cards
pub const CATEGORY_ATTR: &str = "data-category";
/// Attribute carrying the drink id on grid cards
pub const DRINK_ID_ATTR: &str = "data-drink-id";

const HIDE_ON_ERROR: &str = "this.style.display='none'";

pub fn render_loading(message: &str) -> String {
    format!(r#"<p class="status loading">{}</p>"#, escape_html(message))
}

pub fn render_error(message: &str) -> String {
    format!(r#"<p class="status error">{}</p>"#, escape_html(message))
}

fn render_empty(message: &str) -> String {
    format!(r#"<p class="status empty">{}</p>"#, escape_html(message))
}

pub fn render_cocktail_detail(cocktail: Option<&Cocktail>) -> String {
    let Some(cocktail) = cocktail else {
        return render_empty(messages::COCKTAIL_NOT_FOUND);
    };

    let name = escape_html(&cocktail.name);
    let mut html = String::from(r#"<article class="cocktail-detail">"#);
    html.push_str(&format!(r#"<h2 class="cocktail-name">{}</h2>"#, name));

    if let Some(thumb) = &cocktail.thumbnail {
        html.push_str(&format!(
            r#"<img class="cocktail-thumb" src="{}" alt="{}" onerror="{}" />"#,
            escape_html(thumb),
            name,
            HIDE_ON_ERROR
        ));
    }

    for (label, value) in [
        ("Category", &cocktail.category),
        ("Type", &cocktail.alcoholic),
        ("Glass", &cocktail.glass),
    ] {
        if let Some(value) = value {
            html.push_str(&format!(
                r#"<p class="cocktail-meta"><strong>{}:</strong> {}</p>"#,
                label,
                escape_html(value)
            ));
        }
    }

    html.push_str(r#"<h3>Ingredients</h3><ul class="ingredient-list">"#);
    for ingredient in cocktail.ingredients() {
        match &ingredient.measure {
            Some(measure) => html.push_str(&format!(
                "<li>{} {}</li>",
                escape_html(measure),
                escape_html(&ingredient.name)
            )),
            None => html.push_str(&format!("<li>{}</li>", escape_html(&ingredient.name))),
        }
    }
    html.push_str("</ul>");

    let instructions = cocktail.instructions.as_deref().unwrap_or(messages::NO_INSTRUCTIONS);
    html.push_str(&format!(
        r#"<h3>Instructions</h3><p class="cocktail-instructions">{}</p>"#,
        escape_html(instructions)
    ));

    html.push_str("</article>");
    html
}

pub fn render_category_cards(categories: Option<&[Category]>) -> String {
    let categories = match categories {
        Some(list) if !list.is_empty() => list,
        _ => return render_empty(messages::NO_CATEGORIES),
    };

    let cards: String = categories
        .iter()
        .map(|category| {
            let name = escape_html(&category.name);
            format!(
                r#"<button type="button" class="category-card" {}="{}">{}</button>"#,
                CATEGORY_ATTR, name, name
            )
        })
        .collect();
    format!(r#"<div class="category-list">{}</div>"#, cards)
}

pub fn render_cocktail_grid(summaries: &[CocktailSummary]) -> String {
    if summaries.is_empty() {
        return render_empty(messages::NO_COCKTAILS_IN_CATEGORY);
    }

    let cards: String = summaries
        .iter()
        .map(|drink| {
            let name = escape_html(&drink.name);
            let thumb = drink
                .thumbnail
                .as_deref()
                .map(|src| {
                    format!(
                        r#"<img src="{}" alt="{}" loading="lazy" onerror="{}" />"#,
                        escape_html(src),
                        name,
                        HIDE_ON_ERROR
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="drink-card" {}="{}">{}<h4>{}</h4></div>"#,
                DRINK_ID_ATTR,
                escape_html(&drink.id),
                thumb,
                name
            )
        })
        .collect();
    format!(r#"<div class="drink-grid">{}</div>"#, cards)
}

// ========================
// Region Rendering
// ========================

fn render_region<T>(region: &Region<T>, found: impl FnOnce(&T) -> String, not_found: impl FnOnce() -> String) -> String {
    match region.state() {
        RegionState::Idle => String::new(),
        RegionState::Loading(message) => render_loading(message),
        RegionState::Found(value) => found(value),
        RegionState::NotFound => not_found(),
        RegionState::Error(message) => render_error(message),
    }
}

pub fn render_detail_region(region: &Region<Cocktail>) -> String {
    render_region(region, |c| render_cocktail_detail(Some(c)), || render_cocktail_detail(None))
}

pub fn render_category_region(region: &Region<Vec<Category>>) -> String {
    render_region(region, |list| render_category_cards(Some(list.as_slice())), || render_category_cards(None))
}

pub fn render_grid_region(region: &Region<Vec<CocktailSummary>>) -> String {
    render_region(region, |list| render_cocktail_grid(list), || render_cocktail_grid(&[]))
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
