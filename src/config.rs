//! API Configuration
//!
//! Base URL for the remote cocktail API. The host page may override it with
//! `<meta name="cocktail-api-base" content="...">`.

use wasm_bindgen::JsCast;

pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1/";

const BASE_URL_META: &str = "cocktail-api-base";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config, making sure the base ends with `/` so paths append cleanly
    pub fn with_base_url(base_url: &str) -> Self {
        let trimmed = base_url.trim();
        let base_url = if trimmed.ends_with('/') {
            trimmed.to_string()
        } else {
            format!("{}/", trimmed)
        };
        Self { base_url }
    }

    /// Read the override from the current document, falling back to the default
    pub fn from_document() -> Self {
        let content = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                doc.query_selector(&format!("meta[name=\"{}\"]", BASE_URL_META))
                    .ok()
                    .flatten()
            })
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content())
            .filter(|content| !content.trim().is_empty());

        match content {
            Some(base) => {
                tracing::info!(base = %base, "using API base from page meta");
                Self::with_base_url(&base)
            }
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
