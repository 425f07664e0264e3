//! Cocktail Finder App
//!
//! Root component: search bar on top, categories beside the content panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::{BrowserTransport, CocktailApi};
use crate::components::{CategoryPanel, ContentPanel, SearchBar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::state::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = CocktailApi::new(ApiConfig::from_document(), BrowserTransport);
    let ctx = AppContext::new(Controller::new(api, store));
    provide_context(ctx.clone());

    // Bootstrap: fill the category list once on mount
    Effect::new(move |_| {
        tracing::info!("loading categories");
        ctx.load_categories();
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Cocktail Finder"</h1>
                <SearchBar />
            </header>

            <main class="main-content">
                <CategoryPanel />
                <ContentPanel />
            </main>
        </div>
    }
}
