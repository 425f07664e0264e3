//! Category Panel Component

use leptos::prelude::*;

use super::card_tag_from_event;
use crate::context::use_app_context;
use crate::render::render_category_region;
use crate::state::AppStateStoreFields;

/// Category cards, one delegated click handler for all of them
#[component]
pub fn CategoryPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(tag) = card_tag_from_event(&ev) {
            ctx.card_click(tag);
        }
    };

    view! {
        <section class="category-panel">
            <h2>"Categories"</h2>
            <div
                class="category-region"
                on:click=on_click
                inner_html=move || store.categories().with(render_category_region)
            ></div>
        </section>
    }
}
