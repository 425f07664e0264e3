//! Content Panel Component
//!
//! Cocktail detail above the category grid. Grid card clicks open details.

use leptos::prelude::*;

use super::card_tag_from_event;
use crate::context::use_app_context;
use crate::render::{render_detail_region, render_grid_region};
use crate::state::{use_app_store, AppStateStoreFields};

#[component]
pub fn ContentPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(tag) = card_tag_from_event(&ev) {
            ctx.card_click(tag);
        }
    };

    view! {
        <section class="content-panel" on:click=on_click>
            <div class="detail-region" inner_html=move || store.detail().with(render_detail_region)></div>
            <div class="grid-region" inner_html=move || store.grid().with(render_grid_region)></div>
        </section>
    }
}
