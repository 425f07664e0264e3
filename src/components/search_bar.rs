//! Search Bar Component
//!
//! Name search (button or Enter) and the random-cocktail trigger.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());

    let submit = {
        let ctx = ctx.clone();
        move || ctx.search(query.get_untracked())
    };
    let submit_on_enter = submit.clone();

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="Search for a cocktail..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        submit_on_enter();
                    }
                }
            />
            <button type="button" class="search-btn" on:click=move |_| submit()>"Search"</button>
            <button type="button" class="random-btn" on:click=move |_| ctx.random()>"Random Cocktail"</button>
        </div>
    }
}
