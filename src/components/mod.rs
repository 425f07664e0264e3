//! UI Components
//!
//! Leptos views over the display store.

mod search_bar;
mod category_panel;
mod content_panel;

pub use search_bar::SearchBar;
pub use category_panel::CategoryPanel;
pub use content_panel::ContentPanel;

use wasm_bindgen::JsCast;

use crate::controller::CardTag;
use crate::render::{CATEGORY_ATTR, DRINK_ID_ATTR};

/// Resolve a click inside a region container to the card it landed on.
///
/// Handlers sit on the container, so freshly rendered cards need no binding.
pub(crate) fn card_tag_from_event(ev: &web_sys::MouseEvent) -> Option<CardTag> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let card = target
        .closest(&format!("[{}], [{}]", CATEGORY_ATTR, DRINK_ID_ATTR))
        .ok()
        .flatten()?;
    CardTag::from_attributes(card.get_attribute(CATEGORY_ATTR), card.get_attribute(DRINK_ID_ATTR))
}
