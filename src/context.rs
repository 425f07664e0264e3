//! Application Context
//!
//! Controller handle provided via Leptos Context API. Methods fire a flow
//! on the local executor and return immediately.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::BrowserTransport;
use crate::controller::{CardTag, Controller};
use crate::state::AppStore;

pub type AppController = Controller<BrowserTransport>;

#[derive(Clone)]
pub struct AppContext {
    controller: AppController,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self { controller }
    }

    pub fn store(&self) -> AppStore {
        self.controller.store()
    }

    pub fn search(&self, input: String) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.search(&input).await });
    }

    pub fn random(&self) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.random().await });
    }

    pub fn card_click(&self, tag: CardTag) {
        tracing::debug!(?tag, "card clicked");
        let controller = self.controller.clone();
        spawn_local(async move { controller.handle_card_click(tag).await });
    }

    pub fn load_categories(&self) {
        let controller = self.controller.clone();
        spawn_local(async move { controller.load_categories().await });
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
