//! Interaction Controller
//!
//! Each user flow starts a region (loading), awaits the API, then resolves
//! the region. Failures end as an error state in the region and go no
//! further.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{CocktailApi, Endpoint, Transport};
use crate::error::ApiResult;
use crate::messages;
use crate::models::Cocktail;
use crate::state::{AppStateStoreFields, AppStore, Ticket};

/// What a click on a rendered card refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTag {
    Category(String),
    Drink(String),
}

impl CardTag {
    /// Build from the `data-*` attributes of the clicked card
    pub fn from_attributes(category: Option<String>, drink_id: Option<String>) -> Option<Self> {
        let non_empty = |value: String| (!value.is_empty()).then_some(value);
        drink_id
            .and_then(non_empty)
            .map(CardTag::Drink)
            .or_else(|| category.and_then(non_empty).map(CardTag::Category))
    }
}

pub struct Controller<T> {
    api: Arc<CocktailApi<T>>,
    store: AppStore,
}

impl<T> Clone for Controller<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store,
        }
    }
}

impl<T: Transport> Controller<T> {
    pub fn new(api: CocktailApi<T>, store: AppStore) -> Self {
        Self { api: Arc::new(api), store }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    pub fn api(&self) -> &CocktailApi<T> {
        &self.api
    }

    // ========================
    // Flows
    // ========================

    pub async fn search(&self, input: &str) {
        let name = input.trim();
        if name.is_empty() {
            self.store.detail().write().fail(messages::EMPTY_SEARCH);
            return;
        }
        self.load_detail(messages::loading_search(name), Endpoint::SearchByName(name.to_string()))
            .await;
    }

    pub async fn random(&self) {
        self.load_detail(messages::LOADING_RANDOM.to_string(), Endpoint::Random).await;
    }

    pub async fn show_detail(&self, id: &str) {
        self.load_detail(messages::LOADING_DETAILS.to_string(), Endpoint::LookupById(id.to_string()))
            .await;
    }

    pub async fn browse_category(&self, category: &str) {
        self.store.detail().write().clear();
        let ticket = self.store.grid().write().begin(messages::loading_category(category));

        let outcome = self.api.fetch_cocktails_by_category(category).await;
        log_failure("category browse", &outcome);

        if self.store.grid().with_untracked(|region| region.is_current(ticket)) {
            self.store.grid().write().resolve(ticket, outcome);
        } else {
            log_stale("grid", ticket);
        }
    }

    /// Initial category listing
    pub async fn load_categories(&self) {
        let ticket = self.store.categories().write().begin(messages::LOADING_CATEGORIES);

        let outcome = self.api.fetch_category_list().await;
        log_failure("category list", &outcome);
        if let Ok(Some(categories)) = &outcome {
            tracing::info!(count = categories.len(), "categories loaded");
        }

        if self.store.categories().with_untracked(|region| region.is_current(ticket)) {
            self.store.categories().write().resolve(ticket, outcome);
        } else {
            log_stale("categories", ticket);
        }
    }

    /// Delegated click on a category or drink card
    pub async fn handle_card_click(&self, tag: CardTag) {
        match tag {
            CardTag::Category(name) => self.browse_category(&name).await,
            CardTag::Drink(id) => self.show_detail(&id).await,
        }
    }

    async fn load_detail(&self, message: String, endpoint: Endpoint) {
        let ticket = self.store.detail().write().begin(message);

        let outcome: ApiResult<Option<Cocktail>> = self.api.fetch_single_cocktail(&endpoint).await;
        log_failure("cocktail fetch", &outcome);

        if self.store.detail().with_untracked(|region| region.is_current(ticket)) {
            self.store.detail().write().resolve(ticket, outcome);
        } else {
            log_stale("detail", ticket);
        }
    }
}

fn log_failure<V>(what: &str, outcome: &ApiResult<V>) {
    if let Err(err) = outcome {
        tracing::warn!(error = %err, "{} failed", what);
    }
}

fn log_stale(region: &str, ticket: Ticket) {
    tracing::debug!(region, ?ticket, "discarding stale response");
}
