//! Display State Store
//!
//! One tagged region per display area, held in a `reactive_stores::Store`
//! so each region re-renders on its own.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::ApiResult;
use crate::models::{Category, Cocktail, CocktailSummary};

/// What a display region currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum RegionState<T> {
    Idle,
    Loading(String),
    Found(T),
    NotFound,
    Error(String),
}

/// Handle for one in-flight operation on a region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// A region plus its request counter.
///
/// Every `begin`, `fail` and `clear` bumps the counter, so only the most
/// recently started operation may resolve into the region.
#[derive(Clone, Debug, PartialEq)]
pub struct Region<T> {
    seq: u64,
    state: RegionState<T>,
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Self { seq: 0, state: RegionState::Idle }
    }
}

impl<T> Region<T> {
    pub fn state(&self) -> &RegionState<T> {
        &self.state
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.seq
    }

    pub fn begin(&mut self, message: impl Into<String>) -> Ticket {
        self.seq += 1;
        self.state = RegionState::Loading(message.into());
        Ticket(self.seq)
    }

    /// Apply a result; returns false when the ticket is stale and nothing changed
    pub fn resolve(&mut self, ticket: Ticket, outcome: ApiResult<Option<T>>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state = match outcome {
            Ok(Some(value)) => RegionState::Found(value),
            Ok(None) => RegionState::NotFound,
            Err(err) => RegionState::Error(format!("Error: {}", err)),
        };
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.seq += 1;
        self.state = RegionState::Error(message.into());
    }

    pub fn clear(&mut self) {
        self.seq += 1;
        self.state = RegionState::Idle;
    }
}

/// Whole-page display state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub categories: Region<Vec<Category>>,
    pub detail: Region<Cocktail>,
    pub grid: Region<Vec<CocktailSummary>>,
}

pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
