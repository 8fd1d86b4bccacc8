//! Search screen state machine
//!
//! Owns the screen state and turns input events into state updates plus at
//! most one side effect for the caller to carry out. Responses are applied in
//! whatever order they arrive; there is no tracking of in-flight requests, so
//! overlapping searches resolve last-completion-wins.

use crate::backend::{Listing, ListingResponse};
use crate::navigation::Route;
use crate::query::QueryBuilder;

/// Status line for a response without results
pub const LOCATION_NOT_RECOGNIZED: &str = "Location not recognized; please try again.";

/// Prefix for transport/decode failures
pub const FAILURE_PREFIX: &str = "Something bad happened ";

/// Default search text
pub const DEFAULT_SEARCH: &str = "london";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub search_text: String,
    pub is_loading: bool,
    pub message: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            search_text: DEFAULT_SEARCH.to_string(),
            is_loading: false,
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    TextChanged(String),
    SearchPressed,
    ResponseArrived(ListingResponse),
    RequestFailed(String),
}

/// What the caller has to do after an event
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Issue one GET for this URL
    Fetch(String),
    /// Move to the named route, handing over the listings
    Navigate { route: &'static str, listings: Vec<Listing> },
}

#[derive(Debug, Clone, Default)]
pub struct SearchScreen {
    state: SearchState,
    query: QueryBuilder,
}

impl SearchScreen {
    pub fn new(query: QueryBuilder, initial_search: &str) -> Self {
        Self {
            state: SearchState {
                search_text: initial_search.to_string(),
                ..SearchState::default()
            },
            query,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn handle(&mut self, event: Event) -> Effect {
        match event {
            Event::TextChanged(text) => {
                self.state.search_text = text;
                Effect::None
            }

            Event::SearchPressed => {
                let url = self.query.url_for("place_name", &self.state.search_text, 1);
                tracing::info!(%url, "executing query");
                self.state.is_loading = true;
                Effect::Fetch(url)
            }

            Event::ResponseArrived(payload) => {
                self.state.is_loading = false;
                self.state.message.clear();

                let response = payload.response;
                if response.is_success() {
                    tracing::info!(found = response.listings.len(), "properties found");
                    Effect::Navigate {
                        route: Route::Results.name(),
                        listings: response.listings,
                    }
                } else {
                    tracing::info!(code = %response.application_response_code, "location not recognized");
                    self.state.message = LOCATION_NOT_RECOGNIZED.to_string();
                    Effect::None
                }
            }

            Event::RequestFailed(description) => {
                tracing::warn!(error = %description, "search request failed");
                self.state.is_loading = false;
                self.state.message = format!("{}{}", FAILURE_PREFIX, description);
                Effect::None
            }
        }
    }
}
