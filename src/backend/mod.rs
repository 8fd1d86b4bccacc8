//! Listings API access

pub mod api;
pub mod types;

pub use api::ListingsClient;
pub use types::{Listing, ListingResponse};
