//! Listings API payload types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level search payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingResponse {
    pub response: ResponseBody,
}

/// The nested `response` object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseBody {
    pub application_response_code: String,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

impl ResponseBody {
    /// Codes starting with "1" carry results
    pub fn is_success(&self) -> bool {
        self.application_response_code.starts_with('1')
    }
}

/// A single listing record.
///
/// The payload shape belongs to the API, so the raw JSON is kept and the
/// display fields are read on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing(pub Value);

impl Listing {
    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<&str> {
        self.0.get("price_formatted").and_then(Value::as_str)
    }

    pub fn summary(&self) -> Option<&str> {
        self.0.get("summary").and_then(Value::as_str)
    }

    pub fn bedrooms(&self) -> Option<u64> {
        count_field(&self.0, "bedroom_number")
    }

    pub fn bathrooms(&self) -> Option<u64> {
        count_field(&self.0, "bathroom_number")
    }

    /// "3 bed, 2 bath" style line, empty when neither count is known
    pub fn rooms_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(beds) = self.bedrooms() {
            parts.push(format!("{} bed", beds));
        }
        if let Some(baths) = self.bathrooms() {
            parts.push(format!("{} bath", baths));
        }
        parts.join(", ")
    }
}

// The API is inconsistent about numbers vs numeric strings here.
fn count_field(value: &Value, key: &str) -> Option<u64> {
    match value.get(key)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
