//! Public types for the events API
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

/// An event as shown on the public calendar, without its ID
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub title: String,
    pub description: Option<String>,
}

/// Events grouped by `YYYY-MM-DD`. The outer list always has a single
/// map, kept for compatibility with existing clients.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EventsResponse {
    pub monthly_events: Vec<BTreeMap<String, Vec<EventSummary>>>,
}
