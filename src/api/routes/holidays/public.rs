//! Public types for the holidays API
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateHolidayRequest {
    pub name: String,
    pub date: NaiveDate,
}

/// Holiday name to `YYYY-MM-DD`. Two holidays with the same name
/// collapse into one entry.
pub type HolidaysResponse = BTreeMap<String, String>;
