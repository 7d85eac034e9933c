//! Public types for the hours API
use std::collections::BTreeMap;

/// Day abbreviation (`Sun`, `Mon`, `Tues`, ...) to an hours string
/// such as `"10:00 AM - 5:00 PM"` or `"Closed"`.
pub type HoursResponse = BTreeMap<String, String>;
