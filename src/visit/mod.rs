//! "Is the museum open right now", from the weekly hours and the
//! holiday list.
use std::fmt;

use chrono::{Datelike, NaiveDateTime, NaiveTime};

use crate::api::public::holidays::HolidaysResponse;
use crate::api::public::hours::HoursResponse;
use crate::calendar::date_key;

/// Keys of the hours table, indexed from Sunday
pub const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tues", "Wed", "Thurs", "Fri", "Sat"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MuseumStatus {
    ClosedFor(String),
    ClosedToday,
    OpenUntil(String),
    OpensAt(String),
    ClosedNow,
    Unavailable,
}

impl MuseumStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, MuseumStatus::OpenUntil(_))
    }
}

impl fmt::Display for MuseumStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MuseumStatus::ClosedFor(holiday) => write!(f, "Closed for {}", holiday),
            MuseumStatus::ClosedToday => f.write_str("Closed today"),
            MuseumStatus::OpenUntil(end) => write!(f, "Open until {}", end),
            MuseumStatus::OpensAt(start) => write!(f, "Opens at {}", start),
            MuseumStatus::ClosedNow => f.write_str("Closed now"),
            MuseumStatus::Unavailable => f.write_str("Information unavailable"),
        }
    }
}

/// Parse a clock time like `10:00 AM`
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%I:%M %p").ok()
}

pub fn museum_status(
    hours: &HoursResponse,
    holidays: &HolidaysResponse,
    now: NaiveDateTime,
) -> MuseumStatus {
    let today = date_key(now.date());
    if let Some((name, _)) = holidays.iter().find(|(_, date)| **date == today) {
        return MuseumStatus::ClosedFor(name.clone());
    }

    let day_name = DAY_NAMES[now.weekday().num_days_from_sunday() as usize];
    let Some(day_hours) = hours.get(day_name).filter(|h| h.as_str() != "Closed") else {
        return MuseumStatus::ClosedToday;
    };

    let Some((start_str, end_str)) = day_hours.split_once(" - ") else {
        tracing::warn!("Unrecognized hours for {}: {}", day_name, day_hours);
        return MuseumStatus::Unavailable;
    };
    let (Some(start), Some(end)) = (parse_time(start_str), parse_time(end_str)) else {
        tracing::warn!("Unrecognized hours for {}: {}", day_name, day_hours);
        return MuseumStatus::Unavailable;
    };

    let time = now.time();
    if time >= start && time <= end {
        MuseumStatus::OpenUntil(end_str.trim().to_string())
    } else if time < start {
        MuseumStatus::OpensAt(start_str.trim().to_string())
    } else {
        MuseumStatus::ClosedNow
    }
}
