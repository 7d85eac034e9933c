//! The public calendar: which entries to show on a given day.
//!
//! The backend only knows about scheduled events and holidays. General
//! admission is a recurring entry added here from the day of the week:
//! every day except Monday, plus the first Sunday, Tuesday and
//! Wednesday of the month.
mod month;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::api::public::events::{EventSummary, EventsResponse};
use crate::api::public::holidays::HolidaysResponse;
use crate::core::Language;

pub use month::{DayCell, MonthView};

/// `YYYY-MM-DD`, the key both calendar endpoints use
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn has_general_admission(date: NaiveDate) -> bool {
    let weekday = date.weekday().num_days_from_sunday();
    let first_sun_tue_wed = date.day() <= 7 && [0, 2, 3].contains(&weekday);
    weekday != 1 || first_sun_tue_wed
}

#[derive(Clone, Debug, PartialEq)]
pub enum CalendarEntry {
    GeneralAdmission { label: String },
    Scheduled {
        title: String,
        description: Option<String>,
    },
}

impl CalendarEntry {
    pub fn title(&self) -> &str {
        match self {
            CalendarEntry::GeneralAdmission { label } => label,
            CalendarEntry::Scheduled { title, .. } => title,
        }
    }

    pub fn description(&self, lang: Language) -> &str {
        match self {
            CalendarEntry::GeneralAdmission { .. } => lang.general_admission_description(),
            CalendarEntry::Scheduled {
                description: Some(description),
                ..
            } if !description.is_empty() => description,
            CalendarEntry::Scheduled { .. } => lang.event_fallback_description(),
        }
    }

    pub fn is_general_admission(&self) -> bool {
        matches!(self, CalendarEntry::GeneralAdmission { .. })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DayStatus {
    ClosedFor(String),
    Open,
    TypicallyClosed,
}

/// Events and holidays as fetched from the backend, keyed by date
#[derive(Clone, Debug, Default)]
pub struct EventCalendar {
    events: HashMap<String, Vec<EventSummary>>,
    // date -> holiday name
    holidays: HashMap<String, String>,
    language: Language,
}

impl EventCalendar {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Build from the public API responses. Holidays arrive keyed by
    /// name and are flipped to be keyed by date.
    pub fn from_api(
        events: EventsResponse,
        holidays: HolidaysResponse,
        language: Language,
    ) -> Self {
        let mut by_date: HashMap<String, Vec<EventSummary>> = HashMap::new();
        for (date, day) in events.monthly_events.into_iter().flatten() {
            by_date.entry(date).or_default().extend(day);
        }
        let holidays = holidays.into_iter().map(|(name, date)| (date, name)).collect();
        Self {
            events: by_date,
            holidays,
            language,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn holiday_on(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date_key(date)).map(String::as_str)
    }

    /// Everything happening on `date`, general admission first. A
    /// holiday hides every entry.
    pub fn events_for_date(&self, date: NaiveDate) -> Vec<CalendarEntry> {
        let key = date_key(date);
        if self.holidays.contains_key(&key) {
            return vec![];
        }

        let mut entries = Vec::new();
        if has_general_admission(date) {
            entries.push(CalendarEntry::GeneralAdmission {
                label: self.language.general_admission().to_string(),
            });
        }
        if let Some(day) = self.events.get(&key) {
            entries.extend(day.iter().map(|e| CalendarEntry::Scheduled {
                title: e.title.clone(),
                description: e.description.clone(),
            }));
        }
        entries
    }

    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        if let Some(name) = self.holiday_on(date) {
            return DayStatus::ClosedFor(name.to_string());
        }
        if has_general_admission(date) {
            DayStatus::Open
        } else {
            DayStatus::TypicallyClosed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn summary(title: &str, description: Option<&str>) -> EventSummary {
        EventSummary {
            title: title.to_string(),
            description: description.map(String::from),
        }
    }

    fn calendar() -> EventCalendar {
        let mut day = BTreeMap::new();
        day.insert(
            String::from("2026-01-03"),
            vec![summary("Late Night Gallery", Some("Local DJs"))],
        );
        day.insert(String::from("2026-01-12"), vec![summary("Member Preview", None)]);
        day.insert(String::from("2026-01-19"), vec![summary("Closing Day", None)]);
        let events = EventsResponse {
            monthly_events: vec![day],
        };
        let mut holidays = BTreeMap::new();
        holidays.insert(String::from("MLK Day"), String::from("2026-01-19"));
        EventCalendar::from_api(events, holidays, Language::En)
    }

    #[test]
    fn it_pads_date_keys() {
        assert_eq!(date_key(date(2026, 1, 5)), "2026-01-05");
    }

    #[test]
    fn it_hides_everything_on_holidays() {
        let cal = calendar();
        // Backend has an event on the holiday, it still resolves empty
        assert!(cal.events_for_date(date(2026, 1, 19)).is_empty());
        assert_eq!(
            cal.day_status(date(2026, 1, 19)),
            DayStatus::ClosedFor(String::from("MLK Day"))
        );
    }

    #[test]
    fn it_puts_general_admission_first_on_non_mondays() {
        let cal = calendar();
        // Every day of 2026 outside Mondays
        let mut day = date(2026, 1, 1);
        while day.year() == 2026 {
            if day.weekday() != chrono::Weekday::Mon && cal.holiday_on(day).is_none() {
                let entries = cal.events_for_date(day);
                assert!(entries[0].is_general_admission(), "{}", day);
                assert_eq!(entries[0].title(), "General Admission");
            }
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn it_skips_general_admission_on_mondays() {
        // 2026-01-05 is the first Monday, 2026-01-12 the second
        assert!(!has_general_admission(date(2026, 1, 5)));
        assert!(!has_general_admission(date(2026, 1, 12)));
        let entries = calendar().events_for_date(date(2026, 1, 12));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title(), "Member Preview");
        assert_eq!(calendar().day_status(date(2026, 1, 26)), DayStatus::TypicallyClosed);
    }

    #[test]
    fn it_appends_backend_events_after_general_admission() {
        let entries = calendar().events_for_date(date(2026, 1, 3));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title(), "Late Night Gallery");
        assert_eq!(entries[1].description(Language::En), "Local DJs");
    }

    #[test]
    fn it_falls_back_to_default_descriptions() {
        let cal = calendar();
        let entries = cal.events_for_date(date(2026, 1, 12));
        assert_eq!(
            entries[0].description(Language::En),
            "Featured Arts - High Museum of Art."
        );
        let ga = &cal.events_for_date(date(2026, 1, 13))[0];
        assert_eq!(
            ga.description(Language::Es),
            Language::Es.general_admission_description()
        );
    }

    #[test]
    fn it_localizes_the_general_admission_label() {
        let mut cal = calendar();
        cal.set_language(Language::Fr);
        let entries = cal.events_for_date(date(2026, 1, 13));
        assert_eq!(entries[0].title(), "Entrée Générale");
    }
}
