use chrono::{Datelike, Days, NaiveDate};

use super::EventCalendar;

/// One day in the month grid
#[derive(Clone, Debug, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub general_admission: bool,
    pub scheduled: usize,
    pub holiday: Option<String>,
}

/// A month of the calendar grid. Weeks start on Sunday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
}

impl MonthView {
    /// Returns `None` for a month outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .map(|d| d.day())
            .unwrap_or(31)
    }

    /// Weekday of the 1st, Sun=0
    pub fn first_weekday(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The end of the previous month that fills the first row of the
    /// grid, oldest first
    pub fn leading_days(&self) -> Vec<NaiveDate> {
        let count = self.first_weekday();
        let Some(start) = self.first_day().checked_sub_days(Days::new(count.into())) else {
            return vec![];
        };
        start.iter_days().take(count as usize).collect()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.first_day()
            .iter_days()
            .take(self.days_in_month() as usize)
    }

    pub fn cells(&self, calendar: &EventCalendar) -> Vec<DayCell> {
        self.days()
            .map(|date| {
                let entries = calendar.events_for_date(date);
                DayCell {
                    date,
                    general_admission: entries.iter().any(|e| e.is_general_admission()),
                    scheduled: entries.iter().filter(|e| !e.is_general_admission()).count(),
                    holiday: calendar.holiday_on(date).map(String::from),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Language;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn it_counts_days_in_month() {
        assert_eq!(MonthView::new(2026, 1).unwrap().days_in_month(), 31);
        assert_eq!(MonthView::new(2026, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthView::new(2028, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthView::new(2026, 12).unwrap().days_in_month(), 31);
        assert!(MonthView::new(2026, 13).is_none());
    }

    #[test]
    fn it_navigates_across_years() {
        let jan = MonthView::new(2026, 1).unwrap();
        assert_eq!(jan.prev(), MonthView::new(2025, 12).unwrap());
        assert_eq!(jan.prev().next(), jan);
        assert_eq!(MonthView::new(2026, 12).unwrap().next().year, 2027);
    }

    #[test]
    fn it_fills_the_first_row_from_the_previous_month() {
        // January 1st 2026 is a Thursday
        let jan = MonthView::new(2026, 1).unwrap();
        assert_eq!(jan.first_weekday(), 4);
        assert_eq!(
            jan.leading_days(),
            vec![
                date(2025, 12, 28),
                date(2025, 12, 29),
                date(2025, 12, 30),
                date(2025, 12, 31)
            ]
        );
        // February 1st 2026 is a Sunday
        assert!(MonthView::new(2026, 2).unwrap().leading_days().is_empty());
    }

    #[test]
    fn it_builds_cells_for_each_day() {
        let calendar = EventCalendar::new(Language::En);
        let cells = MonthView::new(2026, 1).unwrap().cells(&calendar);
        assert_eq!(cells.len(), 31);
        assert_eq!(cells[0].date, date(2026, 1, 1));
        // The 5th is a Monday
        assert!(!cells[4].general_admission);
        assert!(cells[5].general_admission);
        assert!(cells.iter().all(|c| c.scheduled == 0 && c.holiday.is_none()));
    }
}
