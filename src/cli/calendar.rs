use anyhow::{Result, anyhow};
use chrono::{Datelike, Local, NaiveDate};

use crate::calendar::{DayStatus, EventCalendar, MonthView};
use crate::client::MuseumClient;
use crate::core::{AppConfig, Language};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

fn parse_month(month: &str) -> Result<MonthView> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month \"{}\", expected YYYY-MM", month))?;
    Ok(MonthView::containing(first))
}

/// One line per week of `view`
fn grid_rows(view: &MonthView, calendar: &EventCalendar) -> Vec<String> {
    let mut rows = Vec::new();
    // Days from the previous month fill out the first week
    let mut row = view
        .leading_days()
        .iter()
        .map(|d| format!("({:>2})  ", d.day()))
        .collect::<Vec<_>>();
    for cell in view.cells(calendar) {
        let marker = if cell.holiday.is_some() {
            String::from("H")
        } else if cell.scheduled > 0 {
            format!("+{}", cell.scheduled)
        } else if cell.general_admission {
            String::from("*")
        } else {
            String::new()
        };
        row.push(format!("{:>2}{:<4}", cell.date.day(), marker));
        if row.len() == 7 {
            rows.push(row.join(""));
            row.clear();
        }
    }
    if !row.is_empty() {
        rows.push(row.join(""));
    }
    rows
}

pub async fn run(
    config: &AppConfig,
    month: Option<&str>,
    date: Option<NaiveDate>,
    lang: Language,
) -> Result<()> {
    let view = match (month, date) {
        (Some(month), _) => parse_month(month)?,
        (None, Some(date)) => MonthView::containing(date),
        (None, None) => MonthView::containing(Local::now().date_naive()),
    };

    let client = MuseumClient::new(&config.api_url);
    let calendar = client.load_calendar(lang).await;

    println!("{}", view.first_day().format("%B %Y"));
    println!("{}", WEEKDAYS.map(|d| format!("{:<6}", d)).join(""));

    for row in grid_rows(&view, &calendar) {
        println!("{}", row);
    }
    println!();
    println!(
        "* {}   +N scheduled events   H holiday",
        lang.general_admission()
    );

    if let Some(date) = date {
        println!();
        println!("{}", date.format("%A, %B %-d, %Y"));
        match calendar.day_status(date) {
            DayStatus::ClosedFor(name) => println!("Closed for {}", name),
            DayStatus::TypicallyClosed => println!("The museum is typically closed on this day"),
            DayStatus::Open => {}
        }
        for entry in calendar.events_for_date(date) {
            println!("- {}: {}", entry.title(), entry.description(lang));
        }
    }

    Ok(())
}
