//! SQLite connection, schema and seed data.
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::params;
use tokio_rusqlite::Connection;

const DB_FILE_NAME: &str = "museum.db";

const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS event (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT
);
CREATE INDEX IF NOT EXISTS event_date_idx ON event(date);

CREATE TABLE IF NOT EXISTS holiday (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    date TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS operating_hour (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    day TEXT NOT NULL UNIQUE,
    hours TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    hashed_password TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS auth_token (
    token TEXT PRIMARY KEY,
    email TEXT NOT NULL,
    expires_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS newsletter_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    user_email TEXT NOT NULL,
    sent_at TEXT NOT NULL,
    status TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS email_queue (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    recipient TEXT NOT NULL,
    subject TEXT NOT NULL,
    body TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    sent_at TEXT,
    retry_count INTEGER NOT NULL DEFAULT 0
);
";

/// Open the museum database stored in `db_path`, creating the
/// directory if needed.
pub async fn async_db(db_path: &str) -> Result<Connection, anyhow::Error> {
    fs::create_dir_all(db_path)?;
    let path = Path::new(db_path).join(DB_FILE_NAME);
    let conn = Connection::open(path).await?;
    Ok(conn)
}

/// Create all tables. Safe to run repeatedly.
pub fn initialize_db(conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA)
}

struct SeedEvent {
    date: NaiveDate,
    title: &'static str,
    description: &'static str,
}

fn seed_events() -> Vec<SeedEvent> {
    let jan = |day| NaiveDate::from_ymd_opt(2026, 1, day).expect("valid seed date");
    vec![
        SeedEvent {
            date: jan(14),
            title: "Conversation Pieces",
            description: "Join us for an engaging discussion about contemporary art pieces in our collection. This interactive event brings together art enthusiasts and experts to explore the stories behind the artworks.",
        },
        SeedEvent {
            date: jan(14),
            title: "Musing Together",
            description: "A collaborative art experience where visitors can share their thoughts and interpretations of featured exhibitions. Perfect for families and groups looking to connect through art.",
        },
        SeedEvent {
            date: jan(15),
            title: "Toddler Thursday",
            description: "A special program designed for toddlers and their caregivers. Explore art through play, storytelling, and hands-on activities in our family-friendly gallery spaces.",
        },
        SeedEvent {
            date: jan(16),
            title: "Friday Night Jazz",
            description: "Experience the perfect blend of art and music. Enjoy live jazz performances while exploring our galleries after hours. Food and beverages available for purchase.",
        },
    ]
}

const SEED_HOLIDAYS: [(&str, u32, u32); 6] = [
    ("New Year's Day", 1, 1),
    ("Memorial Day", 5, 25),
    ("Independence Day", 7, 4),
    ("Labor Day", 9, 7),
    ("Thanksgiving Day", 11, 26),
    ("Christmas Day", 12, 25),
];

const SEED_HOURS: [(&str, &str); 7] = [
    ("Mon", "Closed"),
    ("Tues", "10:00 AM - 5:00 PM"),
    ("Wed", "10:00 AM - 5:00 PM"),
    ("Thurs", "10:00 AM - 5:00 PM"),
    ("Fri", "10:00 AM - 5:00 PM"),
    ("Sat", "10:00 AM - 5:00 PM"),
    ("Sun", "12:00 PM - 5:00 PM"),
];

/// Replace events, holidays and operating hours with the 2026 seed
/// data. Users, logs and the email queue are left alone.
pub fn seed_db(conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM event", [])?;
    tx.execute("DELETE FROM holiday", [])?;
    tx.execute("DELETE FROM operating_hour", [])?;

    for e in seed_events() {
        tx.execute(
            "INSERT INTO event (date, title, description) VALUES (?1, ?2, ?3)",
            params![e.date, e.title, e.description],
        )?;
    }
    for (name, month, day) in SEED_HOLIDAYS {
        let date = NaiveDate::from_ymd_opt(2026, month, day).expect("valid seed date");
        tx.execute(
            "INSERT INTO holiday (name, date) VALUES (?1, ?2)",
            params![name, date],
        )?;
    }
    for (day, hours) in SEED_HOURS {
        tx.execute(
            "INSERT INTO operating_hour (day, hours) VALUES (?1, ?2)",
            params![day, hours],
        )?;
    }

    tx.commit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_seeds_idempotently() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        initialize_db(&mut conn).unwrap();
        seed_db(&mut conn).unwrap();
        seed_db(&mut conn).unwrap();

        let count = |table: &str| -> i64 {
            conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))
                .unwrap()
        };
        assert_eq!(count("event"), 4);
        assert_eq!(count("holiday"), 6);
        assert_eq!(count("operating_hour"), 7);
    }

    #[test]
    fn it_stores_dates_as_iso_text() {
        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        initialize_db(&mut conn).unwrap();
        seed_db(&mut conn).unwrap();

        let date: String = conn
            .query_row(
                "SELECT date FROM holiday WHERE name = 'Christmas Day'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(date, "2026-12-25");
    }
}
