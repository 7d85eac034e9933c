//! Database queries for the events API
use anyhow::{Error, Result};
use rusqlite::params;
use tokio_rusqlite::Connection;

use super::public::{CreateEventRequest, Event};

/// All events ordered by date, then by creation
pub async fn list_events(db: &Connection) -> Result<Vec<Event>, Error> {
    let events = db
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, date, description FROM event ORDER BY date, id",
            )?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Event {
                        id: row.get(0)?,
                        title: row.get(1)?,
                        date: row.get(2)?,
                        description: row.get(3)?,
                    })
                })?
                .collect::<Result<Vec<Event>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;
    Ok(events)
}

pub async fn create_event(db: &Connection, event: CreateEventRequest) -> Result<Event, Error> {
    let created = db
        .call(move |conn| {
            conn.execute(
                "INSERT INTO event (title, date, description) VALUES (?1, ?2, ?3)",
                params![event.title, event.date, event.description],
            )?;
            Ok(Event {
                id: conn.last_insert_rowid(),
                title: event.title,
                date: event.date,
                description: event.description,
            })
        })
        .await?;
    Ok(created)
}

/// Returns `false` when no event had the ID
pub async fn delete_event(db: &Connection, id: i64) -> Result<bool, Error> {
    let deleted = db
        .call(move |conn| {
            let count = conn.execute("DELETE FROM event WHERE id = ?1", [id])?;
            Ok(count > 0)
        })
        .await?;
    Ok(deleted)
}
