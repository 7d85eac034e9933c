//! Database queries for the holidays API
use anyhow::{Error, Result};
use rusqlite::params;
use tokio_rusqlite::Connection;

use super::public::{CreateHolidayRequest, Holiday};

pub async fn list_holidays(db: &Connection) -> Result<Vec<Holiday>, Error> {
    let holidays = db
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT id, name, date FROM holiday ORDER BY date, id")?;
            let rows = stmt
                .query_map([], |row| {
                    Ok(Holiday {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        date: row.get(2)?,
                    })
                })?
                .collect::<Result<Vec<Holiday>, rusqlite::Error>>()?;
            Ok(rows)
        })
        .await?;
    Ok(holidays)
}

pub async fn create_holiday(
    db: &Connection,
    holiday: CreateHolidayRequest,
) -> Result<Holiday, Error> {
    let created = db
        .call(move |conn| {
            conn.execute(
                "INSERT INTO holiday (name, date) VALUES (?1, ?2)",
                params![holiday.name, holiday.date],
            )?;
            Ok(Holiday {
                id: conn.last_insert_rowid(),
                name: holiday.name,
                date: holiday.date,
            })
        })
        .await?;
    Ok(created)
}

/// Returns `false` when no holiday had the ID
pub async fn delete_holiday(db: &Connection, id: i64) -> Result<bool, Error> {
    let deleted = db
        .call(move |conn| {
            let count = conn.execute("DELETE FROM holiday WHERE id = ?1", [id])?;
            Ok(count > 0)
        })
        .await?;
    Ok(deleted)
}
