//! Database queries for the hours API
use anyhow::{Error, Result};
use tokio_rusqlite::Connection;

use super::public::HoursResponse;

pub async fn operating_hours(db: &Connection) -> Result<HoursResponse, Error> {
    let hours = db
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT day, hours FROM operating_hour")?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .filter_map(Result::ok)
                .collect::<HoursResponse>();
            Ok(rows)
        })
        .await?;
    Ok(hours)
}
