use std::time::Duration;

use anyhow::{Error, Result};
use async_trait::async_trait;
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use tokio_rusqlite::Connection;

use super::PeriodicJob;
use crate::api::routes::{auth, email, newsletter};
use crate::core::AppConfig;

/// Sends the newsletter link to every member on the first of the
/// month at 9am local time
#[derive(Default, Debug)]
pub struct MonthlyNewsletter;

impl MonthlyNewsletter {
    /// True during the 9am hour on the first of the month
    pub fn is_due(now: NaiveDateTime) -> bool {
        now.day() == 1 && now.hour() == 9
    }
}

/// Dispatch the newsletter if it is due at `now` and hasn't already
/// gone out this month. The first tick runs at startup so a restart
/// during the 9am hour would otherwise send it twice. Returns the
/// number of members notified, if it ran.
pub async fn dispatch_if_due(db: &Connection, now: NaiveDateTime) -> Result<Option<usize>, Error> {
    if !MonthlyNewsletter::is_due(now) {
        return Ok(None);
    }
    let month_start = now.format("%Y-%m-01 00:00:00").to_string();
    if newsletter::db::dispatched_since(db, month_start).await? {
        tracing::info!("Newsletter already dispatched this month, skipping");
        return Ok(None);
    }
    let count = dispatch_newsletter(db).await?;
    Ok(Some(count))
}

#[async_trait]
impl PeriodicJob for MonthlyNewsletter {
    fn interval(&self) -> Duration {
        Duration::from_secs(60 * 60)
    }

    async fn run_job(&self, _config: &AppConfig, db: &Connection) {
        if let Err(e) = dispatch_if_due(db, Local::now().naive_local()).await {
            tracing::error!("Error in newsletter task: {}", e);
        }
    }
}

/// Record a newsletter dispatch for every member. Returns how many
/// members were notified.
pub async fn dispatch_newsletter(db: &Connection) -> Result<usize, Error> {
    tracing::info!("Monthly newsletter task started");
    let emails = auth::db::list_user_emails(db).await?;
    for email in &emails {
        tracing::info!("Dispatched newsletter link to {}", email);
    }
    let count =
        newsletter::db::insert_logs(db, emails, email::db::timestamp(), "sent").await?;
    tracing::info!("Monthly newsletter task completed, {} members notified", count);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::core::db::initialize_db;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn it_is_due_on_the_first_at_nine() {
        assert!(MonthlyNewsletter::is_due(at(1, 9, 0)));
        assert!(MonthlyNewsletter::is_due(at(1, 9, 59)));
        assert!(!MonthlyNewsletter::is_due(at(1, 10, 0)));
        assert!(!MonthlyNewsletter::is_due(at(2, 9, 0)));
    }

    #[tokio::test]
    async fn it_logs_a_dispatch_per_member() {
        let db = Connection::open_in_memory().await.unwrap();
        db.call(|conn| {
            initialize_db(conn)?;
            Ok(())
        })
        .await
        .unwrap();
        auth::db::insert_user(&db, "a@example.com", "x").await.unwrap();
        auth::db::insert_user(&db, "b@example.com", "x").await.unwrap();

        assert_eq!(dispatch_newsletter(&db).await.unwrap(), 2);

        let logs = newsletter::db::latest_logs(&db, 50).await.unwrap();
        assert_eq!(logs.len(), 2);
        // Newest first
        assert_eq!(logs[0].user_email, "b@example.com");
        assert!(logs.iter().all(|l| l.status == "sent"));
    }

    #[tokio::test]
    async fn it_dispatches_once_per_month() {
        let db = Connection::open_in_memory().await.unwrap();
        db.call(|conn| {
            initialize_db(conn)?;
            Ok(())
        })
        .await
        .unwrap();
        auth::db::insert_user(&db, "a@example.com", "x").await.unwrap();

        // Not the first of the month
        assert_eq!(dispatch_if_due(&db, at(2, 9, 0)).await.unwrap(), None);

        // Pretend the server restarted within the hour after sending
        let now = Local::now().naive_local();
        let first = now.date().with_day(1).unwrap().and_hms_opt(9, 5, 0).unwrap();
        assert_eq!(dispatch_if_due(&db, first).await.unwrap(), Some(1));
        assert_eq!(dispatch_if_due(&db, first).await.unwrap(), None);
        assert_eq!(newsletter::db::latest_logs(&db, 50).await.unwrap().len(), 1);
    }
}
