//! Background jobs that run on an interval alongside the server.
mod email_queue;
mod newsletter;

use std::time::Duration;

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use crate::core::AppConfig;

pub use email_queue::{ProcessEmailQueue, process_email_queue};
pub use newsletter::{MonthlyNewsletter, dispatch_newsletter};

#[async_trait]
pub trait PeriodicJob: Send + Sync + 'static {
    fn interval(&self) -> Duration;

    async fn run_job(&self, config: &AppConfig, db: &Connection);
}

/// Run `job` in its own task, once immediately and then on every tick
/// of its interval
pub fn spawn_periodic_job<J: PeriodicJob>(config: AppConfig, db: Connection, job: J) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(job.interval());
        // A slow run shouldn't cause a burst of catch up runs
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            job.run_job(&config, &db).await;
        }
    });
}
