use anyhow::Result;

use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db};
use crate::jobs::{PeriodicJob, ProcessEmailQueue, dispatch_newsletter};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum JobId {
    /// Dispatch the newsletter now, whatever the date
    Newsletter,
    EmailQueue,
}

pub async fn run(id: JobId, config: &AppConfig) -> Result<()> {
    let db = async_db(&config.db_path).await?;
    db.call(|conn| {
        initialize_db(conn)?;
        Ok(())
    })
    .await?;

    println!("Running job: {:?}", id);
    match id {
        // The scheduled job only fires on the 1st, run the dispatch directly
        JobId::Newsletter => {
            let count = dispatch_newsletter(&db).await?;
            println!("Newsletter dispatched to {} members", count);
        }
        JobId::EmailQueue => ProcessEmailQueue.run_job(config, &db).await,
    }
    println!("Job completed");

    Ok(())
}
