use anyhow::Result;

use crate::core::AppConfig;
use crate::core::db::{async_db, initialize_db, seed_db};

pub async fn run(config: &AppConfig) -> Result<()> {
    println!("Seeding db...");
    let db = async_db(&config.db_path).await?;
    db.call(|conn| {
        initialize_db(conn)?;
        seed_db(conn)?;
        Ok(())
    })
    .await?;
    println!("Seeded events, holidays and operating hours");
    Ok(())
}
