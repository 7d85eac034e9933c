use anyhow::Result;
use chrono::Local;

use crate::client::MuseumClient;
use crate::core::AppConfig;
use crate::visit::DAY_NAMES;

pub async fn run(config: &AppConfig) -> Result<()> {
    let client = MuseumClient::new(&config.api_url);

    let status = client.museum_status(Local::now().naive_local()).await;
    println!("{}", status);

    if let Ok(hours) = client.hours().await {
        println!();
        for day in DAY_NAMES {
            if let Some(h) = hours.get(day) {
                println!("{:<6}{}", day, h);
            }
        }
    }

    Ok(())
}
