use anyhow::Result;
use chrono::NaiveDate;
use clap::Subcommand;

use super::prompt;
use crate::admin::AdminPanel;
use crate::client::MuseumClient;
use crate::core::AppConfig;

#[derive(Subcommand)]
pub enum AdminCommand {
    /// Check the admin password
    Login {},
    /// List all events
    Events {},
    /// List all holidays
    Holidays {},
    /// Add an event to the calendar
    AddEvent {
        #[arg(long)]
        title: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        description: Option<String>,
    },
    /// Add a holiday, hiding events on that day
    AddHoliday {
        #[arg(long)]
        name: String,
        #[arg(long)]
        date: NaiveDate,
    },
    DeleteEvent {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, default_value = "false")]
        yes: bool,
    },
    DeleteHoliday {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long, default_value = "false")]
        yes: bool,
    },
}

fn confirm(yes: bool) -> impl FnOnce(&str) -> bool {
    move |question| {
        yes || prompt(&format!("{} [y/N] ", question))
            .map(|answer| answer.eq_ignore_ascii_case("y"))
            .unwrap_or(false)
    }
}

pub async fn run(config: &AppConfig, password: Option<String>, command: AdminCommand) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt("Admin password: ")?,
    };
    let panel = AdminPanel::login(config, MuseumClient::new(&config.api_url), &password)?;

    match command {
        AdminCommand::Login {} => println!("Logged in"),
        AdminCommand::Events {} => {
            for event in panel.events().await? {
                println!(
                    "{:>4}  {}  {}  {}",
                    event.id,
                    event.date,
                    event.title,
                    event.description.unwrap_or_default()
                );
            }
        }
        AdminCommand::Holidays {} => {
            for holiday in panel.holidays().await? {
                println!("{:>4}  {}  {}", holiday.id, holiday.date, holiday.name);
            }
        }
        AdminCommand::AddEvent {
            title,
            date,
            description,
        } => {
            let event = panel.add_event(&title, date, description.as_deref()).await?;
            println!("Created event {} on {}", event.id, event.date);
        }
        AdminCommand::AddHoliday { name, date } => {
            let holiday = panel.add_holiday(&name, date).await?;
            println!("Created holiday {} on {}", holiday.id, holiday.date);
        }
        AdminCommand::DeleteEvent { id, yes } => {
            if panel.delete_event(id, confirm(yes)).await? {
                println!("Deleted event {}", id);
            }
        }
        AdminCommand::DeleteHoliday { id, yes } => {
            if panel.delete_holiday(id, confirm(yes)).await? {
                println!("Deleted holiday {}", id);
            }
        }
    }

    Ok(())
}
