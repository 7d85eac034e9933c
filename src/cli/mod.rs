use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod admin;
pub mod calendar;
pub mod chat;
pub mod init;
pub mod job;
pub mod membership;
pub mod newsletter;
pub mod seed;
pub mod serve;
pub mod status;
pub mod tickets;

use admin::AdminCommand;
use job::JobId;
use membership::MembershipCommand;
use newsletter::NewsletterCommand;

use crate::core::{AppConfig, Language};

#[derive(Subcommand)]
enum Command {
    /// Create the database schema
    Init {},
    /// Replace events, holidays and hours with the sample data
    Seed {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "8000")]
        port: String,
    },
    /// Run a periodic job once
    Job {
        #[arg(long, value_enum)]
        id: JobId,
    },
    /// Show the events calendar for a month
    Calendar {
        /// Month to show as YYYY-MM, defaults to the current month
        #[arg(long)]
        month: Option<String>,
        /// Also list everything happening on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_enum, default_value = "en")]
        lang: Language,
    },
    /// Show whether the museum is open right now
    Status {},
    /// Order tickets and email the confirmation
    Tickets(tickets::TicketsArgs),
    /// Join or cancel a membership
    Membership {
        #[command(subcommand)]
        command: MembershipCommand,
    },
    /// Read the member newsletter
    Newsletter {
        #[command(subcommand)]
        command: NewsletterCommand,
    },
    /// Start a chat with the museum assistant
    Chat {
        #[arg(long, value_enum, default_value = "en")]
        lang: Language,
    },
    /// Manage events and holidays
    Admin {
        /// Admin password, prompted for when missing
        #[arg(long)]
        password: Option<String>,
        #[command(subcommand)]
        command: AdminCommand,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Read a line from the terminal
fn prompt(label: &str) -> Result<String> {
    let mut rl = rustyline::DefaultEditor::new()?;
    Ok(rl.readline(label)?.trim().to_string())
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // The server sets up its own subscriber
    if !matches!(args.command, Some(Command::Serve { .. }) | None) {
        init_tracing();
    }

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&config).await?;
        }
        Some(Command::Seed {}) => {
            seed::run(&config).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Job { id }) => {
            job::run(id, &config).await?;
        }
        Some(Command::Calendar { month, date, lang }) => {
            calendar::run(&config, month.as_deref(), date, lang).await?;
        }
        Some(Command::Status {}) => {
            status::run(&config).await?;
        }
        Some(Command::Tickets(args)) => {
            tickets::run(&config, args).await?;
        }
        Some(Command::Membership { command }) => {
            membership::run(&config, command).await?;
        }
        Some(Command::Newsletter { command }) => {
            newsletter::run(&config, command).await?;
        }
        Some(Command::Chat { lang }) => {
            chat::run(&config, lang).await?;
        }
        Some(Command::Admin { password, command }) => {
            admin::run(&config, password, command).await?;
        }
        None => {}
    }

    Ok(())
}
