use anyhow::Result;
use clap::Subcommand;

use super::prompt;
use crate::client::MuseumClient;
use crate::core::{AppConfig, Language};

#[derive(Subcommand)]
pub enum NewsletterCommand {
    /// Log in and print this month's newsletter
    Read {
        #[arg(long)]
        email: String,
        #[arg(long, value_enum, default_value = "en")]
        lang: Language,
    },
    /// Log in and delete the account
    Unsubscribe {
        #[arg(long)]
        email: String,
    },
}

pub async fn run(config: &AppConfig, command: NewsletterCommand) -> Result<()> {
    let client = MuseumClient::new(&config.api_url);

    match command {
        NewsletterCommand::Read { email, lang } => {
            let token = client.login(&email, &prompt("Password: ")?).await?;
            let newsletter = client.newsletter(&token.access_token, lang).await?;

            println!("{}", newsletter.month);
            println!("{}", newsletter.title);
            println!("{}\n", newsletter.subtitle);
            println!("{}\n", newsletter.introduction);
            for section in newsletter.sections {
                println!("## {} [{}]", section.title, section.kind);
                println!("{}\n", section.content);
            }
            println!("{}", newsletter.citation);
        }
        NewsletterCommand::Unsubscribe { email } => {
            let token = client.login(&email, &prompt("Password: ")?).await?;
            let resp = client.unsubscribe(&token.access_token).await?;
            println!("{}", resp.message);
        }
    }

    Ok(())
}
