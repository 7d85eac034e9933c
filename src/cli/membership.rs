use anyhow::{Result, bail};
use clap::Subcommand;

use super::prompt;
use crate::client::MuseumClient;
use crate::core::AppConfig;
use crate::membership::{
    CancelForm, MembershipLevel, SignupForm, SignupOutcome, cancel, sign_up,
};
use crate::relay::EmailRelay;

#[derive(Subcommand)]
pub enum MembershipCommand {
    /// List the membership levels
    Levels {},
    /// Become a member
    Join {
        #[arg(long, value_enum)]
        level: MembershipLevel,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Prompted for when missing
        #[arg(long)]
        password: Option<String>,
    },
    /// Cancel a membership and delete the account
    Cancel {
        #[arg(long)]
        email: String,
    },
}

pub async fn run(config: &AppConfig, command: MembershipCommand) -> Result<()> {
    let client = MuseumClient::new(&config.api_url);

    match command {
        MembershipCommand::Levels {} => {
            for level in MembershipLevel::ALL {
                println!("{:<14} ${}/year", level.name(), level.annual_price());
            }
        }
        MembershipCommand::Join {
            level,
            name,
            email,
            password,
        } => {
            let password = match password {
                Some(p) => p,
                None => prompt("Password: ")?,
            };
            let form = SignupForm {
                level,
                name,
                email,
                password,
            };
            let relay = EmailRelay::new(&config.email_relay_url);
            match sign_up(&client, &relay, &form).await? {
                SignupOutcome::Completed { reference } => {
                    println!(
                        "Welcome to the {} Membership! Reference {}",
                        level.name(),
                        reference
                    );
                }
                SignupOutcome::ConfirmationFailed { reason } => println!("{}", reason),
            }
        }
        MembershipCommand::Cancel { email } => {
            let form = CancelForm {
                email,
                password: prompt("Password: ")?,
                confirm_password: prompt("Confirm password: ")?,
            };
            if !form.passwords_match() {
                bail!("Passwords do not match");
            }
            println!("{}", cancel(&client, &form).await?);
        }
    }

    Ok(())
}
