//! Membership signup and cancellation.
use std::fmt;

use anyhow::{Error, Result, bail};

use crate::api::public::membership::CancelMembershipRequest;
use crate::client::MuseumClient;
use crate::relay::{EmailRelay, RelayMessage, reference_id};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MembershipLevel {
    Student,
    Individual,
    Family,
    Contributing,
    Patron,
    Circle,
}

impl MembershipLevel {
    pub const ALL: [MembershipLevel; 6] = [
        MembershipLevel::Student,
        MembershipLevel::Individual,
        MembershipLevel::Family,
        MembershipLevel::Contributing,
        MembershipLevel::Patron,
        MembershipLevel::Circle,
    ];

    /// Annual fee in whole US dollars
    pub fn annual_price(&self) -> u32 {
        match self {
            MembershipLevel::Student => 70,
            MembershipLevel::Individual => 90,
            MembershipLevel::Family => 135,
            MembershipLevel::Contributing => 195,
            MembershipLevel::Patron => 390,
            MembershipLevel::Circle => 1200,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MembershipLevel::Student => "Student",
            MembershipLevel::Individual => "Individual",
            MembershipLevel::Family => "Family",
            MembershipLevel::Contributing => "Contributing",
            MembershipLevel::Patron => "Patron",
            MembershipLevel::Circle => "Circle",
        }
    }
}

impl fmt::Display for MembershipLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SignupForm {
    pub level: MembershipLevel,
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && self.email.contains('@') && !self.password.is_empty()
    }

    pub fn confirmation(&self, reference: &str) -> RelayMessage {
        RelayMessage::new(
            "Welcome to the High Museum Membership! 🎨",
            &format!(
                "Hello, {}! Thank you for choosing the {} Membership. Your account has been created successfully. You can now log in to access the Monthly Newsletter.",
                self.name,
                self.level.name()
            ),
        )
        .field("Member Name", &self.name)
        .field("Membership Level", self.level.name())
        .field("Annual Rate", &format!("${}", self.level.annual_price()))
        .field("Reference ID", reference)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignupOutcome {
    /// Account created and confirmation sent
    Completed { reference: String },
    /// Account created but the confirmation email failed. The account
    /// is kept.
    ConfirmationFailed { reason: String },
}

/// Register the account, then email the confirmation
pub async fn sign_up(
    client: &MuseumClient,
    relay: &EmailRelay,
    form: &SignupForm,
) -> Result<SignupOutcome, Error> {
    if !form.can_submit() {
        bail!("Membership needs a name, a valid email and a password");
    }
    client
        .register(&form.email, &form.password)
        .await
        .inspect_err(|e| tracing::error!("Membership registration failed: {}", e))?;

    let reference = reference_id("MEM");
    match relay.send(&form.email, &form.confirmation(&reference)).await {
        Ok(()) => {
            tracing::info!("Membership {} confirmed for {}", reference, form.email);
            Ok(SignupOutcome::Completed { reference })
        }
        Err(e) => {
            tracing::error!("Membership confirmation failed for {}: {}", form.email, e);
            Ok(SignupOutcome::ConfirmationFailed {
                reason: String::from(
                    "Confirmation email could not be sent, but your account was created.",
                ),
            })
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CancelForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CancelForm {
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }

    pub fn can_submit(&self) -> bool {
        self.email.contains('@') && !self.password.is_empty()
    }
}

/// Cancel the membership. Mismatched passwords fail before any
/// request is made.
pub async fn cancel(client: &MuseumClient, form: &CancelForm) -> Result<String, Error> {
    if !form.passwords_match() {
        bail!("Passwords do not match");
    }
    if !form.can_submit() {
        bail!("Cancellation needs a valid email and a password");
    }
    let request = CancelMembershipRequest {
        email: form.email.clone(),
        password: form.password.clone(),
        confirm_password: form.confirm_password.clone(),
    };
    let resp = client.cancel_membership(&request).await?;
    Ok(resp.message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn signup() -> SignupForm {
        SignupForm {
            level: MembershipLevel::Family,
            name: String::from("Ada"),
            email: String::from("ada@example.com"),
            password: String::from("secret"),
        }
    }

    #[test]
    fn it_prices_every_level() {
        let prices: Vec<u32> = MembershipLevel::ALL.iter().map(|l| l.annual_price()).collect();
        assert_eq!(prices, vec![70, 90, 135, 195, 390, 1200]);
    }

    #[test]
    fn it_requires_an_email_with_an_at_sign() {
        let mut form = signup();
        assert!(form.can_submit());
        form.email = String::from("ada");
        assert!(!form.can_submit());
    }

    #[test]
    fn it_builds_the_confirmation() {
        let message = signup().confirmation("MEM-123456");
        assert_eq!(message.fields["Membership Level"], "Family");
        assert_eq!(message.fields["Annual Rate"], "$135");
        assert_eq!(message.fields["Reference ID"], "MEM-123456");
    }

    #[tokio::test]
    async fn test_sign_up_registers_then_confirms() {
        let mut server = mockito::Server::new_async().await;
        let register = server
            .mock("POST", "/api/register")
            .match_body(mockito::Matcher::PartialJson(json!({"email": "ada@example.com"})))
            .with_status(200)
            .with_body(r#"{"message":"User created successfully"}"#)
            .create_async()
            .await;
        let relay_mock = server
            .mock("POST", "/ajax/ada@example.com")
            .with_status(200)
            .create_async()
            .await;

        let client = MuseumClient::new(&format!("{}/api", server.url()));
        let relay = EmailRelay::new(&server.url());
        let outcome = sign_up(&client, &relay, &signup()).await.unwrap();

        register.assert_async().await;
        relay_mock.assert_async().await;
        assert!(matches!(outcome, SignupOutcome::Completed { reference } if reference.starts_with("MEM-")));
    }

    #[tokio::test]
    async fn test_sign_up_keeps_the_account_when_confirmation_fails() {
        let mut server = mockito::Server::new_async().await;
        let _register = server
            .mock("POST", "/api/register")
            .with_status(200)
            .with_body(r#"{"message":"User created successfully"}"#)
            .create_async()
            .await;
        let _relay = server
            .mock("POST", "/ajax/ada@example.com")
            .with_status(500)
            .create_async()
            .await;

        let client = MuseumClient::new(&format!("{}/api", server.url()));
        let relay = EmailRelay::new(&server.url());
        let outcome = sign_up(&client, &relay, &signup()).await.unwrap();
        assert!(matches!(outcome, SignupOutcome::ConfirmationFailed { .. }));
    }

    #[tokio::test]
    async fn test_cancel_checks_passwords_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = MuseumClient::new(&format!("{}/api", server.url()));
        let form = CancelForm {
            email: String::from("ada@example.com"),
            password: String::from("one"),
            confirm_password: String::from("two"),
        };
        let err = cancel(&client, &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
        mock.assert_async().await;
    }
}
