//! The admin panel for managing calendar events and holidays.
use anyhow::{Error, Result, bail};
use chrono::NaiveDate;

use crate::api::public::events::{CreateEventRequest, Event};
use crate::api::public::holidays::{CreateHolidayRequest, Holiday};
use crate::client::MuseumClient;
use crate::core::AppConfig;

pub const CONFIRM_DELETE_EVENT: &str = "Are you sure you want to delete this event?";
pub const CONFIRM_DELETE_HOLIDAY: &str = "Are you sure you want to delete this holiday?";

pub fn check_password(config: &AppConfig, password: &str) -> bool {
    password == config.admin_password
}

pub struct AdminPanel {
    client: MuseumClient,
}

impl AdminPanel {
    /// Open the panel if `password` is the admin password
    pub fn login(config: &AppConfig, client: MuseumClient, password: &str) -> Result<Self, Error> {
        if !check_password(config, password) {
            tracing::warn!("Rejected admin login");
            bail!("Invalid password");
        }
        Ok(Self { client })
    }

    pub async fn events(&self) -> Result<Vec<Event>, Error> {
        self.client.admin_events().await
    }

    pub async fn holidays(&self) -> Result<Vec<Holiday>, Error> {
        self.client.admin_holidays().await
    }

    pub async fn add_event(
        &self,
        title: &str,
        date: NaiveDate,
        description: Option<&str>,
    ) -> Result<Event, Error> {
        if title.trim().is_empty() {
            bail!("Event title is required");
        }
        let request = CreateEventRequest {
            title: title.trim().to_string(),
            date,
            description: description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
        };
        self.client.create_event(&request).await
    }

    pub async fn add_holiday(&self, name: &str, date: NaiveDate) -> Result<Holiday, Error> {
        if name.trim().is_empty() {
            bail!("Holiday name is required");
        }
        let request = CreateHolidayRequest {
            name: name.trim().to_string(),
            date,
        };
        self.client.create_holiday(&request).await
    }

    /// Delete after `confirm` agrees. Returns whether anything was
    /// deleted.
    pub async fn delete_event<F>(&self, id: i64, confirm: F) -> Result<bool, Error>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CONFIRM_DELETE_EVENT) {
            return Ok(false);
        }
        self.client.delete_event(id).await?;
        tracing::info!("Deleted event {}", id);
        Ok(true)
    }

    pub async fn delete_holiday<F>(&self, id: i64, confirm: F) -> Result<bool, Error>
    where
        F: FnOnce(&str) -> bool,
    {
        if !confirm(CONFIRM_DELETE_HOLIDAY) {
            return Ok(false);
        }
        self.client.delete_holiday(id).await?;
        tracing::info!("Deleted holiday {}", id);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            admin_password: String::from("letmein"),
            ..AppConfig::default()
        }
    }

    #[test]
    fn it_checks_the_admin_password() {
        assert!(check_password(&config(), "letmein"));
        assert!(!check_password(&config(), "admin123"));
        assert!(AdminPanel::login(&config(), MuseumClient::new("http://localhost:1"), "nope").is_err());
    }

    #[tokio::test]
    async fn test_delete_waits_for_confirmation() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/api/events/7")
            .with_status(200)
            .with_body(r#"{"status":"deleted"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = MuseumClient::new(&format!("{}/api", server.url()));
        let panel = AdminPanel::login(&config(), client, "letmein").unwrap();

        assert!(!panel.delete_event(7, |_| false).await.unwrap());
        assert!(
            panel
                .delete_event(7, |prompt| prompt == CONFIRM_DELETE_EVENT)
                .await
                .unwrap()
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_event_requires_a_title() {
        let panel =
            AdminPanel::login(&config(), MuseumClient::new("http://localhost:1"), "letmein")
                .unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
        let err = panel.add_event("  ", date, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Event title is required");
    }
}
