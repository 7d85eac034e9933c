//! Typed client for the museum REST API. This is what the site's
//! pages and the admin panel talk to.
use anyhow::{Error, Result, anyhow};
use chrono::NaiveDateTime;
use http::header;
use reqwest::{RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::api::public::admin::{
    AdminEventsResponse, AdminHolidaysResponse, NewsletterLogsResponse,
};
use crate::api::public::auth::{RegisterRequest, TokenResponse};
use crate::api::public::email::{QueueEmailRequest, QueueEmailResponse};
use crate::api::public::events::{CreateEventRequest, Event, EventsResponse};
use crate::api::public::holidays::{CreateHolidayRequest, Holiday, HolidaysResponse};
use crate::api::public::hours::HoursResponse;
use crate::api::public::membership::CancelMembershipRequest;
use crate::api::public::newsletter::Newsletter;
use crate::api::public::status::StatusResponse;
use crate::api::public::{DeletedResponse, MessageResponse};
use crate::calendar::EventCalendar;
use crate::core::Language;
use crate::visit::{MuseumStatus, museum_status};

#[derive(Clone, Debug)]
pub struct MuseumClient {
    base_url: String,
    client: reqwest::Client,
}

impl MuseumClient {
    /// `base_url` includes the `/api` prefix
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        send(self.client.get(self.url(path))).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        send(self.client.post(self.url(path)).json(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        send(self.client.delete(self.url(path))).await
    }

    pub async fn welcome(&self) -> Result<MessageResponse, Error> {
        self.get("").await
    }

    pub async fn status(&self) -> Result<StatusResponse, Error> {
        self.get("/status").await
    }

    pub async fn hours(&self) -> Result<HoursResponse, Error> {
        self.get("/hours").await
    }

    pub async fn events(&self) -> Result<EventsResponse, Error> {
        self.get("/events").await
    }

    pub async fn holidays(&self) -> Result<HolidaysResponse, Error> {
        self.get("/holidays").await
    }

    pub async fn admin_events(&self) -> Result<AdminEventsResponse, Error> {
        self.get("/admin/events").await
    }

    pub async fn admin_holidays(&self) -> Result<AdminHolidaysResponse, Error> {
        self.get("/admin/holidays").await
    }

    pub async fn create_event(&self, event: &CreateEventRequest) -> Result<Event, Error> {
        self.post("/events", event).await
    }

    pub async fn delete_event(&self, id: i64) -> Result<DeletedResponse, Error> {
        self.delete(&format!("/events/{}", id)).await
    }

    pub async fn create_holiday(&self, holiday: &CreateHolidayRequest) -> Result<Holiday, Error> {
        self.post("/holidays", holiday).await
    }

    pub async fn delete_holiday(&self, id: i64) -> Result<DeletedResponse, Error> {
        self.delete(&format!("/holidays/{}", id)).await
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<MessageResponse, Error> {
        let body = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/register", &body).await
    }

    /// Log in with the member's email and password. The email is
    /// trimmed and lowercased before sending.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, Error> {
        let email = crate::core::security::normalize_email(email);
        let form = [("username", email.as_str()), ("password", password)];
        send(self.client.post(self.url("/login")).form(&form)).await
    }

    pub async fn newsletter(&self, token: &str, lang: Language) -> Result<Newsletter, Error> {
        send(
            self.client
                .get(self.url("/newsletter"))
                .bearer_auth(token)
                .header(header::ACCEPT_LANGUAGE, lang.code()),
        )
        .await
    }

    pub async fn unsubscribe(&self, token: &str) -> Result<MessageResponse, Error> {
        send(
            self.client
                .delete(self.url("/membership/unsubscribe"))
                .bearer_auth(token),
        )
        .await
    }

    pub async fn cancel_membership(
        &self,
        request: &CancelMembershipRequest,
    ) -> Result<MessageResponse, Error> {
        self.post("/membership/cancel", request).await
    }

    pub async fn queue_email(
        &self,
        email: &QueueEmailRequest,
    ) -> Result<QueueEmailResponse, Error> {
        self.post("/email/queue", email).await
    }

    pub async fn trigger_newsletter(&self) -> Result<MessageResponse, Error> {
        send(self.client.post(self.url("/admin/newsletter/test-trigger"))).await
    }

    pub async fn newsletter_logs(&self) -> Result<NewsletterLogsResponse, Error> {
        self.get("/admin/newsletter/logs").await
    }

    /// Events and holidays for the calendar. Either request failing
    /// leaves that half empty rather than failing the page.
    pub async fn load_calendar(&self, lang: Language) -> EventCalendar {
        let (events, holidays) = tokio::join!(self.events(), self.holidays());
        let events = events.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch events: {}", e);
            EventsResponse::default()
        });
        let holidays = holidays.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch holidays: {}", e);
            HolidaysResponse::default()
        });
        EventCalendar::from_api(events, holidays, lang)
    }

    pub async fn museum_status(&self, now: NaiveDateTime) -> MuseumStatus {
        match tokio::try_join!(self.hours(), self.holidays()) {
            Ok((hours, holidays)) => museum_status(&hours, &holidays, now),
            Err(e) => {
                tracing::error!("Failed to fetch museum status: {}", e);
                MuseumStatus::Unavailable
            }
        }
    }
}

/// Send the request and decode the JSON body. Error responses are
/// turned into their `detail` message when there is one.
async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, Error> {
    let resp = request.send().await?;
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let err = error_detail(resp)
        .await
        .unwrap_or_else(|| anyhow!("Request failed with status {}", status));
    Err(err)
}

async fn error_detail(resp: Response) -> Option<Error> {
    let body = resp.json::<Value>().await.ok()?;
    let detail = body.get("detail")?.as_str()?;
    Some(anyhow!(detail.to_string()))
}
