mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use serial_test::serial;

    use crate::test_utils::{get_request, json_request, test_app};
    use museum::api::public::admin::{AdminEventsResponse, AdminHolidaysResponse, NewsletterLogsResponse};

    #[tokio::test]
    #[serial]
    async fn test_admin_lists_events_with_ids() {
        let app = test_app().await;
        let (status, body) = app.request(get_request("/api/admin/events")).await;
        assert_eq!(status, StatusCode::OK);

        let events: AdminEventsResponse = serde_json::from_value(body).unwrap();
        assert!(!events.is_empty());
        assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(events[0].title, "Conversation Pieces");
    }

    #[tokio::test]
    #[serial]
    async fn test_admin_lists_holidays_with_ids() {
        let app = test_app().await;
        let (status, body) = app.request(get_request("/api/admin/holidays")).await;
        assert_eq!(status, StatusCode::OK);

        let holidays: AdminHolidaysResponse = serde_json::from_value(body).unwrap();
        assert_eq!(holidays.len(), 6);
        assert_eq!(holidays[0].name, "New Year's Day");
        assert_eq!(holidays[5].name, "Christmas Day");
    }

    #[tokio::test]
    #[serial]
    async fn test_trigger_newsletter_logs_every_member() {
        let app = test_app().await;
        app.member_token("jane@example.com", "hunter2").await;
        app.member_token("sam@example.com", "hunter2").await;

        let (status, body) = app
            .request(json_request(
                Method::POST,
                "/api/admin/newsletter/test-trigger",
                json!({}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["message"],
            "Newsletter task triggered manually. Check server logs and newsletter_logs table."
        );

        let (status, body) = app
            .request(get_request("/api/admin/newsletter/logs"))
            .await;
        assert_eq!(status, StatusCode::OK);
        let logs: NewsletterLogsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.status == "sent"));
        let mut emails = logs.iter().map(|l| l.user_email.as_str()).collect::<Vec<_>>();
        emails.sort();
        assert_eq!(emails, vec!["jane@example.com", "sam@example.com"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_newsletter_logs_are_newest_first_and_capped() {
        let app = test_app().await;
        app.member_token("jane@example.com", "hunter2").await;
        for _ in 0..55 {
            app.request(json_request(
                Method::POST,
                "/api/admin/newsletter/test-trigger",
                json!({}),
            ))
            .await;
        }

        let (_, body) = app
            .request(get_request("/api/admin/newsletter/logs"))
            .await;
        let logs: NewsletterLogsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(logs.len(), 50);
        assert!(logs.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[tokio::test]
    #[serial]
    async fn test_trigger_newsletter_without_members() {
        let app = test_app().await;
        let (status, _) = app
            .request(json_request(
                Method::POST,
                "/api/admin/newsletter/test-trigger",
                json!({}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = app
            .request(get_request("/api/admin/newsletter/logs"))
            .await;
        assert_eq!(body, json!([]));
    }
}
