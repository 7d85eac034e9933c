mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use serial_test::serial;

    use crate::test_utils::{json_request, test_app};
    use museum::api::routes::email::db::find_email;
    use museum::jobs::process_email_queue;
    use museum::relay::EmailRelay;

    fn queue_request(recipient: &str) -> axum::http::Request<axum::body::Body> {
        json_request(
            Method::POST,
            "/api/email/queue",
            json!({
                "recipient": recipient,
                "subject": "Membership confirmation",
                "body": "Welcome to the museum",
            }),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_queue_email() {
        let app = test_app().await;
        let (status, body) = app.request(queue_request("jane@example.com")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Email queued for delivery");

        let id = body["queue_id"].as_i64().unwrap();
        let email = find_email(&app.db, id).await.unwrap().unwrap();
        assert_eq!(email.status, "pending");
        assert_eq!(email.retry_count, 0);
        assert!(email.sent_at.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn test_queue_email_requires_address() {
        let app = test_app().await;
        let (status, body) = app.request(queue_request("not an address")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Recipient must be an email address");
    }

    #[tokio::test]
    #[serial]
    async fn test_queued_email_is_delivered() {
        let app = test_app().await;
        let (_, body) = app.request(queue_request("jane@example.com")).await;
        let id = body["queue_id"].as_i64().unwrap();

        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/ajax/jane@example.com")
            .match_body(mockito::Matcher::PartialJson(json!({
                "Subject": "Membership confirmation",
                "Message": "Welcome to the museum",
            })))
            .with_status(200)
            .with_body(r#"{"success": "true"}"#)
            .create_async()
            .await;

        let relay = EmailRelay::new(&server.url());
        let (sent, failed) = process_email_queue(&app.db, &relay).await.unwrap();
        mock.assert_async().await;
        assert_eq!((sent, failed), (1, 0));

        let email = find_email(&app.db, id).await.unwrap().unwrap();
        assert_eq!(email.status, "sent");
        assert!(email.sent_at.is_some());

        // Nothing left to send
        let (sent, failed) = process_email_queue(&app.db, &relay).await.unwrap();
        assert_eq!((sent, failed), (0, 0));
    }
}
