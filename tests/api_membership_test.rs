mod test_utils;

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use serial_test::serial;

    use crate::test_utils::{bearer_request, json_request, login_request, test_app};
    use museum::api::routes::auth::db::find_user;
    use museum::api::routes::newsletter::db::latest_logs;

    fn cancel_request(email: &str, password: &str, confirm: &str) -> axum::http::Request<axum::body::Body> {
        json_request(
            Method::POST,
            "/api/membership/cancel",
            json!({
                "email": email,
                "password": password,
                "confirm_password": confirm,
            }),
        )
    }

    #[tokio::test]
    #[serial]
    async fn test_unsubscribe_deletes_account() {
        let app = test_app().await;
        let token = app.member_token("jane@example.com", "hunter2").await;
        let (status, _) = app
            .request(json_request(
                Method::POST,
                "/api/admin/newsletter/test-trigger",
                json!({}),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = app
            .request(bearer_request(
                Method::DELETE,
                "/api/membership/unsubscribe",
                &token,
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Successfully unsubscribed and account deleted");

        assert!(find_user(&app.db, "jane@example.com").await.unwrap().is_none());
        assert!(latest_logs(&app.db, 50).await.unwrap().is_empty());

        // The token went with the account
        let (status, _) = app
            .request(bearer_request(
                Method::DELETE,
                "/api/membership/unsubscribe",
                &token,
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_unsubscribe_requires_token() {
        let app = test_app().await;
        let (status, _) = app
            .request(json_request(
                Method::DELETE,
                "/api/membership/unsubscribe",
                json!({}),
            ))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_cancel_membership() {
        let app = test_app().await;
        app.member_token("jane@example.com", "hunter2").await;

        let (status, body) = app
            .request(cancel_request("Jane@Example.com", "hunter2", "hunter2"))
            .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Membership successfully cancelled");

        let (status, _) = app
            .request(login_request("jane@example.com", "hunter2"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_cancel_membership_errors() {
        let app = test_app().await;
        app.member_token("jane@example.com", "hunter2").await;

        let (status, body) = app
            .request(cancel_request("jane@example.com", "hunter2", "hunter3"))
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Passwords do not match");

        let (status, body) = app
            .request(cancel_request("nobody@example.com", "hunter2", "hunter2"))
            .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Account not found");

        let (status, body) = app
            .request(cancel_request("jane@example.com", "wrong", "wrong"))
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["detail"], "Incorrect password");

        // Still a member after the failed attempts
        assert!(find_user(&app.db, "jane@example.com").await.unwrap().is_some());
    }
}
