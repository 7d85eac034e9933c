mod test_utils;

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serial_test::serial;

    use crate::test_utils::test_app;
    use museum::api::public::newsletter::Newsletter;

    fn newsletter_request(token: &str, accept_language: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .uri("/api/newsletter")
            .header(header::AUTHORIZATION, format!("Bearer {}", token));
        if let Some(lang) = accept_language {
            builder = builder.header(header::ACCEPT_LANGUAGE, lang);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    #[serial]
    async fn test_newsletter_defaults_to_english() {
        let app = test_app().await;
        let token = app.member_token("jane@example.com", "hunter2").await;
        let (status, body) = app.request(newsletter_request(&token, None)).await;
        assert_eq!(status, StatusCode::OK);

        let newsletter: Newsletter = serde_json::from_value(body).unwrap();
        assert_eq!(newsletter.title, "Monthly Institutional Review: A New Vision");
        assert!(!newsletter.sections.is_empty());
        assert!(!newsletter.verification_hash.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_newsletter_follows_accept_language() {
        let app = test_app().await;
        let token = app.member_token("jane@example.com", "hunter2").await;

        let (_, es) = app
            .request(newsletter_request(&token, Some("es-ES,es;q=0.9")))
            .await;
        assert_eq!(es["title"], "Revisión Institucional Mensual: Una Nueva Visión");

        let (_, fr) = app
            .request(newsletter_request(&token, Some("fr-FR,fr;q=0.9")))
            .await;
        assert_eq!(fr["title"], "Revue Institutionnelle Mensuelle : Une Nouvelle Vision");

        // The verification hash is the same in every language
        assert_eq!(es["verification_hash"], fr["verification_hash"]);
    }

    #[tokio::test]
    #[serial]
    async fn test_newsletter_sections_have_a_type() {
        let app = test_app().await;
        let token = app.member_token("jane@example.com", "hunter2").await;
        let (_, body) = app.request(newsletter_request(&token, None)).await;
        for section in body["sections"].as_array().unwrap() {
            assert!(section["type"].is_string());
            assert!(section["title"].is_string());
        }
    }
}
