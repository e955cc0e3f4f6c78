//! Integration tests for the syllabus API endpoint

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{Value, json};
    use tower::util::ServiceExt;

    use crate::test_utils::{body_to_string, test_app, test_config};

    const SYLLABUS_JSON: &str = r#"{"topic": "Linear Algebra", "modules": [
        {"id": 1, "title": "Vectors", "description": "What a vector is", "video_url": "https://www.youtube.com/watch?v=fNk_zzaMoSs", "channel": "3Blue1Brown", "duration": "9:52"},
        {"id": 2, "title": "Linear combinations", "description": "Span and basis", "video_url": "https://youtu.be/k7RM-ot2NWY"}
    ]}"#;

    fn completion_body(content: &str) -> String {
        json!({
            "choices": [{"message": {"role": "assistant", "content": content}}]
        })
        .to_string()
    }

    fn syllabus_request(body: Value) -> Request<Body> {
        Request::builder()
            .uri("/api/generate-syllabus")
            .method("POST")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    /// Tests a fenced completion is unwrapped and stamped
    #[tokio::test]
    async fn it_generates_a_syllabus() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer test-perplexity-key")
            .match_body(mockito::Matcher::PartialJson(json!({
                "model": "sonar-pro",
                "temperature": 0.2,
                "max_tokens": 2000,
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(&format!("```json\n{}\n```", SYLLABUS_JSON)))
            .expect(1)
            .create_async()
            .await;

        let app = test_app(test_config(&server.url()));
        let response = app
            .oneshot(syllabus_request(json!({"topic": "Linear Algebra"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        mock.assert_async().await;

        let body: Value = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
        assert_eq!(body["topic"], "Linear Algebra");
        assert_eq!(body["modules"].as_array().unwrap().len(), 2);
        assert_eq!(body["modules"][0]["channel"], "3Blue1Brown");
        assert!(body["generated_at"].as_str().unwrap().ends_with('Z'));
    }

    /// Tests blank topics are rejected without calling upstream
    #[tokio::test]
    async fn it_rejects_blank_topics() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .expect(0)
            .create_async()
            .await;

        for body in [json!({"topic": ""}), json!({"topic": "   "}), json!({})] {
            let app = test_app(test_config(&server.url()));
            let response = app.oneshot(syllabus_request(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body = body_to_string(response.into_body()).await;
            assert!(body.contains("Topic is required"));
        }
        mock.assert_async().await;
    }

    /// Tests a body that isn't JSON is a bad request
    #[tokio::test]
    async fn it_rejects_malformed_bodies() {
        let app = test_app(test_config("http://127.0.0.1:1"));
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/generate-syllabus")
                    .method("POST")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
        assert!(body["error"].is_string());
    }

    /// Tests a missing credential is a server error
    #[tokio::test]
    async fn it_fails_without_credentials() {
        let mut config = test_config("http://127.0.0.1:1");
        config.perplexity_api_key = None;

        let response = test_app(config)
            .oneshot(syllabus_request(json!({"topic": "Rust"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Perplexity API key not configured"));
    }

    /// Tests upstream failures are reported with the status text
    #[tokio::test]
    async fn it_reports_upstream_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .create_async()
            .await;

        let response = test_app(test_config(&server.url()))
            .oneshot(syllabus_request(json!({"topic": "Rust"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("Perplexity API error: Too Many Requests"));
    }

    /// Tests prose without any JSON is a parse failure
    #[tokio::test]
    async fn it_reports_unparseable_syllabus() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body("Sorry, I can't help with that."))
            .create_async()
            .await;

        let response = test_app(test_config(&server.url()))
            .oneshot(syllabus_request(json!({"topic": "Rust"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
