use crate::helpers::spawn_app;
use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, Request, ResponseTemplate};

fn valid_body() -> serde_json::Value {
    json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello"
    })
}

/// Matches provider requests by their `To` recipient.
struct ToMatcher(String);

impl wiremock::Match for ToMatcher {
    fn matches(&self, request: &Request) -> bool {
        serde_json::from_slice::<serde_json::Value>(&request.body)
            .map(|body| body.get("To").and_then(|v| v.as_str()) == Some(self.0.as_str()))
            .unwrap_or(false)
    }
}

#[tokio::test]
async fn valid_submission_returns_200_and_sends_two_emails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(valid_body()).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"success": true, "message": "Message sent successfully!"})
    );

    let requests = app.email_requests().await;
    assert_eq!(requests.len(), 2);

    let notification: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let confirmation: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();

    assert_eq!(notification["To"], app.operator_email.as_str());
    assert_eq!(notification["ReplyTo"], "ada@example.com");
    assert!(notification["Subject"].as_str().unwrap().contains("Ada"));
    assert_eq!(confirmation["To"], "ada@example.com");
    assert_eq!(confirmation["Subject"], "Thank you for contacting me!");
}

#[tokio::test]
async fn incomplete_submission_returns_400_and_issues_no_sends() {
    let app = spawn_app().await;

    let test_cases = vec![
        (json!({"email": "ada@example.com", "message": "Hello"}), "missing the name"),
        (json!({"name": "Ada", "message": "Hello"}), "missing the email"),
        (json!({"name": "Ada", "email": "ada@example.com"}), "missing the message"),
        (
            json!({"name": "", "email": "ada@example.com", "message": "Hello"}),
            "empty name",
        ),
        (
            json!({"name": "   ", "email": "ada@example.com", "message": "Hello"}),
            "whitespace-only name",
        ),
        (
            json!({"name": "Ada", "email": "", "message": "Hello"}),
            "empty email",
        ),
        (
            json!({"name": "Ada", "email": "ada@example.com", "message": ""}),
            "empty message",
        ),
        (json!({}), "missing every field"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(body).await;

        assert_eq!(
            response.status().as_u16(),
            400,
            "The API did not reject a payload that was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "All fields are required"}));
    }

    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn notification_failure_returns_500_and_skips_the_confirmation() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "Failed to send message. Please try again later."})
    );
    assert_eq!(app.email_requests().await.len(), 1);
}

#[tokio::test]
async fn confirmation_failure_still_returns_the_generic_failure() {
    let app = spawn_app().await;

    Mock::given(ToMatcher(app.operator_email.clone()))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    Mock::given(ToMatcher("ada@example.com".to_string()))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({"error": "Failed to send message. Please try again later."})
    );
    assert_eq!(app.email_requests().await.len(), 2);
}

#[tokio::test]
async fn provider_error_detail_never_reaches_the_caller() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string("Unauthorized: server token 'pm-secret-token' was rejected"),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(valid_body()).await;

    assert_eq!(response.status().as_u16(), 500);
    let text = response.text().await.unwrap();
    assert!(!text.contains("Unauthorized"));
    assert!(!text.contains("token"));
    let body: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        body,
        json!({"error": "Failed to send message. Please try again later."})
    );
}
