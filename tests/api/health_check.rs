use crate::helpers::spawn_app;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "Server is running!"}));
}

#[tokio::test]
async fn health_check_is_unaffected_by_delivery_failures() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let contact_response = app
        .post_contact(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .await;
    assert_eq!(contact_response.status().as_u16(), 500);

    let response = app.get_health().await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({"status": "Server is running!"}));
    // The health probe itself reached no provider.
    assert_eq!(app.email_requests().await.len(), 1);
}
