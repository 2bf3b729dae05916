use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{
    app, Activations, AuthAppResult, AuthOk, CreateAppOk, Message, INITIAL_ACTIVATIONS,
    TEST_LOGIN, TEST_PASSWORD, UPDATE_SUCCESS_MESSAGE,
};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn bearer_request(method: &str, uri: &str, token: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
        .body(String::new())
        .unwrap()
}

/// Authenticate with the seeded account and return a live access key.
async fn login(app: &axum::Router) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth",
            &format!(r#"{{"login":"{TEST_LOGIN}","password":"{TEST_PASSWORD}"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let ok: AuthOk = body_json(resp).await;
    ok.access_key
}

// --- auth ---

#[tokio::test]
async fn auth_with_valid_credentials_returns_access_key() {
    let app = app();
    let key = login(&app).await;
    assert!(!key.is_empty());
}

#[tokio::test]
async fn auth_with_wrong_password_returns_401() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth",
            &format!(r#"{{"login":"{TEST_LOGIN}","password":"wrong"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn auth_with_unknown_login_returns_401() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "POST",
            "/auth",
            r#"{"login":"nobody","password":"whatever"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- create_app ---

#[tokio::test]
async fn create_app_requires_bearer_token() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/create_app")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_app_rejects_unknown_token() {
    let app = app();
    let resp = app
        .oneshot(bearer_request("POST", "/create_app", "not-a-session"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_app_returns_key_with_initial_activations() {
    let app = app();
    let access_key = login(&app).await;

    let resp = app
        .clone()
        .oneshot(bearer_request("POST", "/create_app", &access_key))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let created: CreateAppOk = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/check_app?app_key={}", created.app_key))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let activations: Activations = body_json(resp).await;
    assert_eq!(activations.activations_left, INITIAL_ACTIVATIONS);
}

// --- auth_app ---

#[tokio::test]
async fn auth_app_known_key_returns_true() {
    let app = app();
    let access_key = login(&app).await;
    let resp = app
        .clone()
        .oneshot(bearer_request("POST", "/create_app", &access_key))
        .await
        .unwrap();
    let created: CreateAppOk = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(bearer_request(
            "POST",
            &format!("/auth_app?app_key={}", created.app_key),
            &access_key,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: AuthAppResult = body_json(resp).await;
    assert!(result.result);
}

#[tokio::test]
async fn auth_app_unknown_key_returns_false() {
    let app = app();
    let access_key = login(&app).await;
    let resp = app
        .clone()
        .oneshot(bearer_request(
            "POST",
            "/auth_app?app_key=missing",
            &access_key,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let result: AuthAppResult = body_json(resp).await;
    assert!(!result.result);
}

// --- check_app ---

#[tokio::test]
async fn check_app_unknown_key_returns_404() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .uri("/check_app?app_key=missing")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- update_app_key ---

#[tokio::test]
async fn update_app_key_sets_activations_and_confirms() {
    let app = app();
    let access_key = login(&app).await;
    let resp = app
        .clone()
        .oneshot(bearer_request("POST", "/create_app", &access_key))
        .await
        .unwrap();
    let created: CreateAppOk = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(bearer_request(
            "POST",
            &format!(
                "/update_app_key?app_key={}&num_activations=42",
                created.app_key
            ),
            &access_key,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let message: Message = body_json(resp).await;
    assert_eq!(message.message, UPDATE_SUCCESS_MESSAGE);

    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/check_app?app_key={}", created.app_key))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    let activations: Activations = body_json(resp).await;
    assert_eq!(activations.activations_left, 42);
}

#[tokio::test]
async fn update_app_key_unknown_key_returns_404() {
    let app = app();
    let access_key = login(&app).await;
    let resp = app
        .clone()
        .oneshot(bearer_request(
            "POST",
            "/update_app_key?app_key=missing&num_activations=1",
            &access_key,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
