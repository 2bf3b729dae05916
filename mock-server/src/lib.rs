//! In-memory mock of the licensing service.
//!
//! Models the contract the client assumes: one seeded account, access keys
//! minted per login, app keys with activation counts. State lives behind an
//! `Arc<RwLock<_>>` so the router can be cloned across test calls.

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Credentials of the single seeded account.
pub const TEST_LOGIN: &str = "demo";
pub const TEST_PASSWORD: &str = "demo-password";

/// Activation count assigned to freshly created app keys.
pub const INITIAL_ACTIVATIONS: i64 = 3;

/// Exact message returned by a successful `update_app_key`.
pub const UPDATE_SUCCESS_MESSAGE: &str = "App key activations updated successfully";

#[derive(Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct AuthOk {
    pub access_key: String,
}

#[derive(Serialize, Deserialize)]
pub struct CreateAppOk {
    pub app_key: String,
}

#[derive(Serialize, Deserialize)]
pub struct AuthAppResult {
    pub result: bool,
}

#[derive(Serialize, Deserialize)]
pub struct Activations {
    pub activations_left: i64,
}

#[derive(Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

#[derive(Deserialize)]
struct AppKeyQuery {
    app_key: String,
}

#[derive(Deserialize)]
struct UpdateQuery {
    app_key: String,
    num_activations: i64,
}

#[derive(Default)]
pub struct ServerState {
    users: HashMap<String, String>,
    sessions: HashSet<String>,
    apps: HashMap<String, i64>,
}

pub type Db = Arc<RwLock<ServerState>>;

pub fn app() -> Router {
    let mut state = ServerState::default();
    state
        .users
        .insert(TEST_LOGIN.to_string(), TEST_PASSWORD.to_string());
    let db: Db = Arc::new(RwLock::new(state));
    Router::new()
        .route("/auth", post(auth))
        .route("/create_app", post(create_app))
        .route("/auth_app", post(auth_app))
        .route("/check_app", get(check_app))
        .route("/update_app_key", post(update_app_key))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Extract the token from a `Bearer <token>` Authorization header.
fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

async fn authorized(db: &Db, headers: &HeaderMap) -> bool {
    match bearer(headers) {
        Some(token) => db.read().await.sessions.contains(token),
        None => false,
    }
}

async fn auth(
    State(db): State<Db>,
    Json(input): Json<Credentials>,
) -> Result<Json<AuthOk>, StatusCode> {
    let mut state = db.write().await;
    match state.users.get(&input.login) {
        Some(password) if *password == input.password => {
            let access_key = Uuid::new_v4().to_string();
            state.sessions.insert(access_key.clone());
            Ok(Json(AuthOk { access_key }))
        }
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

async fn create_app(
    State(db): State<Db>,
    headers: HeaderMap,
) -> Result<Json<CreateAppOk>, StatusCode> {
    if !authorized(&db, &headers).await {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let app_key = Uuid::new_v4().to_string();
    db.write()
        .await
        .apps
        .insert(app_key.clone(), INITIAL_ACTIVATIONS);
    Ok(Json(CreateAppOk { app_key }))
}

async fn auth_app(
    State(db): State<Db>,
    Query(query): Query<AppKeyQuery>,
    headers: HeaderMap,
) -> Result<Json<AuthAppResult>, StatusCode> {
    if !authorized(&db, &headers).await {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let result = db.read().await.apps.contains_key(&query.app_key);
    Ok(Json(AuthAppResult { result }))
}

async fn check_app(
    State(db): State<Db>,
    Query(query): Query<AppKeyQuery>,
) -> Result<Json<Activations>, StatusCode> {
    let state = db.read().await;
    state
        .apps
        .get(&query.app_key)
        .map(|n| Json(Activations { activations_left: *n }))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_app_key(
    State(db): State<Db>,
    Query(query): Query<UpdateQuery>,
    headers: HeaderMap,
) -> Result<Json<Message>, StatusCode> {
    if !authorized(&db, &headers).await {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut state = db.write().await;
    let activations = state
        .apps
        .get_mut(&query.app_key)
        .ok_or(StatusCode::NOT_FOUND)?;
    *activations = query.num_activations;
    Ok(Json(Message {
        message: UPDATE_SUCCESS_MESSAGE.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_ok_serializes_to_json() {
        let ok = AuthOk {
            access_key: "abc".to_string(),
        };
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["access_key"], "abc");
    }

    #[test]
    fn message_carries_exact_success_literal() {
        let msg = Message {
            message: UPDATE_SUCCESS_MESSAGE.to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["message"], "App key activations updated successfully");
    }
}
