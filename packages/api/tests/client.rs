use api::{ApiClient, ApiConfig, ApiError, MarketplaceApi, Role};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

const GOOD_TOKEN: &str = "good-token";

fn check(headers: &HeaderMap) -> Result<(), (StatusCode, String)> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    if content_type != Some("application/json") {
        return Err((StatusCode::UNSUPPORTED_MEDIA_TYPE, "json only".to_string()));
    }
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let expected = format!("Bearer {GOOD_TOKEN}");
    if auth != Some(expected.as_str()) {
        return Err((StatusCode::UNAUTHORIZED, "jwt expired".to_string()));
    }
    Ok(())
}

async fn user_by_token(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, String)> {
    check(&headers)?;
    Ok(Json(json!({
        "fullname": "Tran Thi B",
        "role": "Student",
        "avatar": "https://cdn.test/b.png",
        "email": "b@test"
    })))
}

async fn show_balance(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, String)> {
    check(&headers)?;
    Ok(Json(json!({ "current_balance": 500 })))
}

async fn show_wallet_admin(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, String)> {
    check(&headers)?;
    Ok(Json(json!({ "current_balance": 10000, "total_income": 42000 })))
}

async fn logout(headers: HeaderMap) -> Result<(), (StatusCode, String)> {
    check(&headers)
}

async fn spawn_backend() -> ApiClient {
    let app = Router::new()
        .route("/api/users/get-user-by-token", get(user_by_token))
        .route("/api/wallet/show-balance", get(show_balance))
        .route("/api/wallet/show-wallet-admin", get(show_wallet_admin))
        .route("/api/users/logout", post(logout));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    ApiClient::new(&ApiConfig {
        base_url: format!("http://{addr}/"),
    })
    .unwrap()
}

#[tokio::test]
async fn test_user_by_token() {
    let api = spawn_backend().await;

    let profile = api.user_by_token(GOOD_TOKEN).await.unwrap();
    assert_eq!(profile.fullname(), Some("Tran Thi B"));
    assert_eq!(profile.role(), Some(Role::Student));
    assert_eq!(profile.avatar(), Some("https://cdn.test/b.png"));
}

#[tokio::test]
async fn test_expired_token_reports_status_and_body() {
    let api = spawn_backend().await;

    let err = api.user_by_token("stale").await.unwrap_err();
    match &err {
        ApiError::Status { status, body } => {
            assert_eq!(*status, 401);
            assert_eq!(body, "jwt expired");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_wallet_endpoints() {
    let api = spawn_backend().await;

    let balance = api.show_balance(GOOD_TOKEN).await.unwrap();
    assert_eq!(balance.amount(), 500.0);

    let wallet = api.show_wallet_admin(GOOD_TOKEN).await.unwrap();
    assert_eq!(wallet.amount(), 10000.0);
    assert_eq!(wallet.extra.get("total_income"), Some(&json!(42000)));
}

#[tokio::test]
async fn test_logout() {
    let api = spawn_backend().await;

    api.logout(GOOD_TOKEN).await.unwrap();
    assert_eq!(api.logout("stale").await.unwrap_err().status(), Some(401));
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let api = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:1/".to_string(),
    })
    .unwrap();

    let err = api.show_balance(GOOD_TOKEN).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), None);
}
