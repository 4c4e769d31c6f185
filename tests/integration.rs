#![cfg(test)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use iventice_backend::{
    base::{
        config::{Config, ConfigInner},
        knowledge::KnowledgeBase,
        types::Res,
    },
    http::build_router,
    responder::Responder,
    runtime::Runtime,
    service::db::{DbClient, DbConnection, GenericDbClient},
};
use mockall::mock;
use serde_json::{Value, json};
use tower::ServiceExt;

// Mocks.

// Mock document store for testing.

mock! {
    pub Db {}

    #[async_trait]
    impl GenericDbClient for Db {
        fn name(&self) -> &str;
        async fn create_document(&self, collection: &str, payload: &Value) -> Res<String>;
        async fn list_collections(&self) -> Res<Vec<String>>;
    }
}

/// Helper function to build a runtime around the given store connection.
fn runtime_with(db: DbConnection) -> Runtime {
    let config = Config::from(ConfigInner {
        database_url: Some("mem://".to_string()),
        database_name: Some("iventice".to_string()),
        ..Default::default()
    });

    let responder = Responder::new(Arc::new(KnowledgeBase::builtin().expect("builtin knowledge base parses")));

    Runtime { config, responder, db }
}

fn mocked(mock: MockDb) -> Runtime {
    runtime_with(DbConnection::Ready(DbClient::new(Arc::new(mock))))
}

/// Sends a request through the router and returns the status and JSON body.
async fn send(app: Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    if body.is_some() {
        request = request.header("content-type", "application/json");
    }

    let request = request.body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty)).unwrap();
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(&body.to_string())).await
}

// Root.

#[tokio::test]
async fn test_root_reports_running() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = send(app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "iVentice backend is running" }));
}

// Chat.

#[tokio::test]
async fn test_chat_answers_mission() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = post_json(app, "/chat", json!({ "question": "What is your MISSION?" })).await;

    assert_eq!(status, StatusCode::OK);
    let answer = body["answer"].as_str().unwrap();
    assert!(answer.starts_with("Mission:"));
    assert!(answer.contains("Vision:"));
    assert!(answer.contains("Values (iVENTICE):"));
}

#[tokio::test]
async fn test_chat_is_deterministic() {
    let runtime = runtime_with(DbConnection::Disabled);

    let (_, first) = post_json(build_router(runtime.clone()), "/chat", json!({ "question": "Who is Sarah?" })).await;
    let (_, second) = post_json(build_router(runtime), "/chat", json!({ "question": "Who is Sarah?" })).await;

    assert_eq!(first, second);
    assert!(first["answer"].as_str().unwrap().starts_with("Sarah Wanjiru Gachie — Agriculture and Plant Consultant"));
}

#[tokio::test]
async fn test_chat_rejects_short_question() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = post_json(app, "/chat", json!({ "question": "?" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "question"]));
    assert_eq!(body["detail"][0]["type"], "string_too_short");
}

#[tokio::test]
async fn test_chat_rejects_missing_field() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = post_json(app, "/chat", json!({ "query": "services" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
}

#[tokio::test]
async fn test_chat_rejects_malformed_json() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = send(app, "POST", "/chat", Some("{\"question\": ")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body"]));
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn test_chat_rejects_empty_body() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, body) = send(app, "POST", "/chat", Some("")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["type"], "json_invalid");
}

#[tokio::test]
async fn test_chat_accepts_body_without_content_type() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .body(Body::from(json!({ "question": "What services do you offer?" }).to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["answer"].as_str().unwrap().starts_with("We operate through transdisciplinary guiding teams:"));
}

// Contact.

#[tokio::test]
async fn test_contact_stores_message() {
    let mut db = MockDb::new();

    db.expect_create_document().times(1).returning(|collection, payload| {
        assert_eq!(collection, "contactmessage");
        assert_eq!(payload["name"], "Jo");
        assert_eq!(payload["email"], "jo@example.com");
        assert_eq!(payload["message"], "1234567890");
        assert!(payload["submitted_at"].is_string());

        Ok("abc123".to_string())
    });

    let app = build_router(mocked(db));

    let (status, body) = post_json(app, "/contact", json!({ "name": "Jo", "email": "jo@example.com", "message": "1234567890" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "id": "abc123" }));
}

#[tokio::test]
async fn test_contact_rejects_short_message_without_storing() {
    let mut db = MockDb::new();
    db.expect_create_document().never();

    let app = build_router(mocked(db));

    let (status, body) = post_json(app, "/contact", json!({ "name": "Jo", "email": "jo@example.com", "message": "123456789" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"].as_array().unwrap().len(), 1);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "message"]));
}

#[tokio::test]
async fn test_contact_rejects_bad_email() {
    let mut db = MockDb::new();
    db.expect_create_document().never();

    let app = build_router(mocked(db));

    let (status, body) = post_json(app, "/contact", json!({ "name": "Jo", "email": "jo-at-example", "message": "Hello there, team!" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"][0]["loc"], json!(["body", "email"]));
}

#[tokio::test]
async fn test_contact_accepts_non_ascii_email() {
    let mut db = MockDb::new();
    db.expect_create_document().times(1).returning(|_, payload| {
        assert_eq!(payload["email"], "josé@münchen.de");
        Ok("xyz".to_string())
    });

    let app = build_router(mocked(db));

    let (status, body) = post_json(app, "/contact", json!({ "name": "José", "email": "josé@münchen.de", "message": "Hola, we need a proposal." })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "xyz");
}

#[tokio::test]
async fn test_contact_store_failure_is_internal_error() {
    let mut db = MockDb::new();
    db.expect_create_document().times(1).returning(|_, _| Err(anyhow::anyhow!("connection reset")));

    let app = build_router(mocked(db));

    let (status, body) = post_json(app, "/contact", json!({ "name": "Jo", "email": "jo@example.com", "message": "Please call me back." })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "detail": "Internal Server Error" }));
}

#[tokio::test]
async fn test_contact_without_store_is_internal_error() {
    let app = build_router(runtime_with(DbConnection::Disabled));

    let (status, _) = post_json(app, "/contact", json!({ "name": "Jo", "email": "jo@example.com", "message": "Please call me back." })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// Diagnostics.

#[tokio::test]
async fn test_diagnostics_lists_at_most_ten_collections() {
    let mut db = MockDb::new();
    db.expect_list_collections().returning(|| Ok((0..12).map(|i| format!("collection{i:02}")).collect()));

    let app = build_router(mocked(db));

    let (status, body) = send(app, "GET", "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "✅ Connected & Working");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["database_url"], "✅ Set");
    assert_eq!(body["database_name"], "iventice");
    assert_eq!(body["collections"].as_array().unwrap().len(), 10);
    assert_eq!(body["collections"][9], "collection09");
}

#[tokio::test]
async fn test_diagnostics_folds_store_errors() {
    let mut db = MockDb::new();
    db.expect_list_collections()
        .returning(|| Err(anyhow::anyhow!("permission denied while listing tables in the current database")));

    let app = build_router(mocked(db));

    let (status, body) = send(app, "GET", "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    let database = body["database"].as_str().unwrap();
    assert!(database.starts_with("⚠️  Connected but Error: permission denied"));
    assert_eq!(database.chars().count(), "⚠️  Connected but Error: ".chars().count() + 50);
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!([]));
}

#[tokio::test]
async fn test_diagnostics_reports_failed_connection() {
    let app = build_router(runtime_with(DbConnection::Failed("There was an error connecting".to_string())));

    let (status, body) = send(app, "GET", "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "❌ Error: There was an error connecting");
    assert_eq!(body["connection_status"], "Not Connected");
}

#[tokio::test]
async fn test_diagnostics_blank_database_name() {
    let config = Config::from(ConfigInner {
        database_url: Some("mem://".to_string()),
        database_name: Some(String::new()),
        ..Default::default()
    });
    let runtime = Runtime { config, ..runtime_with(DbConnection::Disabled) };

    let (status, body) = send(build_router(runtime), "GET", "/test", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database_name"], "❌ Not Set");
    assert_eq!(body["database_url"], "✅ Set");
}

// In-memory SurrealDB end to end.

#[tokio::test]
async fn test_contact_round_trip_with_memory_store() {
    let db = DbClient::surreal_memory().await.expect("Failed to create DB client");
    let runtime = runtime_with(DbConnection::Ready(db));

    let (status, body) = post_json(
        build_router(runtime.clone()),
        "/contact",
        json!({ "name": "Wanjiru", "email": "wanjiru@example.co.ke", "message": "We would like a carbon assessment." }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["id"].as_str().unwrap().is_empty());

    let (_, report) = send(build_router(runtime), "GET", "/test", None).await;

    assert_eq!(report["database"], "✅ Connected & Working");
    assert_eq!(report["collections"], json!(["contactmessage"]));
}
