//! API integration tests

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use books_api::{api::create_router, config::AppConfig, AppState};

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn app() -> Router {
    create_router(AppState::new(AppConfig::default()))
}

/// Send one request and return the status with the parsed JSON body
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> Result<(StatusCode, Value), Box<dyn std::error::Error>> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, serde_json::from_slice(&bytes)?))
}

#[tokio::test]
async fn test_health_check() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/health", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 2);
    Ok(())
}

#[tokio::test]
async fn test_welcome_lists_endpoints() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to Books API");
    assert_eq!(body["endpoints"]["DELETE /books/:id"], "Delete book");
    Ok(())
}

#[tokio::test]
async fn test_list_books() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/books", None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["title"], "1984");
    assert_eq!(body["data"][1]["title"], "To Kill a Mockingbird");
    assert!(body.get("message").is_none());
    Ok(())
}

#[tokio::test]
async fn test_get_book_not_found() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/books/42", None).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Book with ID 42 not found" })
    );
    Ok(())
}

#[tokio::test]
async fn test_lenient_id_parsing() -> TestResult {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/api/books/2abc", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 2);
    assert!(body.get("message").is_none());

    let (status, body) = send(&app, Method::GET, "/api/books/0x2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "To Kill a Mockingbird");

    let (status, body) = send(&app, Method::GET, "/api/books/abc", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID NaN not found");
    Ok(())
}

#[tokio::test]
async fn test_invalid_path_id_uses_envelope() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/books/%FF", None).await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_responses_are_json() -> TestResult {
    let app = app();
    for uri in ["/api/books", "/api/books/1", "/api/books/404", "/"] {
        let request = Request::builder().uri(uri).body(Body::empty())?;
        let response = app.clone().oneshot(request).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        assert_eq!(content_type, Some("application/json"), "{}", uri);
    }
    Ok(())
}

#[tokio::test]
async fn test_create_book_validation() -> TestResult {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "Dune" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Please provide both title and author" })
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "", "author": "Frank Herbert" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // No body at all
    let (status, body) = send(&app, Method::POST, "/api/books", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide both title and author");
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_uses_envelope() -> TestResult {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/books")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))?;

    let response = app.oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["success"], false);
    assert!(body["message"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_update_empty_body_returns_unchanged() -> TestResult {
    let app = app();
    let (status, body) = send(&app, Method::PUT, "/api/books/2", Some(json!({}))).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book updated successfully");
    assert_eq!(
        body["data"],
        json!({ "id": 2, "title": "To Kill a Mockingbird", "author": "Harper Lee" })
    );
    Ok(())
}

#[tokio::test]
async fn test_update_with_empty_author_keeps_author() -> TestResult {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/books/1",
        Some(json!({ "title": "Animal Farm", "author": "" })),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": 1, "title": "Animal Farm", "author": "George Orwell" })
    );
    Ok(())
}

#[tokio::test]
async fn test_update_missing_book() -> TestResult {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/books/9",
        Some(json!({ "title": "Ghost" })),
    )
    .await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID 9 not found");
    Ok(())
}

#[tokio::test]
async fn test_delete_is_not_repeatable() -> TestResult {
    let app = app();

    let (status, body) = send(&app, Method::DELETE, "/api/books/2", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Book deleted successfully");
    assert_eq!(body["data"]["author"], "Harper Lee");

    let (status, _) = send(&app, Method::DELETE, "/api/books/2", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleted ids are not handed out again
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "Emma", "author": "Jane Austen" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["id"], 3);

    let (_, body) = send(&app, Method::GET, "/api/books", None).await?;
    assert_eq!(body["count"], 2);
    Ok(())
}

#[tokio::test]
async fn test_book_lifecycle_scenario() -> TestResult {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "Dune", "author": "Frank Herbert" })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "success": true,
            "message": "Book created successfully",
            "data": { "id": 3, "title": "Dune", "author": "Frank Herbert" }
        })
    );

    let (status, body) = send(&app, Method::GET, "/api/books/3", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "id": 3, "title": "Dune", "author": "Frank Herbert" }
        })
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/books/3",
        Some(json!({ "title": "Dune Messiah" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Dune Messiah");
    assert_eq!(body["data"]["author"], "Frank Herbert");

    let (status, body) = send(&app, Method::DELETE, "/api/books/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "id": 1, "title": "1984", "author": "George Orwell" })
    );

    let (status, body) = send(&app, Method::GET, "/api/books/1", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Book with ID 1 not found");

    let (_, body) = send(&app, Method::GET, "/api/books", None).await?;
    assert_eq!(body["count"], 2);
    assert_eq!(body["data"][0]["id"], 2);
    assert_eq!(body["data"][1]["id"], 3);
    Ok(())
}

#[tokio::test]
async fn test_unseeded_store_starts_empty() -> TestResult {
    let mut config = AppConfig::default();
    config.store.seed = false;
    let app = create_router(AppState::new(config));

    let (_, body) = send(&app, Method::GET, "/api/books", None).await?;
    assert_eq!(body, json!({ "success": true, "count": 0, "data": [] }));

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/books",
        Some(json!({ "title": "First", "author": "Writer" })),
    )
    .await?;
    assert_eq!(body["data"]["id"], 1);
    Ok(())
}
