mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use mockall::predicate::eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{app_with, book_from_draft, sample_book, MockBookRepo};

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn root_redirects_to_listing() {
    let app = app_with(MockBookRepo::new());
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/books");
}

#[tokio::test]
async fn health_reports_up() {
    let app = app_with(MockBookRepo::new());
    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "up");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn listing_returns_page_envelope() {
    let mut repo = MockBookRepo::new();
    repo.expect_list()
        .returning(|| Ok(vec![sample_book(1), sample_book(2)]));

    let app = app_with(repo);
    let response = app.oneshot(get("/books")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["books"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["page"], 1);
    assert_eq!(body["pageCount"], 1);
    assert_eq!(body["totalBooks"], 2);
}

#[tokio::test]
async fn listing_accepts_page_parameter() {
    let mut repo = MockBookRepo::new();
    repo.expect_count().returning(|| Ok(12));
    repo.expect_list_page()
        .with(eq(10), eq(10))
        .returning(|_, _| Ok(vec![sample_book(11), sample_book(12)]));

    let app = app_with(repo);
    let response = app.oneshot(get("/books?page=2")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["page"], 2);
    assert_eq!(body["pageCount"], 2);
    assert_eq!(body["totalBooks"], 12);
}

#[tokio::test]
async fn listing_rejects_invalid_page() {
    let app = app_with(MockBookRepo::new());
    let response = app.oneshot(get("/books?page=0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Page number must be positive");
}

#[tokio::test]
async fn detail_returns_book_as_camel_case_json() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(sample_book(id))));

    let app = app_with(repo);
    let response = app.oneshot(get("/books/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "The Martian");
    assert_eq!(body["genre"], "Science Fiction");
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn detail_of_missing_book_is_404() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let app = app_with(repo);
    let response = app.oneshot(get("/books/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["error"], "Book with ID 99 not found");
}

#[tokio::test]
async fn create_returns_created_book() {
    let mut repo = MockBookRepo::new();
    repo.expect_insert()
        .returning(|draft| Ok(book_from_draft(15, draft)));

    let app = app_with(repo);
    let response = app
        .oneshot(post_json(
            "/books/new",
            json!({
                "title": "Armada",
                "author": "Ernest Cline",
                "genre": "Science Fiction",
                "year": 2015
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    assert_eq!(body["id"], 15);
    assert_eq!(body["title"], "Armada");
    assert_eq!(body["year"], 2015);
}

#[tokio::test]
async fn create_with_invalid_fields_returns_field_errors() {
    let mut repo = MockBookRepo::new();
    repo.expect_insert().times(0);

    let app = app_with(repo);
    let response = app
        .oneshot(post_json(
            "/books/new",
            json!({ "title": "", "author": "  ", "year": 12345 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["errors"]["title"][0], "must not be empty");
    assert_eq!(body["errors"]["author"][0], "must not be empty");
    assert_eq!(body["errors"]["year"][0], "must be between 0 and 9999");
}

#[tokio::test]
async fn update_returns_updated_book() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .returning(|id| Ok(Some(sample_book(id))));
    repo.expect_update()
        .returning(|id, draft| Ok(book_from_draft(id, draft)));

    let app = app_with(repo);
    let response = app
        .oneshot(post_json(
            "/books/7",
            json!({ "title": "Emma", "author": "Jane Austen", "year": 1815 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Emma");
    assert_eq!(body["genre"], Value::Null);
}

#[tokio::test]
async fn update_of_missing_book_is_404() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_update().times(0);

    let app = app_with(repo);
    let response = app
        .oneshot(post_json(
            "/books/99",
            json!({ "title": "Emma", "author": "Jane Austen" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_returns_no_content() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id()
        .with(eq(3))
        .returning(|id| Ok(Some(sample_book(id))));
    repo.expect_delete().with(eq(3)).returning(|_| Ok(()));

    let app = app_with(repo);
    let response = app.oneshot(post_empty("/books/3/delete")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn delete_of_missing_book_is_404() {
    let mut repo = MockBookRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));
    repo.expect_delete().times(0);

    let app = app_with(repo);
    let response = app.oneshot(post_empty("/books/99/delete")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
