use super::domain::entities::{Book, BookDraft, BookPage};
use crate::server::AppState;
use crate::shared::errors::AppError;
use crate::{log_error, log_info};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl BookPayload {
    fn into_draft(self) -> BookDraft {
        BookDraft::new(self.title, self.author, self.genre, self.year)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBooksParams {
    pub page: Option<i64>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books))
        .route("/books/new", post(create_book))
        .route("/books/{id}", get(get_book).post(update_book))
        .route("/books/{id}/delete", post(delete_book))
}

async fn list_books(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> Result<Json<BookPage>, AppError> {
    let page = state.books.list_books(params.page).await?;
    Ok(Json(page))
}

async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Book>, AppError> {
    let book = state.books
        .get_book(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

    Ok(Json(book))
}

async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<BookPayload>,
) -> Result<(StatusCode, Json<Book>), AppError> {
    let result = state.books.create_book(payload.into_draft()).await;

    match &result {
        Ok(book) => {
            log_info!("Created book {} ('{}')", book.id, book.title);
        }
        Err(e) => {
            log_error!("Failed to create book: {}", e);
        }
    }

    result.map(|book| (StatusCode::CREATED, Json(book)))
}

async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<BookPayload>,
) -> Result<Json<Book>, AppError> {
    let book = state.books
        .update_book(id, payload.into_draft())
        .await?;

    Ok(Json(book))
}

async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    state.books.delete_book(id).await?;
    log_info!("Deleted book {}", id);

    Ok(StatusCode::NO_CONTENT)
}
