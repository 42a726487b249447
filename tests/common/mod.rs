use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use chrono::{TimeZone, Utc};

use bookshelf::modules::book::{Book, BookDraft, BookRepository, BookService};
use bookshelf::server::{router, AppState};
use bookshelf::shared::errors::AppResult;

mockall::mock! {
    pub BookRepo {}

    #[async_trait]
    impl BookRepository for BookRepo {
        async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;
        async fn list(&self) -> AppResult<Vec<Book>>;
        async fn list_page(&self, offset: i64, limit: i64) -> AppResult<Vec<Book>>;
        async fn count(&self) -> AppResult<i64>;
        async fn insert(&self, draft: &BookDraft) -> AppResult<Book>;
        async fn insert_many(&self, drafts: &[BookDraft]) -> AppResult<usize>;
        async fn update(&self, id: i32, draft: &BookDraft) -> AppResult<Book>;
        async fn delete(&self, id: i32) -> AppResult<()>;
    }
}

#[allow(dead_code)]
pub fn sample_book(id: i32) -> Book {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    Book {
        id,
        title: "The Martian".to_string(),
        author: "Andy Weir".to_string(),
        genre: Some("Science Fiction".to_string()),
        year: Some(2014),
        created_at: timestamp,
        updated_at: timestamp,
    }
}

#[allow(dead_code)]
pub fn book_from_draft(id: i32, draft: &BookDraft) -> Book {
    let timestamp = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();

    Book {
        id,
        title: draft.title.clone(),
        author: draft.author.clone(),
        genre: draft.genre.clone(),
        year: draft.year,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

#[allow(dead_code)]
pub fn service_with(repo: MockBookRepo) -> BookService {
    BookService::new(Arc::new(repo))
}

#[allow(dead_code)]
pub fn app_with(repo: MockBookRepo) -> Router {
    let state = AppState {
        books: Arc::new(BookService::new(Arc::new(repo))),
    };

    router::init(state)
}
