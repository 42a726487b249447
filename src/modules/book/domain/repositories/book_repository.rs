use crate::modules::book::domain::entities::{Book, BookDraft};
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[async_trait]
pub trait BookRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>>;
    async fn list(&self) -> AppResult<Vec<Book>>;
    async fn list_page(&self, offset: i64, limit: i64) -> AppResult<Vec<Book>>;
    async fn count(&self) -> AppResult<i64>;
    async fn insert(&self, draft: &BookDraft) -> AppResult<Book>;
    async fn insert_many(&self, drafts: &[BookDraft]) -> AppResult<usize>;
    async fn update(&self, id: i32, draft: &BookDraft) -> AppResult<Book>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
