use super::super::domain::{
    entities::{Book, BookDraft, BookPage},
    repositories::BookRepository,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::sync::Arc;

/// Books shown per page of the catalog listing
pub const PAGE_SIZE: i64 = 10;

pub struct BookService {
    book_repo: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }

    pub async fn create_book(&self, draft: BookDraft) -> AppResult<Book> {
        // Validate book data
        draft.validate()?;

        // Save to database
        let saved = self.book_repo.insert(&draft).await?;

        Ok(saved)
    }

    pub async fn get_book(&self, id: i32) -> AppResult<Option<Book>> {
        // Get from database
        let book = self.book_repo.find_by_id(id).await?;

        Ok(book)
    }

    /// List the catalog. Without a page number the whole catalog is returned
    /// as a single page; with one, a fixed-size slice of it.
    pub async fn list_books(&self, page: Option<i64>) -> AppResult<BookPage> {
        match page {
            None => {
                let books = self.book_repo.list().await?;
                let total_books = books.len() as i64;

                Ok(BookPage {
                    books,
                    page: 1,
                    page_count: 1,
                    total_books,
                })
            }
            Some(page) => {
                Validator::validate_page(page)?;

                let total_books = self.book_repo.count().await?;
                let offset = (page - 1) * PAGE_SIZE;
                let books = self.book_repo.list_page(offset, PAGE_SIZE).await?;
                let page_count = std::cmp::max(1, (total_books + PAGE_SIZE - 1) / PAGE_SIZE);

                Ok(BookPage {
                    books,
                    page,
                    page_count,
                    total_books,
                })
            }
        }
    }

    pub async fn update_book(&self, id: i32, draft: BookDraft) -> AppResult<Book> {
        // Check if book exists
        self.book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        // Validate new data
        draft.validate()?;

        // Overwrite all fields
        let updated = self.book_repo.update(id, &draft).await?;

        Ok(updated)
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        // Check if book exists
        let _book = self
            .book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))?;

        // Delete from database
        self.book_repo.delete(id).await?;

        Ok(())
    }

    /// Validate and insert a batch of books, returning how many were stored
    pub async fn import_books(&self, drafts: Vec<BookDraft>) -> AppResult<usize> {
        if drafts.is_empty() {
            return Ok(0);
        }

        for draft in &drafts {
            draft.validate()?;
        }

        let inserted = self.book_repo.insert_many(&drafts).await?;

        Ok(inserted)
    }
}
