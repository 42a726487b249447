use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use tokio::task;

use crate::modules::book::domain::{
    entities::{Book, BookDraft},
    repositories::BookRepository,
};
use crate::modules::book::infrastructure::models::{BookChangeset, BookModel, NewBook};
use crate::schema::books;
use crate::shared::database::Database;
use crate::shared::errors::{AppError, AppResult};

pub struct BookRepositoryImpl {
    db: Arc<Database>,
}

impl BookRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<BookModel>> {
            let mut conn = db.get_connection()?;
            let m = books::table
                .find(id)
                .first::<BookModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        Ok(model.map(Book::from))
    }

    async fn list(&self) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<BookModel>> {
            let mut conn = db.get_connection()?;
            let rows = books::table
                .order(books::id.asc())
                .load::<BookModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn list_page(&self, offset: i64, limit: i64) -> AppResult<Vec<Book>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<BookModel>> {
            let mut conn = db.get_connection()?;
            let rows = books::table
                .order(books::id.asc())
                .offset(offset)
                .limit(limit)
                .load::<BookModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(Book::from).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let total = books::table.count().get_result::<i64>(&mut conn)?;
            Ok(total)
        })
        .await?
    }

    async fn insert(&self, draft: &BookDraft) -> AppResult<Book> {
        let db = Arc::clone(&self.db);
        let draft = draft.clone();

        let model = task::spawn_blocking(move || -> AppResult<BookModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::insert_into(books::table)
                .values(NewBook::from_draft(&draft))
                .get_result::<BookModel>(&mut conn)?;
            Ok(m)
        })
        .await??;

        Ok(Book::from(model))
    }

    async fn insert_many(&self, drafts: &[BookDraft]) -> AppResult<usize> {
        let db = Arc::clone(&self.db);
        let drafts = drafts.to_vec();

        task::spawn_blocking(move || -> AppResult<usize> {
            let mut conn = db.get_connection()?;
            let rows: Vec<NewBook<'_>> = drafts.iter().map(NewBook::from_draft).collect();
            let n = diesel::insert_into(books::table)
                .values(&rows)
                .execute(&mut conn)?;
            Ok(n)
        })
        .await?
    }

    async fn update(&self, id: i32, draft: &BookDraft) -> AppResult<Book> {
        let db = Arc::clone(&self.db);
        let draft = draft.clone();

        let model = task::spawn_blocking(move || -> AppResult<BookModel> {
            let mut conn = db.get_connection()?;
            let m = diesel::update(books::table.find(id))
                .set(&BookChangeset::from_draft(&draft))
                .get_result::<BookModel>(&mut conn)
                .optional()?;

            m.ok_or_else(|| AppError::NotFound(format!("Book with ID {} not found", id)))
        })
        .await??;

        Ok(Book::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(books::table.find(id)).execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!("Book with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }
}
