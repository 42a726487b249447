use crate::modules::book::domain::entities::{Book, BookDraft};
use crate::schema::books;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// ============= BOOK MODELS =============

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct BookModel {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new books
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct NewBook<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub genre: Option<&'a str>,
    pub year: Option<i32>,
}

// For updating existing books (excludes id and created_at); an update
// overwrites every column, so absent optionals clear the stored value
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = books)]
#[diesel(treat_none_as_null = true)]
pub struct BookChangeset<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub genre: Option<&'a str>,
    pub year: Option<i32>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> NewBook<'a> {
    pub fn from_draft(draft: &'a BookDraft) -> Self {
        Self {
            title: &draft.title,
            author: &draft.author,
            genre: draft.genre.as_deref(),
            year: draft.year,
        }
    }
}

impl<'a> BookChangeset<'a> {
    pub fn from_draft(draft: &'a BookDraft) -> Self {
        Self {
            title: &draft.title,
            author: &draft.author,
            genre: draft.genre.as_deref(),
            year: draft.year,
            updated_at: Utc::now(),
        }
    }
}

impl From<BookModel> for Book {
    fn from(model: BookModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            genre: model.genre,
            year: model.year,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
