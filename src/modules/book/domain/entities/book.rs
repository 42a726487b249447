use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::validation::ValidationErrors;

pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_AUTHOR_LENGTH: usize = 255;
pub const MAX_GENRE_LENGTH: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the catalog listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookPage {
    pub books: Vec<Book>,
    pub page: i64,
    pub page_count: i64,
    pub total_books: i64,
}

/// Unpersisted book data, normalized on construction and validated before it
/// reaches the repository. Used for both create and full-overwrite update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl BookDraft {
    /// Trims all text fields; an empty genre counts as absent
    pub fn new(
        title: String,
        author: String,
        genre: Option<String>,
        year: Option<i32>,
    ) -> Self {
        let genre = genre
            .map(|g| g.trim().to_string())
            .filter(|g| !g.is_empty());

        Self {
            title: title.trim().to_string(),
            author: author.trim().to_string(),
            genre,
            year,
        }
    }

    /// Check every field and report all failures at once
    pub fn validate(&self) -> AppResult<()> {
        let mut errors = ValidationErrors::new();

        if self.title.is_empty() {
            errors.add("title", "must not be empty");
        } else if self.title.len() > MAX_TITLE_LENGTH {
            errors.add("title", "must be at most 255 characters");
        }

        if self.author.is_empty() {
            errors.add("author", "must not be empty");
        } else if self.author.len() > MAX_AUTHOR_LENGTH {
            errors.add("author", "must be at most 255 characters");
        }

        if let Some(genre) = &self.genre {
            if genre.len() > MAX_GENRE_LENGTH {
                errors.add("genre", "must be at most 100 characters");
            }
        }

        if let Some(year) = self.year {
            if !(0..=9999).contains(&year) {
                errors.add("year", "must be between 0 and 9999");
            }
        }

        errors.into_result()
    }
}
