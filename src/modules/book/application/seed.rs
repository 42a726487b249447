use super::service::BookService;
use crate::modules::book::domain::entities::BookDraft;
use crate::shared::errors::AppResult;
use crate::{log_info, log_warn};

/// Catalog contents used to pre-populate an empty database
pub fn seed_books() -> Vec<BookDraft> {
    [
        ("A Brief History of Time", "Stephen Hawking", "Non-Fiction", 1988),
        ("The Universe in a Nutshell", "Stephen Hawking", "Non-Fiction", 2001),
        ("The Martian", "Andy Weir", "Science Fiction", 2014),
        ("Ready Player One", "Ernest Cline", "Science Fiction", 2011),
        ("Armada", "Ernest Cline", "Science Fiction", 2015),
        ("Pride and Prejudice", "Jane Austen", "Classic", 1813),
        ("Emma", "Jane Austen", "Classic", 1815),
        (
            "Harry Potter and the Philosopher's Stone",
            "J.K. Rowling",
            "Fantasy",
            1997,
        ),
        (
            "Harry Potter and the Chamber of Secrets",
            "J.K. Rowling",
            "Fantasy",
            1998,
        ),
        (
            "Harry Potter and the Prisoner of Azkaban",
            "J.K. Rowling",
            "Fantasy",
            1999,
        ),
        (
            "Harry Potter and the Goblet of Fire",
            "J.K. Rowling",
            "Fantasy",
            2000,
        ),
        (
            "Harry Potter and the Order of the Phoenix",
            "J.K. Rowling",
            "Fantasy",
            2003,
        ),
        (
            "Harry Potter and the Half-Blood Prince",
            "J.K. Rowling",
            "Fantasy",
            2005,
        ),
        (
            "Harry Potter and the Deathly Hallows",
            "J.K. Rowling",
            "Fantasy",
            2007,
        ),
    ]
    .into_iter()
    .map(|(title, author, genre, year)| {
        BookDraft::new(
            title.to_string(),
            author.to_string(),
            Some(genre.to_string()),
            Some(year),
        )
    })
    .collect()
}

/// Insert the seed catalog; a non-empty catalog is left untouched
pub async fn run(service: &BookService) -> AppResult<usize> {
    let existing = service.list_books(None).await?;
    if existing.total_books > 0 {
        log_warn!(
            "Catalog already contains {} books, skipping seed",
            existing.total_books
        );
        return Ok(0);
    }

    let inserted = service.import_books(seed_books()).await?;
    log_info!("Seeded catalog with {} books", inserted);

    Ok(inserted)
}
