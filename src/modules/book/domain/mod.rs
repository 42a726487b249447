pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::book::{Book, BookDraft, BookPage};
pub use repositories::book_repository::BookRepository;
