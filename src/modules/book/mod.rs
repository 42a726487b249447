pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod routes;

// Re-exports for easy access
pub use application::service::BookService;
pub use domain::entities::book::{Book, BookDraft, BookPage};
pub use domain::repositories::book_repository::BookRepository;
pub use infrastructure::persistence::BookRepositoryImpl;
